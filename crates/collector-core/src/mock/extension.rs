//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Mock extension for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::debug;

use crate::error::CollectorResult;
use crate::traits::component::Component;
use crate::traits::extension::{Extension, PipelineWatcher};

/// Extension that tracks lifecycle and pipeline readiness notifications
#[derive(Debug, Default)]
pub struct MockExtension {
    started: AtomicBool,
    ready_calls: AtomicU64,
    not_ready_calls: AtomicU64,
}

impl MockExtension {
    /// Create a stopped mock extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a boxed mock extension, as factory constructors return them
    pub fn boxed() -> Box<dyn Extension> {
        Box::new(Self::new())
    }

    /// Whether the extension is currently started
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of ready notifications observed
    pub fn ready_calls(&self) -> u64 {
        self.ready_calls.load(Ordering::SeqCst)
    }

    /// Number of not-ready notifications observed
    pub fn not_ready_calls(&self) -> u64 {
        self.not_ready_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Component for MockExtension {
    async fn start(&self) -> CollectorResult<()> {
        debug!("Starting mock extension");
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn shutdown(&self) -> CollectorResult<()> {
        debug!("Stopping mock extension");
        self.started.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl PipelineWatcher for MockExtension {
    async fn ready(&self) -> CollectorResult<()> {
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn not_ready(&self) -> CollectorResult<()> {
        self.not_ready_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
