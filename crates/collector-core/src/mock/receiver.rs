//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Mock receiver for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::debug;

use crate::error::CollectorResult;
use crate::traits::component::Component;
use crate::traits::receiver::Receiver;

/// Receiver that tracks its lifecycle and produces nothing
#[derive(Debug, Default)]
pub struct MockReceiver {
    started: AtomicBool,
    start_calls: AtomicU64,
    shutdown_calls: AtomicU64,
}

impl MockReceiver {
    /// Create a stopped mock receiver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a boxed mock receiver, as factory constructors return them
    pub fn boxed() -> Box<dyn Receiver> {
        Box::new(Self::new())
    }

    /// Whether the receiver is currently started
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of start calls observed
    pub fn start_calls(&self) -> u64 {
        self.start_calls.load(Ordering::SeqCst)
    }

    /// Number of shutdown calls observed
    pub fn shutdown_calls(&self) -> u64 {
        self.shutdown_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Component for MockReceiver {
    async fn start(&self) -> CollectorResult<()> {
        debug!("Starting mock receiver");
        self.started.store(true, Ordering::SeqCst);
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn shutdown(&self) -> CollectorResult<()> {
        debug!("Stopping mock receiver");
        self.started.store(false, Ordering::SeqCst);
        self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
