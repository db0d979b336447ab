//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Mock telemetry consumer for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{CollectorError, CollectorResult};
use crate::traits::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::types::telemetry::{LogsData, MetricsData, TracesData};

/// Consumer of all three signals that counts what it receives
///
/// Stands in for the next pipeline stage in factory and processor tests.
#[derive(Debug, Default)]
pub struct MockConsumer {
    /// When set, every consume call fails with this message
    fail_with: Option<String>,

    traces: AtomicU64,
    metrics: AtomicU64,
    logs: AtomicU64,
}

impl MockConsumer {
    /// Create a consumer that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a consumer that rejects everything with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of trace batches consumed
    pub fn traces_batches(&self) -> u64 {
        self.traces.load(Ordering::SeqCst)
    }

    /// Number of metric batches consumed
    pub fn metrics_batches(&self) -> u64 {
        self.metrics.load(Ordering::SeqCst)
    }

    /// Number of log batches consumed
    pub fn logs_batches(&self) -> u64 {
        self.logs.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> CollectorResult<()> {
        match &self.fail_with {
            Some(message) => Err(CollectorError::component(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TracesConsumer for MockConsumer {
    async fn consume_traces(&self, _traces: TracesData) -> CollectorResult<()> {
        self.check_failure()?;
        self.traces.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl MetricsConsumer for MockConsumer {
    async fn consume_metrics(&self, _metrics: MetricsData) -> CollectorResult<()> {
        self.check_failure()?;
        self.metrics.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl LogsConsumer for MockConsumer {
    async fn consume_logs(&self, _logs: LogsData) -> CollectorResult<()> {
        self.check_failure()?;
        self.logs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
