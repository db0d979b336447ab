//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Mock processor for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::error::CollectorResult;
use crate::traits::component::Component;
use crate::traits::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::traits::processor::{LogsProcessor, MetricsProcessor, TracesProcessor};
use crate::types::telemetry::{LogsData, MetricsData, TracesData};

/// Processor that counts batches and forwards them unchanged
///
/// Forwards each signal to the next consumer it was built with; signals it
/// has no next consumer for are counted and dropped.
#[derive(Default)]
pub struct MockProcessor {
    started: AtomicBool,
    consumed_traces: AtomicU64,
    consumed_metrics: AtomicU64,
    consumed_logs: AtomicU64,
    next_traces: Option<Arc<dyn TracesConsumer>>,
    next_metrics: Option<Arc<dyn MetricsConsumer>>,
    next_logs: Option<Arc<dyn LogsConsumer>>,
}

impl MockProcessor {
    /// Create a processor that counts and drops everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a boxed traces processor forwarding to the given consumer
    pub fn boxed_traces(next: Arc<dyn TracesConsumer>) -> Box<dyn TracesProcessor> {
        Box::new(Self {
            next_traces: Some(next),
            ..Self::default()
        })
    }

    /// Create a boxed metrics processor forwarding to the given consumer
    pub fn boxed_metrics(next: Arc<dyn MetricsConsumer>) -> Box<dyn MetricsProcessor> {
        Box::new(Self {
            next_metrics: Some(next),
            ..Self::default()
        })
    }

    /// Create a boxed logs processor forwarding to the given consumer
    pub fn boxed_logs(next: Arc<dyn LogsConsumer>) -> Box<dyn LogsProcessor> {
        Box::new(Self {
            next_logs: Some(next),
            ..Self::default()
        })
    }

    /// Whether the processor is currently started
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of trace batches consumed
    pub fn consumed_traces(&self) -> u64 {
        self.consumed_traces.load(Ordering::SeqCst)
    }

    /// Number of metric batches consumed
    pub fn consumed_metrics(&self) -> u64 {
        self.consumed_metrics.load(Ordering::SeqCst)
    }

    /// Number of log batches consumed
    pub fn consumed_logs(&self) -> u64 {
        self.consumed_logs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Component for MockProcessor {
    async fn start(&self) -> CollectorResult<()> {
        debug!("Starting mock processor");
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn shutdown(&self) -> CollectorResult<()> {
        debug!("Stopping mock processor");
        self.started.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl TracesConsumer for MockProcessor {
    async fn consume_traces(&self, traces: TracesData) -> CollectorResult<()> {
        self.consumed_traces.fetch_add(1, Ordering::SeqCst);
        match &self.next_traces {
            Some(next) => next.consume_traces(traces).await,
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MetricsConsumer for MockProcessor {
    async fn consume_metrics(&self, metrics: MetricsData) -> CollectorResult<()> {
        self.consumed_metrics.fetch_add(1, Ordering::SeqCst);
        match &self.next_metrics {
            Some(next) => next.consume_metrics(metrics).await,
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LogsConsumer for MockProcessor {
    async fn consume_logs(&self, logs: LogsData) -> CollectorResult<()> {
        self.consumed_logs.fetch_add(1, Ordering::SeqCst);
        match &self.next_logs {
            Some(next) => next.consume_logs(logs).await,
            None => Ok(()),
        }
    }
}
