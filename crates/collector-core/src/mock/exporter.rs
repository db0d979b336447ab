//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Mock exporter for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::debug;

use crate::error::CollectorResult;
use crate::traits::component::Component;
use crate::traits::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::traits::exporter::{LogsExporter, MetricsExporter, TracesExporter};
use crate::types::telemetry::{LogsData, MetricsData, TracesData};

/// Exporter that counts exported batches and discards them
#[derive(Debug, Default)]
pub struct MockExporter {
    started: AtomicBool,
    exported_traces: AtomicU64,
    exported_metrics: AtomicU64,
    exported_logs: AtomicU64,
}

impl MockExporter {
    /// Create a stopped mock exporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a boxed traces exporter
    pub fn boxed_traces() -> Box<dyn TracesExporter> {
        Box::new(Self::new())
    }

    /// Create a boxed metrics exporter
    pub fn boxed_metrics() -> Box<dyn MetricsExporter> {
        Box::new(Self::new())
    }

    /// Create a boxed logs exporter
    pub fn boxed_logs() -> Box<dyn LogsExporter> {
        Box::new(Self::new())
    }

    /// Whether the exporter is currently started
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of trace batches exported
    pub fn exported_traces(&self) -> u64 {
        self.exported_traces.load(Ordering::SeqCst)
    }

    /// Number of metric batches exported
    pub fn exported_metrics(&self) -> u64 {
        self.exported_metrics.load(Ordering::SeqCst)
    }

    /// Number of log batches exported
    pub fn exported_logs(&self) -> u64 {
        self.exported_logs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Component for MockExporter {
    async fn start(&self) -> CollectorResult<()> {
        debug!("Starting mock exporter");
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn shutdown(&self) -> CollectorResult<()> {
        debug!("Stopping mock exporter");
        self.started.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl TracesConsumer for MockExporter {
    async fn consume_traces(&self, _traces: TracesData) -> CollectorResult<()> {
        self.exported_traces.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl MetricsConsumer for MockExporter {
    async fn consume_metrics(&self, _metrics: MetricsData) -> CollectorResult<()> {
        self.exported_metrics.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl LogsConsumer for MockExporter {
    async fn consume_logs(&self, _logs: LogsData) -> CollectorResult<()> {
        self.exported_logs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
