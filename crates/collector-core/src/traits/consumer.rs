//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Telemetry consumer traits for the Agogos telemetry collector
//!
//! This module provides the per-signal consumption contracts that link
//! pipeline stages together. A receiver feeds the consumer it was built
//! with; processors are consumers that feed the next stage; exporters are
//! the terminal consumers.

use async_trait::async_trait;

use crate::error::CollectorResult;
use crate::types::telemetry::{LogsData, MetricsData, TracesData};

/// Consumer of trace batches
#[async_trait]
pub trait TracesConsumer: Send + Sync {
    /// Consume one batch of spans
    async fn consume_traces(&self, traces: TracesData) -> CollectorResult<()>;
}

/// Consumer of metric batches
#[async_trait]
pub trait MetricsConsumer: Send + Sync {
    /// Consume one batch of metric points
    async fn consume_metrics(&self, metrics: MetricsData) -> CollectorResult<()>;
}

/// Consumer of log batches
#[async_trait]
pub trait LogsConsumer: Send + Sync {
    /// Consume one batch of log records
    async fn consume_logs(&self, logs: LogsData) -> CollectorResult<()>;
}
