//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Core types for the Agogos telemetry collector
//!
//! This module provides the identity, stability, and payload types shared
//! across the component framework and the configuration model.

pub mod component;
pub mod pipeline;
pub mod stability;
pub mod telemetry;

// Re-export commonly used types
pub use component::{ComponentId, ComponentKind, ComponentType, ID_SEPARATOR};
pub use pipeline::{PipelineId, SignalKind};
pub use stability::StabilityLevel;
pub use telemetry::{
    LogRecord, LogSeverity, LogsData, MetricPoint, MetricValue, MetricsData, SpanData, TracesData,
};
