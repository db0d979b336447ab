//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Configuration model for the Agogos telemetry collector
//!
//! This module provides the fully resolved configuration model and its
//! validation: per-category component maps, the service section with its
//! pipeline graph, self-telemetry settings, and the whole-graph validation
//! pass.

pub mod collector;
pub mod pipeline;
pub mod service;
pub mod telemetry;
pub mod validate;

// Re-export commonly used types
pub use collector::{CollectorConfig, ComponentConfigs};
pub use pipeline::PipelineConfig;
pub use service::ServiceConfig;
pub use telemetry::{MetricsLevel, TelemetryConfig, TelemetryLogsConfig, TelemetryMetricsConfig};
