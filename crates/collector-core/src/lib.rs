//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Agogos Telemetry Collector Core
//!
//! This crate provides the core component model of the Agogos telemetry
//! collector: component and pipeline identity, per-category factories with
//! per-signal capability slots, the resolved configuration model, and the
//! whole-graph validation pass that gates service startup.
//!
//! The crate deliberately stops at the model boundary. Configuration file
//! loading, pipeline execution, and the service runtime are built on top
//! of it by the host binary.

pub mod config;
pub mod error;
pub mod factory;
pub mod metrics;
pub mod mock;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{CollectorConfig, MetricsLevel, PipelineConfig, ServiceConfig, TelemetryConfig};
pub use error::{CollectorError, CollectorResult};
pub use factory::{
    BuildInfo, CreateSettings, ExporterFactory, ExtensionFactory, ProcessorFactory,
    ReceiverFactory, TelemetrySettings,
};
pub use traits::{
    BaseComponent, Component, ComponentConfig, Extension, LogsConsumer, LogsExporter,
    LogsProcessor, MetricsConsumer, MetricsExporter, MetricsProcessor, PipelineWatcher, Receiver,
    TracesConsumer, TracesExporter, TracesProcessor,
};
pub use types::{
    ComponentId, ComponentKind, ComponentType, PipelineId, SignalKind, StabilityLevel,
};

/// Collector version information
pub const COLLECTOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collector name
pub const COLLECTOR_NAME: &str = "agogos";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockComponentConfig;
    use std::sync::Arc;

    #[test]
    fn test_collector_constants() {
        assert_eq!(COLLECTOR_NAME, "agogos");
        assert_eq!(COLLECTOR_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_minimal_collector_config_round_trip() {
        let config = CollectorConfig::new()
            .with_receiver(
                ComponentId::new("otlp"),
                Arc::new(MockComponentConfig::valid()),
            )
            .with_exporter(
                ComponentId::new("logging"),
                Arc::new(MockComponentConfig::valid()),
            )
            .with_service(ServiceConfig::new().with_pipeline(
                PipelineId::from(SignalKind::Metrics),
                PipelineConfig::new()
                    .with_receiver(ComponentId::new("otlp"))
                    .with_exporter(ComponentId::new("logging")),
            ));

        assert!(config.validate().is_ok());
    }
}
