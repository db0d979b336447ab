//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Configuration graph validation for the Agogos telemetry collector
//!
//! This module provides the whole-graph validation pass run after loading:
//! category presence checks, each component's own validation hook, and the
//! referential integrity of the service section. Validation is fail-fast
//! and returns the first error found, except for self-telemetry problems,
//! which are logged and never block startup.

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::config::collector::CollectorConfig;
use crate::config::pipeline::PipelineConfig;
use crate::error::{CollectorError, CollectorResult};
use crate::types::component::ComponentKind;
use crate::types::pipeline::PipelineId;

/// Category order for running component validation hooks
const HOOK_ORDER: [ComponentKind; 4] = [
    ComponentKind::Receiver,
    ComponentKind::Exporter,
    ComponentKind::Processor,
    ComponentKind::Extension,
];

impl CollectorConfig {
    /// Validate the whole configuration graph
    ///
    /// The pass is pure and synchronous: it reads only the already-loaded
    /// model and can be re-run any number of times with the same result.
    /// Checks run in a fixed order and the first failure is returned, so a
    /// configuration with no receivers reports that before anything else
    /// regardless of what other problems it has.
    pub fn validate(&self) -> CollectorResult<()> {
        debug!("validating collector configuration graph");

        if self.receivers.is_empty() {
            return Err(CollectorError::MissingReceivers);
        }

        if self.exporters.is_empty() {
            return Err(CollectorError::MissingExporters);
        }

        for kind in HOOK_ORDER {
            for (id, config) in self.components(kind) {
                config.validate().map_err(|e| {
                    CollectorError::invalid_component_config(kind, id.clone(), e)
                })?;
            }
        }

        self.validate_service()
    }

    /// Validate the service section against the component maps
    fn validate_service(&self) -> CollectorResult<()> {
        for id in &self.service.extensions {
            if !self.extensions.contains_key(id) {
                return Err(CollectorError::DanglingExtension { id: id.clone() });
            }
        }

        if self.service.pipelines.is_empty() {
            return Err(CollectorError::MissingPipelines);
        }

        for (id, pipeline) in &self.service.pipelines {
            self.validate_pipeline(id, pipeline)?;
        }

        // Self-telemetry problems are reported but never block startup.
        if let Err(e) = self.service.telemetry.validate_config() {
            warn!(error = %e, "service telemetry configuration failed validation");
        }

        Ok(())
    }

    /// Validate one pipeline's wiring against the component maps
    fn validate_pipeline(&self, id: &PipelineId, pipeline: &PipelineConfig) -> CollectorResult<()> {
        if id.signal().is_none() {
            return Err(CollectorError::UnknownPipelineKind {
                kind: id.kind().to_string(),
                pipeline: id.clone(),
            });
        }

        if pipeline.receivers.is_empty() {
            return Err(CollectorError::EmptyPipelineSection {
                pipeline: id.clone(),
                kind: ComponentKind::Receiver,
            });
        }

        for receiver_id in &pipeline.receivers {
            if !self.receivers.contains_key(receiver_id) {
                return Err(CollectorError::DanglingReference {
                    pipeline: id.clone(),
                    kind: ComponentKind::Receiver,
                    id: receiver_id.clone(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(pipeline.processors.len());
        for processor_id in &pipeline.processors {
            if !self.processors.contains_key(processor_id) {
                return Err(CollectorError::DanglingReference {
                    pipeline: id.clone(),
                    kind: ComponentKind::Processor,
                    id: processor_id.clone(),
                });
            }

            if !seen.insert(processor_id) {
                return Err(CollectorError::DuplicateReference {
                    pipeline: id.clone(),
                    id: processor_id.clone(),
                });
            }
        }

        if pipeline.exporters.is_empty() {
            return Err(CollectorError::EmptyPipelineSection {
                pipeline: id.clone(),
                kind: ComponentKind::Exporter,
            });
        }

        for exporter_id in &pipeline.exporters {
            if !self.exporters.contains_key(exporter_id) {
                return Err(CollectorError::DanglingReference {
                    pipeline: id.clone(),
                    kind: ComponentKind::Exporter,
                    id: exporter_id.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::service::ServiceConfig;
    use crate::config::telemetry::{TelemetryConfig, TelemetryLogsConfig};
    use crate::mock::config::MockComponentConfig;
    use crate::types::component::ComponentId;
    use crate::types::pipeline::SignalKind;
    use std::sync::Arc;

    fn minimal_valid_config() -> CollectorConfig {
        CollectorConfig::new()
            .with_receiver(
                ComponentId::new("otlp"),
                Arc::new(MockComponentConfig::valid()),
            )
            .with_processor(
                ComponentId::new("batch"),
                Arc::new(MockComponentConfig::valid()),
            )
            .with_exporter(
                ComponentId::new("logging"),
                Arc::new(MockComponentConfig::valid()),
            )
            .with_service(ServiceConfig::new().with_pipeline(
                PipelineId::from(SignalKind::Traces),
                PipelineConfig::new()
                    .with_receiver(ComponentId::new("otlp"))
                    .with_processor(ComponentId::new("batch"))
                    .with_exporter(ComponentId::new("logging")),
            ))
    }

    #[test]
    fn test_minimal_valid_config_passes() {
        assert!(minimal_valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_config_reports_missing_receivers_first() {
        let err = CollectorConfig::new().validate().unwrap_err();
        assert!(matches!(err, CollectorError::MissingReceivers));
    }

    #[test]
    fn test_missing_exporters_reported_before_pipeline_problems() {
        let config = CollectorConfig::new().with_receiver(
            ComponentId::new("otlp"),
            Arc::new(MockComponentConfig::valid()),
        );

        let err = config.validate().unwrap_err();
        assert!(matches!(err, CollectorError::MissingExporters));
    }

    #[test]
    fn test_component_hook_failure_is_wrapped_with_identity() {
        let mut config = minimal_valid_config();
        config.processors.insert(
            ComponentId::with_name("batch", "broken"),
            Arc::new(MockComponentConfig::failing("queue size must be positive")),
        );

        let err = config.validate().unwrap_err();
        match err {
            CollectorError::InvalidComponentConfig { kind, id, source } => {
                assert_eq!(kind, ComponentKind::Processor);
                assert_eq!(id, ComponentId::with_name("batch", "broken"));
                assert!(source.to_string().contains("queue size must be positive"));
            }
            other => panic!("expected InvalidComponentConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_receiver_hooks_run_before_exporter_hooks() {
        let mut config = minimal_valid_config();
        config.receivers.insert(
            ComponentId::with_name("otlp", "broken"),
            Arc::new(MockComponentConfig::failing("bad receiver")),
        );
        config.exporters.insert(
            ComponentId::with_name("logging", "broken"),
            Arc::new(MockComponentConfig::failing("bad exporter")),
        );

        let err = config.validate().unwrap_err();
        match err {
            CollectorError::InvalidComponentConfig { kind, .. } => {
                assert_eq!(kind, ComponentKind::Receiver);
            }
            other => panic!("expected InvalidComponentConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_processor_in_pipeline_is_rejected() {
        let mut config = minimal_valid_config();
        config.service.pipelines.insert(
            PipelineId::from(SignalKind::Traces),
            PipelineConfig::new()
                .with_receiver(ComponentId::new("otlp"))
                .with_processor(ComponentId::new("batch"))
                .with_processor(ComponentId::new("batch"))
                .with_exporter(ComponentId::new("logging")),
        );

        let err = config.validate().unwrap_err();
        match err {
            CollectorError::DuplicateReference { pipeline, id } => {
                assert_eq!(pipeline, PipelineId::from(SignalKind::Traces));
                assert_eq!(id, ComponentId::new("batch"));
            }
            other => panic!("expected DuplicateReference, got {other:?}"),
        }
    }

    #[test]
    fn test_same_processor_in_two_pipelines_is_allowed() {
        let mut config = minimal_valid_config();
        config.service.pipelines.insert(
            PipelineId::with_name("traces", "second"),
            PipelineConfig::new()
                .with_receiver(ComponentId::new("otlp"))
                .with_processor(ComponentId::new("batch"))
                .with_exporter(ComponentId::new("logging")),
        );

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_pipeline_kind_is_rejected() {
        let mut config = minimal_valid_config();
        config.service.pipelines.clear();
        config.service.pipelines.insert(
            PipelineId::new("profiles"),
            PipelineConfig::new()
                .with_receiver(ComponentId::new("otlp"))
                .with_exporter(ComponentId::new("logging")),
        );

        let err = config.validate().unwrap_err();
        match err {
            CollectorError::UnknownPipelineKind { kind, pipeline } => {
                assert_eq!(kind, "profiles");
                assert_eq!(pipeline, PipelineId::new("profiles"));
            }
            other => panic!("expected UnknownPipelineKind, got {other:?}"),
        }
    }

    #[test]
    fn test_broken_telemetry_does_not_fail_validation() {
        let mut config = minimal_valid_config();
        config.service.telemetry = TelemetryConfig {
            logs: TelemetryLogsConfig {
                level: "shouting".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let config = minimal_valid_config();
        assert!(config.validate().is_ok());
        assert!(config.validate().is_ok());

        let broken = CollectorConfig::new();
        assert!(matches!(
            broken.validate().unwrap_err(),
            CollectorError::MissingReceivers
        ));
        assert!(matches!(
            broken.validate().unwrap_err(),
            CollectorError::MissingReceivers
        ));
    }
}
