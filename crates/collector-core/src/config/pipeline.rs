//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Pipeline configuration for the Agogos telemetry collector
//!
//! This module provides the per-pipeline wiring block from the service
//! section: which receivers feed the pipeline, the ordered processor chain,
//! and which exporters terminate it.

use serde::{Deserialize, Serialize};

use crate::types::component::ComponentId;

/// Wiring of one pipeline
///
/// All references point into the top-level component sections of the
/// configuration; graph validation rejects references with no target.
/// Processor order is significant, and fan-out to multiple exporters is
/// expressed by listing them all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Receivers feeding this pipeline
    pub receivers: Vec<ComponentId>,

    /// Ordered processor chain
    pub processors: Vec<ComponentId>,

    /// Exporters terminating this pipeline
    pub exporters: Vec<ComponentId>,
}

impl PipelineConfig {
    /// Create an empty pipeline wiring block
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a receiver reference
    pub fn with_receiver(mut self, id: ComponentId) -> Self {
        self.receivers.push(id);
        self
    }

    /// Add a processor reference to the end of the chain
    pub fn with_processor(mut self, id: ComponentId) -> Self {
        self.processors.push(id);
        self
    }

    /// Add an exporter reference
    pub fn with_exporter(mut self, id: ComponentId) -> Self {
        self.exporters.push(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_config_builder_preserves_order() {
        let pipeline = PipelineConfig::new()
            .with_receiver(ComponentId::new("otlp"))
            .with_processor(ComponentId::new("memory_limiter"))
            .with_processor(ComponentId::new("batch"))
            .with_exporter(ComponentId::new("logging"));

        assert_eq!(pipeline.receivers.len(), 1);
        assert_eq!(
            pipeline.processors,
            vec![
                ComponentId::new("memory_limiter"),
                ComponentId::new("batch"),
            ]
        );
        assert_eq!(pipeline.exporters, vec![ComponentId::new("logging")]);
    }

    #[test]
    fn test_pipeline_config_deserializes_missing_sections_as_empty() {
        let pipeline: PipelineConfig =
            serde_json::from_str(r#"{"receivers": ["otlp"], "exporters": ["logging"]}"#).unwrap();

        assert_eq!(pipeline.receivers, vec![ComponentId::new("otlp")]);
        assert!(pipeline.processors.is_empty());
        assert_eq!(pipeline.exporters, vec![ComponentId::new("logging")]);
    }
}
