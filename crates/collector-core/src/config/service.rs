//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Service configuration for the Agogos telemetry collector
//!
//! This module provides the service section of the configuration: which of
//! the configured extensions are actually enabled, the pipeline graph, and
//! the collector's own telemetry settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::pipeline::PipelineConfig;
use crate::config::telemetry::TelemetryConfig;
use crate::types::component::ComponentId;
use crate::types::pipeline::PipelineId;

/// Service section of the collector configuration
///
/// Declaring a component in a top-level section does nothing by itself;
/// only components referenced here participate in the running service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Self-telemetry settings
    pub telemetry: TelemetryConfig,

    /// Enabled extensions, in start order
    pub extensions: Vec<ComponentId>,

    /// Pipeline graph keyed by pipeline identifier
    pub pipelines: HashMap<PipelineId, PipelineConfig>,
}

impl ServiceConfig {
    /// Create an empty service section
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable an extension
    pub fn with_extension(mut self, id: ComponentId) -> Self {
        self.extensions.push(id);
        self
    }

    /// Add a pipeline
    pub fn with_pipeline(mut self, id: PipelineId, pipeline: PipelineConfig) -> Self {
        self.pipelines.insert(id, pipeline);
        self
    }
}
