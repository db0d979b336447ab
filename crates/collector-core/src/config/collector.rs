//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Top-level configuration for the Agogos telemetry collector
//!
//! This module provides the fully resolved configuration model: one map of
//! opaque component configuration blocks per category, plus the service
//! section that wires components into pipelines. Loading and format
//! concerns live elsewhere; this model starts where parsing ends.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::service::ServiceConfig;
use crate::traits::config::ComponentConfig;
use crate::types::component::{ComponentId, ComponentKind};

/// Map of component configuration blocks for one category
pub type ComponentConfigs = HashMap<ComponentId, Arc<dyn ComponentConfig>>;

/// Fully resolved collector configuration
///
/// The four component maps declare what exists; the service section
/// declares what runs. Configuration blocks are opaque here: each one is
/// produced and understood by a single factory, and the model only runs
/// their self-validation.
#[derive(Debug, Clone, Default)]
pub struct CollectorConfig {
    /// Configured receivers
    pub receivers: ComponentConfigs,

    /// Configured processors
    pub processors: ComponentConfigs,

    /// Configured exporters
    pub exporters: ComponentConfigs,

    /// Configured extensions
    pub extensions: ComponentConfigs,

    /// Service section
    pub service: ServiceConfig,
}

impl CollectorConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a receiver configuration block
    pub fn with_receiver(mut self, id: ComponentId, config: Arc<dyn ComponentConfig>) -> Self {
        self.receivers.insert(id, config);
        self
    }

    /// Add a processor configuration block
    pub fn with_processor(mut self, id: ComponentId, config: Arc<dyn ComponentConfig>) -> Self {
        self.processors.insert(id, config);
        self
    }

    /// Add an exporter configuration block
    pub fn with_exporter(mut self, id: ComponentId, config: Arc<dyn ComponentConfig>) -> Self {
        self.exporters.insert(id, config);
        self
    }

    /// Add an extension configuration block
    pub fn with_extension(mut self, id: ComponentId, config: Arc<dyn ComponentConfig>) -> Self {
        self.extensions.insert(id, config);
        self
    }

    /// Replace the service section
    pub fn with_service(mut self, service: ServiceConfig) -> Self {
        self.service = service;
        self
    }

    /// Component configuration blocks for one category
    pub fn components(&self, kind: ComponentKind) -> &ComponentConfigs {
        match kind {
            ComponentKind::Receiver => &self.receivers,
            ComponentKind::Processor => &self.processors,
            ComponentKind::Exporter => &self.exporters,
            ComponentKind::Extension => &self.extensions,
        }
    }
}
