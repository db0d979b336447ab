//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error types for the Agogos telemetry collector
//!
//! This module provides the main error type used throughout the component
//! framework and the configuration model, including the structured variants
//! produced by configuration graph validation.

use std::error::Error as StdError;
use thiserror::Error;

use crate::types::component::{ComponentId, ComponentKind};
use crate::types::pipeline::{PipelineId, SignalKind};

/// Result type for collector operations
pub type CollectorResult<T> = Result<T, CollectorError>;

/// Main error type for the collector
#[derive(Error, Debug)]
pub enum CollectorError {
    /// No receivers are configured at all
    #[error("no enabled receivers specified in config")]
    MissingReceivers,

    /// No exporters are configured at all
    #[error("no enabled exporters specified in config")]
    MissingExporters,

    /// The service section declares no pipelines
    #[error("service must have at least one pipeline")]
    MissingPipelines,

    /// A component rejected its own configuration
    #[error("{kind} \"{id}\" has invalid configuration: {source}")]
    InvalidComponentConfig {
        kind: ComponentKind,
        id: ComponentId,
        #[source]
        source: Box<CollectorError>,
    },

    /// The service enables an extension that has no configuration entry
    #[error("service references extension \"{id}\" which does not exist")]
    DanglingExtension { id: ComponentId },

    /// A pipeline references a component that has no configuration entry
    #[error("pipeline \"{pipeline}\" references {kind} \"{id}\" which does not exist")]
    DanglingReference {
        pipeline: PipelineId,
        kind: ComponentKind,
        id: ComponentId,
    },

    /// A pipeline lists the same processor more than once
    #[error("pipeline \"{pipeline}\" references processor \"{id}\" multiple times")]
    DuplicateReference { pipeline: PipelineId, id: ComponentId },

    /// A pipeline has an empty receivers or exporters section
    #[error("pipeline \"{pipeline}\" must have at least one {kind}")]
    EmptyPipelineSection {
        pipeline: PipelineId,
        kind: ComponentKind,
    },

    /// A pipeline identifier names a signal the collector does not know
    #[error("unknown pipeline kind \"{kind}\" for pipeline \"{pipeline}\"")]
    UnknownPipelineKind { kind: String, pipeline: PipelineId },

    /// A factory was asked for a signal it never registered
    #[error("{signal} telemetry is not supported by this {kind}")]
    UnsupportedCapability {
        kind: ComponentKind,
        signal: SignalKind,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Component lifecycle errors
    #[error("Component error: {message}")]
    Component {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl CollectorError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        CollectorError::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        CollectorError::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a component lifecycle error
    pub fn component(message: impl Into<String>) -> Self {
        CollectorError::Component {
            message: message.into(),
            source: None,
        }
    }

    /// Create a component lifecycle error with source
    pub fn component_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        CollectorError::Component {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create the sentinel error returned by unregistered factory capabilities
    pub fn unsupported_capability(kind: ComponentKind, signal: SignalKind) -> Self {
        CollectorError::UnsupportedCapability { kind, signal }
    }

    /// Wrap a component's own validation failure with its identity
    pub fn invalid_component_config(
        kind: ComponentKind,
        id: ComponentId,
        source: CollectorError,
    ) -> Self {
        CollectorError::InvalidComponentConfig {
            kind,
            id,
            source: Box::new(source),
        }
    }

    /// Check if the error is the unsupported-capability sentinel
    pub fn is_unsupported_capability(&self) -> bool {
        matches!(self, CollectorError::UnsupportedCapability { .. })
    }

    /// Check if the error came from configuration graph validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CollectorError::MissingReceivers
                | CollectorError::MissingExporters
                | CollectorError::MissingPipelines
                | CollectorError::InvalidComponentConfig { .. }
                | CollectorError::DanglingExtension { .. }
                | CollectorError::DanglingReference { .. }
                | CollectorError::DuplicateReference { .. }
                | CollectorError::EmptyPipelineSection { .. }
                | CollectorError::UnknownPipelineKind { .. }
        )
    }

    /// Get the error type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            CollectorError::MissingReceivers => "MissingReceivers",
            CollectorError::MissingExporters => "MissingExporters",
            CollectorError::MissingPipelines => "MissingPipelines",
            CollectorError::InvalidComponentConfig { .. } => "InvalidComponentConfig",
            CollectorError::DanglingExtension { .. } => "DanglingExtension",
            CollectorError::DanglingReference { .. } => "DanglingReference",
            CollectorError::DuplicateReference { .. } => "DuplicateReference",
            CollectorError::EmptyPipelineSection { .. } => "EmptyPipelineSection",
            CollectorError::UnknownPipelineKind { .. } => "UnknownPipelineKind",
            CollectorError::UnsupportedCapability { .. } => "UnsupportedCapability",
            CollectorError::Configuration { .. } => "Configuration",
            CollectorError::Component { .. } => "Component",
        }
    }
}
