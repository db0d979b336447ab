//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Factory creation settings for the Agogos telemetry collector
//!
//! This module provides the context handed to every factory constructor:
//! the identity of the instance being built, the telemetry wiring it should
//! use for its own observability, and the build information of the hosting
//! binary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::telemetry::MetricsLevel;
use crate::types::component::ComponentId;

/// Build information of the hosting collector binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Executable name
    pub command: String,

    /// Human-readable description
    pub description: String,

    /// Version string
    pub version: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            command: "agogos".to_string(),
            description: "Agogos telemetry collector".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Telemetry wiring a component should use for its own observability
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetrySettings {
    /// Verbosity of the self-metrics the component should emit
    pub metrics_level: MetricsLevel,

    /// Resource attributes describing this collector instance
    pub resource: HashMap<String, serde_json::Value>,
}

/// Settings handed to a factory when it builds one component instance
#[derive(Debug, Clone)]
pub struct CreateSettings {
    /// Identity of the instance being built
    pub id: ComponentId,

    /// Telemetry wiring for the instance
    pub telemetry: TelemetrySettings,

    /// Build information of the hosting binary
    pub build_info: BuildInfo,
}

impl CreateSettings {
    /// Create settings for the given instance with default telemetry wiring
    pub fn new(id: ComponentId) -> Self {
        Self {
            id,
            telemetry: TelemetrySettings::default(),
            build_info: BuildInfo::default(),
        }
    }

    /// Override the telemetry wiring
    pub fn with_telemetry(mut self, telemetry: TelemetrySettings) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Override the build information
    pub fn with_build_info(mut self, build_info: BuildInfo) -> Self {
        self.build_info = build_info;
        self
    }
}
