//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Service self-telemetry configuration for the Agogos telemetry collector
//!
//! This module provides the configuration of the collector's own logs and
//! metrics. Problems here are reported but never fail configuration graph
//! validation, so a collector with a misconfigured metrics address can
//! still move telemetry.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::{CollectorError, CollectorResult};

/// Log levels accepted for the collector's own logging
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Encodings accepted for the collector's own logging
pub const LOG_ENCODINGS: [&str; 2] = ["console", "json"];

/// Default listen address for the self-metrics endpoint
pub const DEFAULT_METRICS_ADDRESS: &str = "0.0.0.0:8888";

/// Verbosity of the self-metrics the collector emits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsLevel {
    /// No self-metrics at all
    None,

    /// Component counts and uptime only
    Basic,

    /// Per-signal throughput and error counters
    #[default]
    Normal,

    /// Everything, including per-instance latency histograms
    Detailed,
}

impl MetricsLevel {
    /// String form used in configuration and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricsLevel::None => "none",
            MetricsLevel::Basic => "basic",
            MetricsLevel::Normal => "normal",
            MetricsLevel::Detailed => "detailed",
        }
    }
}

impl fmt::Display for MetricsLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of the collector's own logging
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TelemetryLogsConfig {
    /// Minimum level emitted
    #[validate(length(min = 1))]
    pub level: String,

    /// Output encoding, `console` or `json`
    #[validate(length(min = 1))]
    pub encoding: String,

    /// Enable development-friendly output (caller info, full stacktraces)
    pub development: bool,
}

impl Default for TelemetryLogsConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            encoding: "console".to_string(),
            development: false,
        }
    }
}

/// Configuration of the collector's own metrics
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TelemetryMetricsConfig {
    /// Verbosity of emitted self-metrics
    pub level: MetricsLevel,

    /// Listen address of the self-metrics endpoint
    #[validate(length(min = 1))]
    pub address: String,
}

impl Default for TelemetryMetricsConfig {
    fn default() -> Self {
        Self {
            level: MetricsLevel::default(),
            address: DEFAULT_METRICS_ADDRESS.to_string(),
        }
    }
}

/// Self-telemetry configuration of the collector service
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Logging settings
    pub logs: TelemetryLogsConfig,

    /// Metrics settings
    pub metrics: TelemetryMetricsConfig,
}

impl TelemetryConfig {
    /// Validate the telemetry configuration
    pub fn validate_config(&self) -> CollectorResult<()> {
        self.logs.validate().map_err(|e| {
            CollectorError::configuration_with_source("telemetry logs validation failed", e)
        })?;
        self.metrics.validate().map_err(|e| {
            CollectorError::configuration_with_source("telemetry metrics validation failed", e)
        })?;

        if !LOG_LEVELS.contains(&self.logs.level.as_str()) {
            return Err(CollectorError::configuration(format!(
                "unrecognized telemetry logs level {:?}",
                self.logs.level
            )));
        }

        if !LOG_ENCODINGS.contains(&self.logs.encoding.as_str()) {
            return Err(CollectorError::configuration(format!(
                "unrecognized telemetry logs encoding {:?}",
                self.logs.encoding
            )));
        }

        Ok(())
    }
}
