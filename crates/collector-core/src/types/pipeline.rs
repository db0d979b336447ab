//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Pipeline identity types for the Agogos telemetry collector
//!
//! This module provides the signal taxonomy and the identifier used to
//! address pipelines in the service section of the configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CollectorError;
use crate::types::component::ID_SEPARATOR;

/// Telemetry signals a pipeline can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Traces,
    Metrics,
    Logs,
}

impl SignalKind {
    /// String form used in pipeline identifiers and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Traces => "traces",
            SignalKind::Metrics => "metrics",
            SignalKind::Logs => "logs",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = CollectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traces" => Ok(SignalKind::Traces),
            "metrics" => Ok(SignalKind::Metrics),
            "logs" => Ok(SignalKind::Logs),
            other => Err(CollectorError::configuration(format!(
                "unknown signal kind {:?}",
                other
            ))),
        }
    }
}

/// Identifier of one pipeline in the service section
///
/// A pipeline identifier is a signal kind plus an optional instance name,
/// rendered as `kind` or `kind/name`, e.g. `traces` or `metrics/internal`.
/// The kind is kept as the raw configured string so that a configuration
/// naming an unrecognized signal can be represented, surfaced by
/// validation, and reported with its original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PipelineId {
    /// Raw signal kind as configured
    kind: String,

    /// Optional instance name
    name: Option<String>,
}

impl PipelineId {
    /// Create a pipeline identifier with no instance name
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
        }
    }

    /// Create a pipeline identifier with an instance name
    pub fn with_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: Some(name.into()),
        }
    }

    /// Raw signal kind as configured
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Instance name, if one was configured
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Signal carried by this pipeline, if the kind is recognized
    pub fn signal(&self) -> Option<SignalKind> {
        self.kind.parse().ok()
    }
}

impl From<SignalKind> for PipelineId {
    fn from(signal: SignalKind) -> Self {
        Self::new(signal.as_str())
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}{}{}", self.kind, ID_SEPARATOR, name),
            None => f.write_str(&self.kind),
        }
    }
}

impl FromStr for PipelineId {
    type Err = CollectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind_part, name_part) = match s.split_once(ID_SEPARATOR) {
            Some((kind_part, name_part)) => (kind_part.trim(), Some(name_part.trim())),
            None => (s.trim(), None),
        };

        if kind_part.is_empty() {
            return Err(CollectorError::configuration(format!(
                "pipeline identifier {:?} must start with a signal kind",
                s
            )));
        }

        match name_part {
            Some("") => Err(CollectorError::configuration(format!(
                "pipeline identifier {:?} has an empty name after {:?}",
                s, ID_SEPARATOR
            ))),
            Some(name) => Ok(Self::with_name(kind_part, name)),
            None => Ok(Self::new(kind_part)),
        }
    }
}

impl TryFrom<String> for PipelineId {
    type Error = CollectorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PipelineId> for String {
    fn from(id: PipelineId) -> Self {
        id.to_string()
    }
}
