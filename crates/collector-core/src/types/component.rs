//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Component identity types for the Agogos telemetry collector
//!
//! This module provides the identity model shared by every pluggable part of
//! the collector: the component category, the factory type token, and the
//! type/name pair used to address component instances in configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CollectorError;

/// Separator between the type and name parts of a component identifier
pub const ID_SEPARATOR: char = '/';

/// Component categories understood by the collector
///
/// Every pluggable component belongs to exactly one category, and each
/// category has its own factory shape and configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Ingests telemetry from the outside world
    Receiver,

    /// Transforms telemetry between receivers and exporters
    Processor,

    /// Sends telemetry out of the collector
    Exporter,

    /// Provides capabilities outside the data path
    Extension,
}

impl ComponentKind {
    /// String form used in configuration sections and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Receiver => "receiver",
            ComponentKind::Processor => "processor",
            ComponentKind::Exporter => "exporter",
            ComponentKind::Extension => "extension",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Factory type token
///
/// Identifies one registered factory, e.g. `otlp` or `batch`. All instances
/// created from the same factory share this token as the type part of their
/// [`ComponentId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentType(String);

impl ComponentType {
    /// Create a new component type token
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentType {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ComponentType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identifier of one component instance in configuration
///
/// An identifier is a factory type plus an optional instance name, rendered
/// as `type` or `type/name`. The name distinguishes multiple instances of
/// the same type, e.g. `otlp/internal` and `otlp/partner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId {
    /// Factory type of the component
    component_type: ComponentType,

    /// Optional instance name
    name: Option<String>,
}

impl ComponentId {
    /// Create an identifier with no instance name
    pub fn new(component_type: impl Into<ComponentType>) -> Self {
        Self {
            component_type: component_type.into(),
            name: None,
        }
    }

    /// Create an identifier with an instance name
    pub fn with_name(component_type: impl Into<ComponentType>, name: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            name: Some(name.into()),
        }
    }

    /// Factory type of the component
    pub fn component_type(&self) -> &ComponentType {
        &self.component_type
    }

    /// Instance name, if one was configured
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}{}{}", self.component_type, ID_SEPARATOR, name),
            None => write!(f, "{}", self.component_type),
        }
    }
}

impl FromStr for ComponentId {
    type Err = CollectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (type_part, name_part) = match s.split_once(ID_SEPARATOR) {
            Some((type_part, name_part)) => (type_part.trim(), Some(name_part.trim())),
            None => (s.trim(), None),
        };

        if type_part.is_empty() {
            return Err(CollectorError::configuration(format!(
                "component identifier {:?} must start with a type",
                s
            )));
        }

        match name_part {
            Some("") => Err(CollectorError::configuration(format!(
                "component identifier {:?} has an empty name after {:?}",
                s, ID_SEPARATOR
            ))),
            Some(name) => Ok(Self::with_name(type_part, name)),
            None => Ok(Self::new(type_part)),
        }
    }
}

impl TryFrom<String> for ComponentId {
    type Error = CollectorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_kind_display() {
        assert_eq!(ComponentKind::Receiver.to_string(), "receiver");
        assert_eq!(ComponentKind::Processor.to_string(), "processor");
        assert_eq!(ComponentKind::Exporter.to_string(), "exporter");
        assert_eq!(ComponentKind::Extension.to_string(), "extension");
    }

    #[test]
    fn test_component_id_display() {
        let plain = ComponentId::new("otlp");
        assert_eq!(plain.to_string(), "otlp");
        assert_eq!(plain.name(), None);

        let named = ComponentId::with_name("otlp", "internal");
        assert_eq!(named.to_string(), "otlp/internal");
        assert_eq!(named.name(), Some("internal"));
        assert_eq!(named.component_type().as_str(), "otlp");
    }

    #[test]
    fn test_component_id_parsing() {
        let plain: ComponentId = "jaeger".parse().unwrap();
        assert_eq!(plain, ComponentId::new("jaeger"));

        let named: ComponentId = "jaeger/legacy".parse().unwrap();
        assert_eq!(named, ComponentId::with_name("jaeger", "legacy"));

        let padded: ComponentId = " otlp / internal ".parse().unwrap();
        assert_eq!(padded, ComponentId::with_name("otlp", "internal"));
    }

    #[test]
    fn test_component_id_parsing_rejects_malformed_input() {
        assert!("".parse::<ComponentId>().is_err());
        assert!("/name".parse::<ComponentId>().is_err());
        assert!("otlp/".parse::<ComponentId>().is_err());
        assert!("  /  ".parse::<ComponentId>().is_err());
    }

    #[test]
    fn test_component_id_serde_round_trip() {
        let id = ComponentId::with_name("otlp", "internal");
        let encoded = serde_json::to_string(&id).unwrap();
        assert_eq!(encoded, "\"otlp/internal\"");

        let decoded: ComponentId = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, id);

        let invalid: Result<ComponentId, _> = serde_json::from_str("\"/orphan\"");
        assert!(invalid.is_err());
    }
}
