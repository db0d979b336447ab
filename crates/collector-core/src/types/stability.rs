//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Stability levels for the Agogos telemetry collector
//!
//! This module provides the maturity scale attached to every factory
//! capability. The service logs the level of each component it builds so
//! operators know what guarantees they are running on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maturity of one factory capability
///
/// Levels are ordered from least to most trustworthy, with [`Deprecated`]
/// last. A capability that was never given a level reports [`Undefined`].
///
/// [`Deprecated`]: StabilityLevel::Deprecated
/// [`Undefined`]: StabilityLevel::Undefined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilityLevel {
    /// No stability level was declared
    #[default]
    Undefined,

    /// No longer maintained; kept for compatibility only
    Unmaintained,

    /// Early development; may break or disappear without notice
    Experimental,

    /// Functional but unpolished; breaking changes are likely
    Alpha,

    /// Feature complete; breaking changes still possible
    Beta,

    /// Covered by compatibility guarantees
    Stable,

    /// Scheduled for removal
    Deprecated,
}

impl StabilityLevel {
    /// String form used in logs and documentation
    pub fn as_str(&self) -> &'static str {
        match self {
            StabilityLevel::Undefined => "undefined",
            StabilityLevel::Unmaintained => "unmaintained",
            StabilityLevel::Experimental => "experimental",
            StabilityLevel::Alpha => "alpha",
            StabilityLevel::Beta => "beta",
            StabilityLevel::Stable => "stable",
            StabilityLevel::Deprecated => "deprecated",
        }
    }

    /// Operator-facing message logged when a component with this level is built
    pub fn log_message(&self) -> &'static str {
        match self {
            StabilityLevel::Undefined => "Stability level of component is undefined",
            StabilityLevel::Unmaintained => {
                "Unmaintained component. Actively looking for contributors. Component will become deprecated after 6 months of remaining unmaintained"
            }
            StabilityLevel::Experimental => "Experimental component. May change in the future",
            StabilityLevel::Alpha => "Alpha component. May change in the future",
            StabilityLevel::Beta => "Beta component. May change in the future",
            StabilityLevel::Stable => "Stable component",
            StabilityLevel::Deprecated => "Deprecated component. Will be removed in future releases",
        }
    }
}

impl fmt::Display for StabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stability_level_defaults_to_undefined() {
        assert_eq!(StabilityLevel::default(), StabilityLevel::Undefined);
    }

    #[test]
    fn test_stability_level_display() {
        assert_eq!(StabilityLevel::Alpha.to_string(), "alpha");
        assert_eq!(StabilityLevel::Stable.to_string(), "stable");
        assert_eq!(StabilityLevel::Undefined.to_string(), "undefined");
    }

    #[test]
    fn test_stability_level_ordering() {
        assert!(StabilityLevel::Undefined < StabilityLevel::Alpha);
        assert!(StabilityLevel::Alpha < StabilityLevel::Beta);
        assert!(StabilityLevel::Beta < StabilityLevel::Stable);
    }

    #[test]
    fn test_stability_level_log_messages_name_the_guarantee() {
        assert_eq!(
            StabilityLevel::Undefined.log_message(),
            "Stability level of component is undefined"
        );
        assert_eq!(
            StabilityLevel::Beta.log_message(),
            "Beta component. May change in the future"
        );
        assert_eq!(StabilityLevel::Stable.log_message(), "Stable component");
        assert_eq!(
            StabilityLevel::Deprecated.log_message(),
            "Deprecated component. Will be removed in future releases"
        );
    }

    #[test]
    fn test_stability_level_serde_uses_lowercase() {
        let encoded = serde_json::to_string(&StabilityLevel::Beta).unwrap();
        assert_eq!(encoded, "\"beta\"");

        let decoded: StabilityLevel = serde_json::from_str("\"deprecated\"").unwrap();
        assert_eq!(decoded, StabilityLevel::Deprecated);
    }
}
