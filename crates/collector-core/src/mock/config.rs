//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Mock component configuration for testing

use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::error::{CollectorError, CollectorResult};
use crate::traits::config::ComponentConfig;

/// Component configuration with a controllable validation outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockComponentConfig {
    /// Pretend endpoint, present to give the block realistic content
    pub endpoint: String,

    /// When set, validation fails with this message
    pub fail_with: Option<String>,
}

impl MockComponentConfig {
    /// Create a configuration that passes validation
    pub fn valid() -> Self {
        Self::default()
    }

    /// Create a configuration that fails validation with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }
}

impl Default for MockComponentConfig {
    fn default() -> Self {
        Self {
            endpoint: "mock://localhost:4317".to_string(),
            fail_with: None,
        }
    }
}

impl ComponentConfig for MockComponentConfig {
    fn validate(&self) -> CollectorResult<()> {
        if let Some(message) = &self.fail_with {
            return Err(CollectorError::configuration(message.clone()));
        }

        if self.endpoint.is_empty() {
            return Err(CollectorError::configuration("endpoint must not be empty"));
        }

        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
