//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error conversions for the Agogos telemetry collector
//!
//! This module provides error conversion implementations for common error types.

use super::types::CollectorError;

impl From<serde_json::Error> for CollectorError {
    fn from(err: serde_json::Error) -> Self {
        CollectorError::configuration_with_source("JSON serialization error", err)
    }
}

impl From<validator::ValidationErrors> for CollectorError {
    fn from(err: validator::ValidationErrors) -> Self {
        CollectorError::configuration_with_source("Validation error", err)
    }
}
