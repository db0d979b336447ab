//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error handling for the Agogos telemetry collector
//!
//! This module provides structured error types for the component framework
//! and for configuration graph validation.

pub mod conversions;
pub mod types;

// Re-export commonly used types
pub use types::{CollectorError, CollectorResult};
