//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Self-metrics support for the Agogos telemetry collector
//!
//! This module provides the shared vocabulary of the collector's own
//! metrics. Emission lives with the service runtime; what lives here is
//! the process-wide label key set components tag their measurements with.

pub mod labels;

// Re-export commonly used types
pub use labels::LabelKeys;
