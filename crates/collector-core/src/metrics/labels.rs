//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Self-metrics label keys for the Agogos telemetry collector
//!
//! This module provides the process-wide label keys attached to the
//! collector's own metrics. The set is fixed and explicitly initialized:
//! [`init`] may be called at most once, before any read, and [`keys`]
//! locks in the defaults on first use. There is no registration phase, so
//! component load order cannot change which keys exist.

use std::sync::OnceLock;

use crate::error::{CollectorError, CollectorResult};

/// Default key for the receiver identity label
pub const RECEIVER_KEY: &str = "receiver";

/// Default key for the scraper identity label
pub const SCRAPER_KEY: &str = "scraper";

/// Default key for the receiver transport label
pub const TRANSPORT_KEY: &str = "transport";

/// Default key for the exporter identity label
pub const EXPORTER_KEY: &str = "exporter";

/// Default key for the processor identity label
pub const PROCESSOR_KEY: &str = "processor";

static LABEL_KEYS: OnceLock<LabelKeys> = OnceLock::new();

/// Label keys attached to the collector's own metrics
///
/// These names are load-bearing for dashboards and alerts downstream of
/// the collector; treat any change as a breaking one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelKeys {
    /// Identity of the receiver that produced a measurement
    pub receiver: String,

    /// Identity of the scraper that produced a measurement
    pub scraper: String,

    /// Transport the data arrived on
    pub transport: String,

    /// Identity of the exporter that produced a measurement
    pub exporter: String,

    /// Identity of the processor that produced a measurement
    pub processor: String,
}

impl Default for LabelKeys {
    fn default() -> Self {
        Self {
            receiver: RECEIVER_KEY.to_string(),
            scraper: SCRAPER_KEY.to_string(),
            transport: TRANSPORT_KEY.to_string(),
            exporter: EXPORTER_KEY.to_string(),
            processor: PROCESSOR_KEY.to_string(),
        }
    }
}

/// Install a custom label key set for this process
///
/// Must run before the first [`keys`] call; fails once any key set is in
/// place, whether installed here or locked in by a read.
pub fn init(keys: LabelKeys) -> CollectorResult<()> {
    LABEL_KEYS
        .set(keys)
        .map_err(|_| CollectorError::configuration("metric label keys already initialized"))
}

/// Current label key set, locking in the defaults on first use
pub fn keys() -> &'static LabelKeys {
    LABEL_KEYS.get_or_init(LabelKeys::default)
}
