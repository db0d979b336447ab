//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Component factories for the Agogos telemetry collector
//!
//! This module provides the per-category factories through which plugins
//! register their constructors and declared stability levels. Pipeline
//! factories (receiver, processor, exporter) expose one capability slot per
//! signal; the extension factory is signal-agnostic.

use std::sync::Arc;

use crate::traits::config::ComponentConfig;

pub mod exporter;
pub mod extension;
pub mod processor;
pub mod receiver;
pub mod settings;

/// Boxed constructor for a factory's default configuration
pub type CreateDefaultConfig = Box<dyn Fn() -> Arc<dyn ComponentConfig> + Send + Sync>;

// Re-export commonly used types
pub use exporter::ExporterFactory;
pub use extension::ExtensionFactory;
pub use processor::ProcessorFactory;
pub use receiver::ReceiverFactory;
pub use settings::{BuildInfo, CreateSettings, TelemetrySettings};
