//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Mock components for the Agogos telemetry collector
//!
//! This module provides ready-made component, consumer, and configuration
//! doubles for exercising factories and configuration validation. They are
//! part of the public API so plugin crates can test against them too.

pub mod config;
pub mod consumer;
pub mod exporter;
pub mod extension;
pub mod processor;
pub mod receiver;

// Re-export commonly used types
pub use config::MockComponentConfig;
pub use consumer::MockConsumer;
pub use exporter::MockExporter;
pub use extension::MockExtension;
pub use processor::MockProcessor;
pub use receiver::MockReceiver;
