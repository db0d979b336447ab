//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Core trait definitions for the Agogos telemetry collector
//!
//! This module provides the foundational traits of the component framework:
//! the shared lifecycle, the opaque configuration contract, the per-signal
//! consumption contracts, and the per-category component contracts.

pub mod component;
pub mod config;
pub mod consumer;
pub mod exporter;
pub mod extension;
pub mod processor;
pub mod receiver;

// Re-export commonly used traits
pub use component::{BaseComponent, Component, LifecycleHook};
pub use config::ComponentConfig;
pub use consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
pub use exporter::{LogsExporter, MetricsExporter, TracesExporter};
pub use extension::{Extension, PipelineWatcher};
pub use processor::{LogsProcessor, MetricsProcessor, TracesProcessor};
pub use receiver::Receiver;
