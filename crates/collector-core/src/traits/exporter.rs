//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Exporter traits for the Agogos telemetry collector
//!
//! This module provides the contracts for the terminal stage of a pipeline.
//! An exporter consumes batches and sends them out of the collector; there
//! is no further stage, so its constructor takes no downstream consumer.

use crate::traits::component::Component;
use crate::traits::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};

/// Terminal stage of a traces pipeline
pub trait TracesExporter: Component + TracesConsumer {}

impl<T: Component + TracesConsumer> TracesExporter for T {}

/// Terminal stage of a metrics pipeline
pub trait MetricsExporter: Component + MetricsConsumer {}

impl<T: Component + MetricsConsumer> MetricsExporter for T {}

/// Terminal stage of a logs pipeline
pub trait LogsExporter: Component + LogsConsumer {}

impl<T: Component + LogsConsumer> LogsExporter for T {}
