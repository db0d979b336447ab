//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Processor traits for the Agogos telemetry collector
//!
//! This module provides the contracts for components that sit between
//! receivers and exporters. A processor consumes batches from the previous
//! stage and forwards what survives to the consumer it was built with.

use crate::traits::component::Component;
use crate::traits::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};

/// Processor stage in a traces pipeline
pub trait TracesProcessor: Component + TracesConsumer {}

impl<T: Component + TracesConsumer> TracesProcessor for T {}

/// Processor stage in a metrics pipeline
pub trait MetricsProcessor: Component + MetricsConsumer {}

impl<T: Component + MetricsConsumer> MetricsProcessor for T {}

/// Processor stage in a logs pipeline
pub trait LogsProcessor: Component + LogsConsumer {}

impl<T: Component + LogsConsumer> LogsProcessor for T {}
