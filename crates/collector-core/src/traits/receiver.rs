//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Receiver trait for the Agogos telemetry collector
//!
//! This module provides the contract for components that ingest telemetry
//! from the outside world and push it into a pipeline.

use crate::traits::component::Component;

/// Component that ingests telemetry from the outside world
///
/// A receiver exposes no data-path methods of its own. It pushes batches
/// into the consumer handed to its factory constructor, so its public
/// surface is just the component lifecycle. Any [`Component`] therefore
/// qualifies as a receiver.
pub trait Receiver: Component {}

impl<T: Component> Receiver for T {}
