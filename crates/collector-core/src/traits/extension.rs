//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Extension traits for the Agogos telemetry collector
//!
//! This module provides the contracts for components that live outside the
//! data path, such as health check endpoints and authenticators, plus the
//! optional interface for extensions that track pipeline readiness.

use async_trait::async_trait;

use crate::error::CollectorResult;
use crate::traits::component::Component;

/// Component that provides capabilities outside the data path
///
/// Extensions never see telemetry, so like receivers their public surface
/// is just the component lifecycle. Any [`Component`] qualifies.
pub trait Extension: Component {}

impl<T: Component> Extension for T {}

/// Optional interface for extensions that track pipeline readiness
///
/// The service calls `ready` once every pipeline component has started and
/// `not_ready` before any of them shuts down, so an implementor can gate
/// traffic admission on pipeline state.
#[async_trait]
pub trait PipelineWatcher: Send + Sync {
    /// Signal that all pipelines are built and running
    async fn ready(&self) -> CollectorResult<()>;

    /// Signal that pipelines are about to stop accepting data
    async fn not_ready(&self) -> CollectorResult<()>;
}
