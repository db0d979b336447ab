//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Component configuration trait for the Agogos telemetry collector
//!
//! This module provides the contract implemented by every per-component
//! configuration block. The framework treats these blocks as opaque: it
//! stores them, runs their self-validation, and hands them back to the
//! factory that knows their concrete type.

use std::any::Any;
use std::fmt;

use crate::error::CollectorResult;

/// Configuration block owned by one component type
///
/// Concrete configurations live in plugin crates; the framework only sees
/// this trait. Validation must be a pure check over the already-loaded
/// values, so it is synchronous and must not touch the network or the
/// filesystem.
pub trait ComponentConfig: fmt::Debug + Send + Sync {
    /// Validate this configuration block
    ///
    /// Returns the component's own error, which the configuration graph
    /// validator wraps with the component's identity.
    fn validate(&self) -> CollectorResult<()>;

    /// Downcast support for factories that know the concrete type
    fn as_any(&self) -> &dyn Any;
}
