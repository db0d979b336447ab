//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Component lifecycle traits for the Agogos telemetry collector
//!
//! This module provides the lifecycle contract every pipeline component
//! implements, plus a ready-made base component with pluggable hooks for
//! plugins that only need part of the lifecycle.

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

use crate::error::CollectorResult;

/// Boxed asynchronous lifecycle hook
pub type LifecycleHook = Arc<dyn Fn() -> BoxFuture<'static, CollectorResult<()>> + Send + Sync>;

/// Lifecycle contract shared by every pipeline component
///
/// The service starts components in reverse data order and shuts them down
/// in data order, so a component must be ready to receive data as soon as
/// `start` returns.
#[async_trait]
pub trait Component: Send + Sync {
    /// Start the component
    ///
    /// Called once before any data is delivered. An error here aborts
    /// service startup.
    async fn start(&self) -> CollectorResult<()>;

    /// Shutdown the component
    ///
    /// Called once during service teardown. The component must stop
    /// producing data before this returns.
    async fn shutdown(&self) -> CollectorResult<()>;
}

/// [`Component`] whose lifecycle hooks default to no-ops
///
/// Plugins that need no special start or shutdown behavior embed one as-is;
/// others attach only the hooks they care about. Both hooks succeed when
/// left unset, so there is no "unset hook" state to handle at call sites.
#[derive(Clone)]
pub struct BaseComponent {
    /// Hook invoked by `start`
    start: LifecycleHook,

    /// Hook invoked by `shutdown`
    shutdown: LifecycleHook,
}

impl BaseComponent {
    /// Create a base component with no-op start and shutdown hooks
    pub fn new() -> Self {
        Self {
            start: noop_hook(),
            shutdown: noop_hook(),
        }
    }

    /// Attach a start hook
    pub fn with_start<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CollectorResult<()>> + Send + 'static,
    {
        self.start = Arc::new(move || Box::pin(hook()));
        self
    }

    /// Attach a shutdown hook
    pub fn with_shutdown<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CollectorResult<()>> + Send + 'static,
    {
        self.shutdown = Arc::new(move || Box::pin(hook()));
        self
    }
}

impl Default for BaseComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Component for BaseComponent {
    async fn start(&self) -> CollectorResult<()> {
        (self.start)().await
    }

    async fn shutdown(&self) -> CollectorResult<()> {
        (self.shutdown)().await
    }
}

fn noop_hook() -> LifecycleHook {
    Arc::new(|| Box::pin(async { Ok(()) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectorError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_base_component_defaults_to_noop_lifecycle() {
        let component = BaseComponent::new();
        assert!(component.start().await.is_ok());
        assert!(component.shutdown().await.is_ok());
    }

    #[tokio::test]
    async fn test_base_component_runs_attached_hooks() {
        let started = Arc::new(AtomicUsize::new(0));
        let stopped = Arc::new(AtomicUsize::new(0));

        let started_in_hook = started.clone();
        let stopped_in_hook = stopped.clone();
        let component = BaseComponent::new()
            .with_start(move || {
                let counter = started_in_hook.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .with_shutdown(move || {
                let counter = stopped_in_hook.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            });

        component.start().await.unwrap();
        component.start().await.unwrap();
        component.shutdown().await.unwrap();

        assert_eq!(started.load(Ordering::SeqCst), 2);
        assert_eq!(stopped.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_base_component_propagates_hook_errors() {
        let component = BaseComponent::new()
            .with_start(|| async { Err(CollectorError::component("listener failed to bind")) });

        let result = component.start().await;
        assert!(matches!(result, Err(CollectorError::Component { .. })));
        assert!(component.shutdown().await.is_ok());
    }
}
