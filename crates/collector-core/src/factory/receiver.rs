//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Receiver factory for the Agogos telemetry collector
//!
//! This module provides the factory through which receiver plugins declare
//! which signals they support. Every signal slot always holds a callable
//! constructor: slots that were never registered hold a sentinel that fails
//! with [`CollectorError::UnsupportedCapability`], so callers invoke
//! capabilities unconditionally instead of branching on their presence.

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

use crate::error::{CollectorError, CollectorResult};
use crate::factory::settings::CreateSettings;
use crate::factory::CreateDefaultConfig;
use crate::traits::config::ComponentConfig;
use crate::traits::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::traits::receiver::Receiver;
use crate::types::component::{ComponentKind, ComponentType};
use crate::types::pipeline::SignalKind;
use crate::types::stability::StabilityLevel;

/// Boxed constructor for a traces receiver
pub type CreateTracesReceiver = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
            Arc<dyn TracesConsumer>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn Receiver>>>
        + Send
        + Sync,
>;

/// Boxed constructor for a metrics receiver
pub type CreateMetricsReceiver = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
            Arc<dyn MetricsConsumer>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn Receiver>>>
        + Send
        + Sync,
>;

/// Boxed constructor for a logs receiver
pub type CreateLogsReceiver = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
            Arc<dyn LogsConsumer>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn Receiver>>>
        + Send
        + Sync,
>;

/// Factory for one receiver type
///
/// Built with [`ReceiverFactory::new`] plus one `with_*` call per supported
/// signal. A constructor future that is dropped before completion is the
/// cancelled creation; constructors must not leak resources in that case.
pub struct ReceiverFactory {
    /// Factory type token shared by all instances of this receiver
    component_type: ComponentType,

    /// Constructor for this type's default configuration
    create_default_config: CreateDefaultConfig,

    /// Traces constructor slot
    create_traces: CreateTracesReceiver,

    /// Stability declared for the traces capability
    traces_stability: StabilityLevel,

    /// Metrics constructor slot
    create_metrics: CreateMetricsReceiver,

    /// Stability declared for the metrics capability
    metrics_stability: StabilityLevel,

    /// Logs constructor slot
    create_logs: CreateLogsReceiver,

    /// Stability declared for the logs capability
    logs_stability: StabilityLevel,
}

impl ReceiverFactory {
    /// Create a factory with no registered signal capabilities
    pub fn new<C>(component_type: impl Into<ComponentType>, create_default_config: C) -> Self
    where
        C: Fn() -> Arc<dyn ComponentConfig> + Send + Sync + 'static,
    {
        Self {
            component_type: component_type.into(),
            create_default_config: Box::new(create_default_config),
            create_traces: Box::new(|_, _, _| {
                Box::pin(async {
                    Err(CollectorError::unsupported_capability(
                        ComponentKind::Receiver,
                        SignalKind::Traces,
                    ))
                })
            }),
            traces_stability: StabilityLevel::Undefined,
            create_metrics: Box::new(|_, _, _| {
                Box::pin(async {
                    Err(CollectorError::unsupported_capability(
                        ComponentKind::Receiver,
                        SignalKind::Metrics,
                    ))
                })
            }),
            metrics_stability: StabilityLevel::Undefined,
            create_logs: Box::new(|_, _, _| {
                Box::pin(async {
                    Err(CollectorError::unsupported_capability(
                        ComponentKind::Receiver,
                        SignalKind::Logs,
                    ))
                })
            }),
            logs_stability: StabilityLevel::Undefined,
        }
    }

    /// Register the traces capability
    pub fn with_traces<F, Fut>(mut self, create: F, stability: StabilityLevel) -> Self
    where
        F: Fn(CreateSettings, Arc<dyn ComponentConfig>, Arc<dyn TracesConsumer>) -> Fut
            + Send
            + Sync
            + 'static,
        Fut: Future<Output = CollectorResult<Box<dyn Receiver>>> + Send + 'static,
    {
        self.create_traces =
            Box::new(move |settings, config, next| Box::pin(create(settings, config, next)));
        self.traces_stability = stability;
        self
    }

    /// Register the metrics capability
    pub fn with_metrics<F, Fut>(mut self, create: F, stability: StabilityLevel) -> Self
    where
        F: Fn(CreateSettings, Arc<dyn ComponentConfig>, Arc<dyn MetricsConsumer>) -> Fut
            + Send
            + Sync
            + 'static,
        Fut: Future<Output = CollectorResult<Box<dyn Receiver>>> + Send + 'static,
    {
        self.create_metrics =
            Box::new(move |settings, config, next| Box::pin(create(settings, config, next)));
        self.metrics_stability = stability;
        self
    }

    /// Register the logs capability
    pub fn with_logs<F, Fut>(mut self, create: F, stability: StabilityLevel) -> Self
    where
        F: Fn(CreateSettings, Arc<dyn ComponentConfig>, Arc<dyn LogsConsumer>) -> Fut
            + Send
            + Sync
            + 'static,
        Fut: Future<Output = CollectorResult<Box<dyn Receiver>>> + Send + 'static,
    {
        self.create_logs =
            Box::new(move |settings, config, next| Box::pin(create(settings, config, next)));
        self.logs_stability = stability;
        self
    }

    /// Factory type token
    pub fn component_type(&self) -> &ComponentType {
        &self.component_type
    }

    /// Build this type's default configuration
    pub fn default_config(&self) -> Arc<dyn ComponentConfig> {
        (self.create_default_config)()
    }

    /// Create a traces receiver feeding the given consumer
    pub async fn create_traces_receiver(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn TracesConsumer>,
    ) -> CollectorResult<Box<dyn Receiver>> {
        (self.create_traces)(settings, config, next).await
    }

    /// Create a metrics receiver feeding the given consumer
    pub async fn create_metrics_receiver(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn MetricsConsumer>,
    ) -> CollectorResult<Box<dyn Receiver>> {
        (self.create_metrics)(settings, config, next).await
    }

    /// Create a logs receiver feeding the given consumer
    pub async fn create_logs_receiver(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn LogsConsumer>,
    ) -> CollectorResult<Box<dyn Receiver>> {
        (self.create_logs)(settings, config, next).await
    }

    /// Stability of the traces capability, [`StabilityLevel::Undefined`] if unregistered
    pub fn traces_stability(&self) -> StabilityLevel {
        self.traces_stability
    }

    /// Stability of the metrics capability, [`StabilityLevel::Undefined`] if unregistered
    pub fn metrics_stability(&self) -> StabilityLevel {
        self.metrics_stability
    }

    /// Stability of the logs capability, [`StabilityLevel::Undefined`] if unregistered
    pub fn logs_stability(&self) -> StabilityLevel {
        self.logs_stability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::config::MockComponentConfig;
    use crate::mock::consumer::MockConsumer;
    use crate::mock::receiver::MockReceiver;
    use crate::types::component::ComponentId;

    fn traces_only_factory() -> ReceiverFactory {
        ReceiverFactory::new("mock", || Arc::new(MockComponentConfig::valid()))
            .with_traces(
                |_settings, _config, _next| async { Ok(MockReceiver::boxed()) },
                StabilityLevel::Beta,
            )
    }

    #[tokio::test]
    async fn test_registered_capability_creates_receiver() {
        let factory = traces_only_factory();
        let receiver = factory
            .create_traces_receiver(
                CreateSettings::new(ComponentId::new("mock")),
                factory.default_config(),
                Arc::new(MockConsumer::new()),
            )
            .await
            .unwrap();

        assert!(receiver.start().await.is_ok());
        assert!(receiver.shutdown().await.is_ok());
    }

    #[tokio::test]
    async fn test_unregistered_capability_returns_sentinel() {
        let factory = traces_only_factory();
        let err = factory
            .create_metrics_receiver(
                CreateSettings::new(ComponentId::new("mock")),
                factory.default_config(),
                Arc::new(MockConsumer::new()),
            )
            .await
            .err()
            .expect("expected sentinel error");

        assert!(err.is_unsupported_capability());
        assert!(matches!(
            err,
            CollectorError::UnsupportedCapability {
                kind: ComponentKind::Receiver,
                signal: SignalKind::Metrics,
            }
        ));
    }

    #[tokio::test]
    async fn test_stability_defaults_to_undefined_for_unregistered_slots() {
        let factory = traces_only_factory();
        assert_eq!(factory.traces_stability(), StabilityLevel::Beta);
        assert_eq!(factory.metrics_stability(), StabilityLevel::Undefined);
        assert_eq!(factory.logs_stability(), StabilityLevel::Undefined);
    }

    #[tokio::test]
    async fn test_constructor_sees_settings_and_config() {
        let factory = ReceiverFactory::new("mock", || {
            Arc::new(MockComponentConfig::valid())
        })
        .with_traces(
            |settings, config, _next| async move {
                assert_eq!(settings.id, ComponentId::with_name("mock", "primary"));
                let config = config
                    .as_any()
                    .downcast_ref::<MockComponentConfig>()
                    .expect("config must be the mock type");
                assert!(config.fail_with.is_none());
                Ok(MockReceiver::boxed())
            },
            StabilityLevel::Alpha,
        );

        factory
            .create_traces_receiver(
                CreateSettings::new(ComponentId::with_name("mock", "primary")),
                factory.default_config(),
                Arc::new(MockConsumer::new()),
            )
            .await
            .unwrap();
    }
}
