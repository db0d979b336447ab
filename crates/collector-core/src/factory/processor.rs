//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Processor factory for the Agogos telemetry collector
//!
//! This module provides the factory through which processor plugins declare
//! which signals they support. Slots follow the same sentinel rule as
//! receiver factories: unregistered signals fail with
//! [`CollectorError::UnsupportedCapability`] when invoked.

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

use crate::error::{CollectorError, CollectorResult};
use crate::factory::settings::CreateSettings;
use crate::factory::CreateDefaultConfig;
use crate::traits::config::ComponentConfig;
use crate::traits::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::traits::processor::{LogsProcessor, MetricsProcessor, TracesProcessor};
use crate::types::component::{ComponentKind, ComponentType};
use crate::types::pipeline::SignalKind;
use crate::types::stability::StabilityLevel;

/// Boxed constructor for a traces processor
pub type CreateTracesProcessor = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
            Arc<dyn TracesConsumer>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn TracesProcessor>>>
        + Send
        + Sync,
>;

/// Boxed constructor for a metrics processor
pub type CreateMetricsProcessor = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
            Arc<dyn MetricsConsumer>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn MetricsProcessor>>>
        + Send
        + Sync,
>;

/// Boxed constructor for a logs processor
pub type CreateLogsProcessor = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
            Arc<dyn LogsConsumer>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn LogsProcessor>>>
        + Send
        + Sync,
>;

/// Factory for one processor type
///
/// The consumer handed to each constructor is the next stage of the
/// pipeline; the processor forwards surviving data to it.
pub struct ProcessorFactory {
    /// Factory type token shared by all instances of this processor
    component_type: ComponentType,

    /// Constructor for this type's default configuration
    create_default_config: CreateDefaultConfig,

    /// Traces constructor slot
    create_traces: CreateTracesProcessor,

    /// Stability declared for the traces capability
    traces_stability: StabilityLevel,

    /// Metrics constructor slot
    create_metrics: CreateMetricsProcessor,

    /// Stability declared for the metrics capability
    metrics_stability: StabilityLevel,

    /// Logs constructor slot
    create_logs: CreateLogsProcessor,

    /// Stability declared for the logs capability
    logs_stability: StabilityLevel,
}

impl ProcessorFactory {
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
                        ComponentKind::Processor,
                        SignalKind::Traces,
                    ))
                })
            }),
            traces_stability: StabilityLevel::Undefined,
            create_metrics: Box::new(|_, _, _| {
                Box::pin(async {
                    Err(CollectorError::unsupported_capability(
                        ComponentKind::Processor,
                        SignalKind::Metrics,
                    ))
                })
            }),
            metrics_stability: StabilityLevel::Undefined,
            create_logs: Box::new(|_, _, _| {
                Box::pin(async {
                    Err(CollectorError::unsupported_capability(
                        ComponentKind::Processor,
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
        Fut: Future<Output = CollectorResult<Box<dyn TracesProcessor>>> + Send + 'static,
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
        Fut: Future<Output = CollectorResult<Box<dyn MetricsProcessor>>> + Send + 'static,
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
        Fut: Future<Output = CollectorResult<Box<dyn LogsProcessor>>> + Send + 'static,
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

    /// Create a traces processor forwarding to the given consumer
    pub async fn create_traces_processor(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn TracesConsumer>,
    ) -> CollectorResult<Box<dyn TracesProcessor>> {
        (self.create_traces)(settings, config, next).await
    }

    /// Create a metrics processor forwarding to the given consumer
    pub async fn create_metrics_processor(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn MetricsConsumer>,
    ) -> CollectorResult<Box<dyn MetricsProcessor>> {
        (self.create_metrics)(settings, config, next).await
    }

    /// Create a logs processor forwarding to the given consumer
    pub async fn create_logs_processor(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn LogsConsumer>,
    ) -> CollectorResult<Box<dyn LogsProcessor>> {
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
