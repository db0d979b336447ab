//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Exporter factory for the Agogos telemetry collector
//!
//! This module provides the factory through which exporter plugins declare
//! which signals they support. Exporters terminate a pipeline, so their
//! constructors take no downstream consumer. Unregistered signals fail with
//! [`CollectorError::UnsupportedCapability`] when invoked.

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

use crate::error::{CollectorError, CollectorResult};
use crate::factory::settings::CreateSettings;
use crate::factory::CreateDefaultConfig;
use crate::traits::config::ComponentConfig;
use crate::traits::exporter::{LogsExporter, MetricsExporter, TracesExporter};
use crate::types::component::{ComponentKind, ComponentType};
use crate::types::pipeline::SignalKind;
use crate::types::stability::StabilityLevel;

/// Boxed constructor for a traces exporter
pub type CreateTracesExporter = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn TracesExporter>>>
        + Send
        + Sync,
>;

/// Boxed constructor for a metrics exporter
pub type CreateMetricsExporter = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn MetricsExporter>>>
        + Send
        + Sync,
>;

/// Boxed constructor for a logs exporter
pub type CreateLogsExporter = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn LogsExporter>>>
        + Send
        + Sync,
>;

/// Factory for one exporter type
pub struct ExporterFactory {
    /// Factory type token shared by all instances of this exporter
    component_type: ComponentType,

    /// Constructor for this type's default configuration
    create_default_config: CreateDefaultConfig,

    /// Traces constructor slot
    create_traces: CreateTracesExporter,

    /// Stability declared for the traces capability
    traces_stability: StabilityLevel,

    /// Metrics constructor slot
    create_metrics: CreateMetricsExporter,

    /// Stability declared for the metrics capability
    metrics_stability: StabilityLevel,

    /// Logs constructor slot
    create_logs: CreateLogsExporter,

    /// Stability declared for the logs capability
    logs_stability: StabilityLevel,
}

impl ExporterFactory {
    /// Create a factory with no registered signal capabilities
    pub fn new<C>(component_type: impl Into<ComponentType>, create_default_config: C) -> Self
    where
        C: Fn() -> Arc<dyn ComponentConfig> + Send + Sync + 'static,
    {
        Self {
            component_type: component_type.into(),
            create_default_config: Box::new(create_default_config),
            create_traces: Box::new(|_, _| {
                Box::pin(async {
                    Err(CollectorError::unsupported_capability(
                        ComponentKind::Exporter,
                        SignalKind::Traces,
                    ))
                })
            }),
            traces_stability: StabilityLevel::Undefined,
            create_metrics: Box::new(|_, _| {
                Box::pin(async {
                    Err(CollectorError::unsupported_capability(
                        ComponentKind::Exporter,
                        SignalKind::Metrics,
                    ))
                })
            }),
            metrics_stability: StabilityLevel::Undefined,
            create_logs: Box::new(|_, _| {
                Box::pin(async {
                    Err(CollectorError::unsupported_capability(
                        ComponentKind::Exporter,
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
        F: Fn(CreateSettings, Arc<dyn ComponentConfig>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CollectorResult<Box<dyn TracesExporter>>> + Send + 'static,
    {
        self.create_traces = Box::new(move |settings, config| Box::pin(create(settings, config)));
        self.traces_stability = stability;
        self
    }

    /// Register the metrics capability
    pub fn with_metrics<F, Fut>(mut self, create: F, stability: StabilityLevel) -> Self
    where
        F: Fn(CreateSettings, Arc<dyn ComponentConfig>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CollectorResult<Box<dyn MetricsExporter>>> + Send + 'static,
    {
        self.create_metrics = Box::new(move |settings, config| Box::pin(create(settings, config)));
        self.metrics_stability = stability;
        self
    }

    /// Register the logs capability
    pub fn with_logs<F, Fut>(mut self, create: F, stability: StabilityLevel) -> Self
    where
        F: Fn(CreateSettings, Arc<dyn ComponentConfig>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CollectorResult<Box<dyn LogsExporter>>> + Send + 'static,
    {
        self.create_logs = Box::new(move |settings, config| Box::pin(create(settings, config)));
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

    /// Create a traces exporter
    pub async fn create_traces_exporter(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
    ) -> CollectorResult<Box<dyn TracesExporter>> {
        (self.create_traces)(settings, config).await
    }

    /// Create a metrics exporter
    pub async fn create_metrics_exporter(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
    ) -> CollectorResult<Box<dyn MetricsExporter>> {
        (self.create_metrics)(settings, config).await
    }

    /// Create a logs exporter
    pub async fn create_logs_exporter(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
    ) -> CollectorResult<Box<dyn LogsExporter>> {
        (self.create_logs)(settings, config).await
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
