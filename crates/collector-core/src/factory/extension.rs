//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Extension factory for the Agogos telemetry collector
//!
//! This module provides the factory for components outside the data path.
//! Extensions are signal-agnostic, so unlike the pipeline factories there
//! is exactly one constructor and one stability level per factory, both
//! mandatory at construction time.

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

use crate::error::CollectorResult;
use crate::factory::settings::CreateSettings;
use crate::factory::CreateDefaultConfig;
use crate::traits::config::ComponentConfig;
use crate::traits::extension::Extension;
use crate::types::component::ComponentType;
use crate::types::stability::StabilityLevel;

/// Boxed constructor for an extension
pub type CreateExtension = Box<
    dyn Fn(
            CreateSettings,
            Arc<dyn ComponentConfig>,
        ) -> BoxFuture<'static, CollectorResult<Box<dyn Extension>>>
        + Send
        + Sync,
>;

/// Factory for one extension type
pub struct ExtensionFactory {
    /// Factory type token shared by all instances of this extension
    component_type: ComponentType,

    /// Constructor for this type's default configuration
    create_default_config: CreateDefaultConfig,

    /// Extension constructor
    create: CreateExtension,

    /// Stability declared for this extension
    stability: StabilityLevel,
}

impl ExtensionFactory {
    /// Create an extension factory
    pub fn new<C, F, Fut>(
        component_type: impl Into<ComponentType>,
        create_default_config: C,
        create: F,
        stability: StabilityLevel,
    ) -> Self
    where
        C: Fn() -> Arc<dyn ComponentConfig> + Send + Sync + 'static,
        F: Fn(CreateSettings, Arc<dyn ComponentConfig>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CollectorResult<Box<dyn Extension>>> + Send + 'static,
    {
        Self {
            component_type: component_type.into(),
            create_default_config: Box::new(create_default_config),
            create: Box::new(move |settings, config| Box::pin(create(settings, config))),
            stability,
        }
    }

    /// Factory type token
    pub fn component_type(&self) -> &ComponentType {
        &self.component_type
    }

    /// Build this type's default configuration
    pub fn default_config(&self) -> Arc<dyn ComponentConfig> {
        (self.create_default_config)()
    }

    /// Create an extension instance
    pub async fn create_extension(
        &self,
        settings: CreateSettings,
        config: Arc<dyn ComponentConfig>,
    ) -> CollectorResult<Box<dyn Extension>> {
        (self.create)(settings, config).await
    }

    /// Stability declared for this extension
    pub fn extension_stability(&self) -> StabilityLevel {
        self.stability
    }
}
