//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Comprehensive tests for factory capability slots
//!
//! This module exercises the per-signal capability surface of the pipeline
//! factories: registered constructors, sentinel slots for unregistered
//! signals, stability reporting, and the wiring of constructed components
//! to their downstream consumers.

use std::sync::Arc;

use collector_core::mock::{
    MockComponentConfig, MockConsumer, MockExporter, MockExtension, MockProcessor, MockReceiver,
};
use collector_core::types::telemetry::{LogsData, TracesData};
use collector_core::{
    CollectorError, ComponentId, ComponentKind, CreateSettings, ExporterFactory, ExtensionFactory,
    ProcessorFactory, ReceiverFactory, SignalKind, StabilityLevel,
};

/// Helper function to create a receiver factory supporting every signal
fn full_receiver_factory() -> ReceiverFactory {
    ReceiverFactory::new("otlp", || Arc::new(MockComponentConfig::valid()))
        .with_traces(
            |_settings, _config, _next| async { Ok(MockReceiver::boxed()) },
            StabilityLevel::Stable,
        )
        .with_metrics(
            |_settings, _config, _next| async { Ok(MockReceiver::boxed()) },
            StabilityLevel::Beta,
        )
        .with_logs(
            |_settings, _config, _next| async { Ok(MockReceiver::boxed()) },
            StabilityLevel::Alpha,
        )
}

/// Helper function to create an exporter factory supporting every signal
fn full_exporter_factory() -> ExporterFactory {
    ExporterFactory::new("otlp", || Arc::new(MockComponentConfig::valid()))
        .with_traces(
            |_settings, _config| async { Ok(MockExporter::boxed_traces()) },
            StabilityLevel::Stable,
        )
        .with_metrics(
            |_settings, _config| async { Ok(MockExporter::boxed_metrics()) },
            StabilityLevel::Beta,
        )
        .with_logs(
            |_settings, _config| async { Ok(MockExporter::boxed_logs()) },
            StabilityLevel::Alpha,
        )
}

#[tokio::test]
async fn test_receiver_factory_with_all_signals_registered() {
    let factory = full_receiver_factory();
    let settings = || CreateSettings::new(ComponentId::new("otlp"));

    let traces = factory
        .create_traces_receiver(settings(), factory.default_config(), Arc::new(MockConsumer::new()))
        .await;
    let metrics = factory
        .create_metrics_receiver(settings(), factory.default_config(), Arc::new(MockConsumer::new()))
        .await;
    let logs = factory
        .create_logs_receiver(settings(), factory.default_config(), Arc::new(MockConsumer::new()))
        .await;

    assert!(traces.is_ok());
    assert!(metrics.is_ok());
    assert!(logs.is_ok());
    assert_eq!(factory.traces_stability(), StabilityLevel::Stable);
    assert_eq!(factory.metrics_stability(), StabilityLevel::Beta);
    assert_eq!(factory.logs_stability(), StabilityLevel::Alpha);
}

#[tokio::test]
async fn test_exporter_factory_with_all_signals_registered() {
    let factory = full_exporter_factory();
    let settings = || CreateSettings::new(ComponentId::new("otlp"));

    let traces = factory
        .create_traces_exporter(settings(), factory.default_config())
        .await;
    let metrics = factory
        .create_metrics_exporter(settings(), factory.default_config())
        .await;
    let logs = factory
        .create_logs_exporter(settings(), factory.default_config())
        .await;

    assert!(traces.is_ok());
    assert!(metrics.is_ok());
    assert!(logs.is_ok());
    assert_eq!(factory.traces_stability(), StabilityLevel::Stable);
    assert_eq!(factory.metrics_stability(), StabilityLevel::Beta);
    assert_eq!(factory.logs_stability(), StabilityLevel::Alpha);
}

#[tokio::test]
async fn test_fresh_factory_reports_every_signal_unsupported() {
    let factory = ReceiverFactory::new("inert", || Arc::new(MockComponentConfig::valid()));
    let settings = || CreateSettings::new(ComponentId::new("inert"));

    let traces_err = factory
        .create_traces_receiver(settings(), factory.default_config(), Arc::new(MockConsumer::new()))
        .await
        .err()
        .expect("expected sentinel error");
    let metrics_err = factory
        .create_metrics_receiver(settings(), factory.default_config(), Arc::new(MockConsumer::new()))
        .await
        .err()
        .expect("expected sentinel error");
    let logs_err = factory
        .create_logs_receiver(settings(), factory.default_config(), Arc::new(MockConsumer::new()))
        .await
        .err()
        .expect("expected sentinel error");

    for (err, signal) in [
        (traces_err, SignalKind::Traces),
        (metrics_err, SignalKind::Metrics),
        (logs_err, SignalKind::Logs),
    ] {
        match err {
            CollectorError::UnsupportedCapability { kind, signal: s } => {
                assert_eq!(kind, ComponentKind::Receiver);
                assert_eq!(s, signal);
            }
            other => panic!("expected UnsupportedCapability, got {other:?}"),
        }
    }

    assert_eq!(factory.traces_stability(), StabilityLevel::Undefined);
    assert_eq!(factory.metrics_stability(), StabilityLevel::Undefined);
    assert_eq!(factory.logs_stability(), StabilityLevel::Undefined);
}

#[tokio::test]
async fn test_partial_registration_leaves_other_slots_at_sentinel() {
    let factory = ExporterFactory::new("jaeger", || Arc::new(MockComponentConfig::valid()))
        .with_traces(
            |_settings, _config| async { Ok(MockExporter::boxed_traces()) },
            StabilityLevel::Stable,
        );

    let settings = CreateSettings::new(ComponentId::new("jaeger"));
    assert!(factory
        .create_traces_exporter(settings.clone(), factory.default_config())
        .await
        .is_ok());

    let err = factory
        .create_metrics_exporter(settings, factory.default_config())
        .await
        .err()
        .expect("expected sentinel error");
    assert!(err.is_unsupported_capability());
    assert_eq!(
        err.to_string(),
        "metrics telemetry is not supported by this exporter"
    );
}

#[tokio::test]
async fn test_constructor_failure_is_not_the_sentinel() {
    let factory = ReceiverFactory::new("flaky", || Arc::new(MockComponentConfig::valid()))
        .with_traces(
            |_settings, _config, _next| async {
                Err(CollectorError::component("listener failed to bind"))
            },
            StabilityLevel::Experimental,
        );

    let err = factory
        .create_traces_receiver(
            CreateSettings::new(ComponentId::new("flaky")),
            factory.default_config(),
            Arc::new(MockConsumer::new()),
        )
        .await
        .err()
        .expect("expected constructor error");

    assert!(!err.is_unsupported_capability());
    assert!(matches!(err, CollectorError::Component { .. }));
}

#[tokio::test]
async fn test_factory_built_chain_delivers_to_downstream_consumer() {
    // Wire a processor to a terminal exporter the way the service runtime
    // would, then push batches through the factory-built stage.
    let exporter = Arc::new(MockExporter::new());
    let factory = ProcessorFactory::new("batch", || Arc::new(MockComponentConfig::valid()))
        .with_traces(
            |_settings, _config, next| async move { Ok(MockProcessor::boxed_traces(next)) },
            StabilityLevel::Stable,
        );

    let processor = factory
        .create_traces_processor(
            CreateSettings::new(ComponentId::new("batch")),
            factory.default_config(),
            exporter.clone(),
        )
        .await
        .unwrap();

    processor.start().await.unwrap();
    processor
        .consume_traces(TracesData::new(Vec::new()))
        .await
        .unwrap();
    processor
        .consume_traces(TracesData::new(Vec::new()))
        .await
        .unwrap();
    processor.shutdown().await.unwrap();

    assert_eq!(exporter.exported_traces(), 2);
}

#[tokio::test]
async fn test_factory_built_logs_chain_delivers_to_downstream_consumer() {
    let exporter = Arc::new(MockExporter::new());
    let factory = ProcessorFactory::new("batch", || Arc::new(MockComponentConfig::valid()))
        .with_logs(
            |_settings, _config, next| async move { Ok(MockProcessor::boxed_logs(next)) },
            StabilityLevel::Stable,
        );

    let processor = factory
        .create_logs_processor(
            CreateSettings::new(ComponentId::new("batch")),
            factory.default_config(),
            exporter.clone(),
        )
        .await
        .unwrap();

    processor
        .consume_logs(LogsData::new(Vec::new()))
        .await
        .unwrap();

    assert_eq!(exporter.exported_logs(), 1);
}

#[tokio::test]
async fn test_default_config_comes_from_the_factory_closure() {
    let factory = ProcessorFactory::new("batch", || {
        Arc::new(MockComponentConfig {
            endpoint: "mock://batcher".to_string(),
            fail_with: None,
        })
    });

    let config = factory.default_config();
    let config = config
        .as_any()
        .downcast_ref::<MockComponentConfig>()
        .expect("default config must be the mock type");
    assert_eq!(config.endpoint, "mock://batcher");
    assert_eq!(factory.component_type().as_str(), "batch");
}

#[tokio::test]
async fn test_extension_factory_builds_and_reports_stability() {
    let factory = ExtensionFactory::new(
        "health_check",
        || Arc::new(MockComponentConfig::valid()),
        |settings, _config| async move {
            assert_eq!(settings.build_info.command, "agogos");
            Ok(MockExtension::boxed())
        },
        StabilityLevel::Beta,
    );

    let extension = factory
        .create_extension(
            CreateSettings::new(ComponentId::new("health_check")),
            factory.default_config(),
        )
        .await
        .unwrap();

    assert!(extension.start().await.is_ok());
    assert!(extension.shutdown().await.is_ok());
    assert_eq!(factory.extension_stability(), StabilityLevel::Beta);
}

#[tokio::test]
async fn test_receiver_constructor_receives_downstream_consumer() {
    // The factory passes the consumer through untouched; prove it by
    // consuming from inside the constructor.
    let downstream = Arc::new(MockConsumer::new());
    let factory = ReceiverFactory::new("tap", || Arc::new(MockComponentConfig::valid()))
        .with_traces(
            |_settings, _config, next| async move {
                next.consume_traces(TracesData::new(Vec::new())).await?;
                Ok(MockReceiver::boxed())
            },
            StabilityLevel::Experimental,
        );

    factory
        .create_traces_receiver(
            CreateSettings::new(ComponentId::new("tap")),
            factory.default_config(),
            downstream.clone(),
        )
        .await
        .unwrap();

    assert_eq!(downstream.traces_batches(), 1);
}
