//! OpenTelemetry tracer provider setup.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};

use crate::config::observability::ObservabilityConfig;

use super::ObservabilityError;

pub(super) fn build_tracer_provider(
    config: &ObservabilityConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otel_exporter_otlp_endpoint.clone())
        .with_timeout(Duration::from_secs(config.otel_exporter_otlp_timeout_seconds))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(build_sampler(config.otel_trace_sample_ratio))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(build_resource(config))
        .with_batch_exporter(exporter)
        .build())
}

fn build_resource(config: &ObservabilityConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(config.otel_service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", config.otel_service_version.clone()),
            KeyValue::new(
                "deployment.environment.name",
                config.otel_deployment_environment.clone(),
            ),
        ])
        .build()
}

/// Honour upstream sampling decisions, otherwise sample by trace id ratio.
fn build_sampler(sample_ratio: f64) -> Sampler {
    Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
        sample_ratio.clamp(0.0, 1.0),
    )))
}

#[cfg(test)]
mod tests {
    use opentelemetry::Key;

    use super::*;

    fn make_config() -> ObservabilityConfig {
        ObservabilityConfig {
            otel_enabled: true,
            otel_parent_propagation_enabled: false,
            otel_exporter_otlp_endpoint: "http://localhost:4317".to_string(),
            otel_exporter_otlp_timeout_seconds: 3,
            otel_service_name: "sealife-json".to_string(),
            otel_service_version: "0.1.0".to_string(),
            otel_deployment_environment: "test".to_string(),
            otel_trace_sample_ratio: 1.0,
            slow_request_threshold_ms: 1_000,
        }
    }

    #[test]
    fn resource_carries_service_identity() {
        let resource = build_resource(&make_config());

        assert_eq!(
            resource
                .get(&Key::new("service.name"))
                .map(|value| value.to_string()),
            Some("sealife-json".to_string())
        );
        assert_eq!(
            resource
                .get(&Key::new("deployment.environment.name"))
                .map(|value| value.to_string()),
            Some("test".to_string())
        );
    }

    #[test]
    fn sampler_clamps_out_of_range_ratio() {
        let sampler = format!("{:?}", build_sampler(4.0));

        assert!(sampler.contains("TraceIdRatioBased(1.0)"), "got {sampler}");
    }
}
