use crate::config::Config;
use crate::infrastructure::http::middleware::request_metrics;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{trace::Tracer, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type BoxError = Box<dyn std::error::Error>;

/// Keeps the OTLP batch exporter alive; flushes pending spans on drop.
pub struct Telemetry {
    otlp_enabled: bool,
}

impl Drop for Telemetry {
    fn drop(&mut self) {
        if self.otlp_enabled {
            opentelemetry::global::shutdown_tracer_provider();
        }
    }
}

/// Installs the global subscriber and, when enabled, the Prometheus recorder.
pub fn init(config: &Config) -> Result<Telemetry, BoxError> {
    let tracer = otlp_tracer(config)?;
    let otlp_enabled = tracer.is_some();

    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer().with_thread_ids(true))
        .with(tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t)))
        .try_init()?;

    if config.metrics_enabled {
        install_prometheus(config)?;
    }

    tracing::info!(
        service = %config.service_name,
        otlp = otlp_enabled,
        metrics = config.metrics_enabled,
        "Telemetry initialized"
    );

    Ok(Telemetry { otlp_enabled })
}

/// `RUST_LOG` wins; otherwise debug for this crate and the HTTP stack.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=debug,tower_http=debug,axum=debug",
            env!("CARGO_CRATE_NAME")
        ))
    })
}

fn otlp_tracer(config: &Config) -> Result<Option<Tracer>, BoxError> {
    let Some(endpoint) = config.otel_exporter_endpoint.as_deref() else {
        return Ok(None);
    };

    let resource = Resource::new([KeyValue::new(
        "service.name",
        config.service_name.clone(),
    )]);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint),
        )
        .with_trace_config(opentelemetry_sdk::trace::config().with_resource(resource))
        .install_batch(opentelemetry_sdk::runtime::Tokio)?;

    Ok(Some(tracer))
}

fn install_prometheus(config: &Config) -> Result<(), BoxError> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], config.metrics_port))
        .add_global_label("service", config.service_name.clone())
        .install()?;

    request_metrics::describe();

    tracing::info!(
        "Prometheus exporter for {} listening on port {}",
        config.service_name,
        config.metrics_port
    );
    Ok(())
}
