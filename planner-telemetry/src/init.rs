//! Telemetry initialization

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

static INIT: OnceLock<()> = OnceLock::new();

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(DEFAULT_FILTER)?),
    }
}

fn fmt_layer<S>() -> tracing_subscriber::fmt::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer().with_target(true).with_line_number(true)
}

/// Initialize console logging.
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// # Example
/// ```
/// use planner_telemetry::init_telemetry;
/// init_telemetry("study-planner").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> InitResult {
    if INIT.get().is_some() {
        return Ok(());
    }

    tracing_subscriber::registry().with(env_filter()?).with(fmt_layer()).try_init()?;
    let _ = INIT.set(());

    tracing::info!(service.name = service_name, "Telemetry initialized");
    Ok(())
}

/// Initialize console logging plus OTLP span export.
///
/// Must be called from within a tokio runtime; spans are exported in batches.
///
/// # Example
/// ```no_run
/// # #[tokio::main(flavor = "current_thread")] async fn main() {
/// use planner_telemetry::init_with_otlp;
/// init_with_otlp("study-planner", "http://localhost:4317")
///     .expect("Failed to initialize telemetry");
/// # }
/// ```
pub fn init_with_otlp(service_name: &str, endpoint: &str) -> InitResult {
    use opentelemetry_otlp::WithExportConfig;
    use tracing_opentelemetry::OpenTelemetryLayer;

    if INIT.get().is_some() {
        return Ok(());
    }

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(opentelemetry_otlp::new_exporter().tonic().with_endpoint(endpoint))
        .with_trace_config(opentelemetry_sdk::trace::config().with_resource(
            opentelemetry_sdk::Resource::new(vec![opentelemetry::KeyValue::new(
                "service.name",
                service_name.to_string(),
            )]),
        ))
        .install_batch(opentelemetry_sdk::runtime::Tokio)?;

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(fmt_layer())
        .with(OpenTelemetryLayer::new(tracer))
        .try_init()?;
    let _ = INIT.set(());

    tracing::info!(
        service.name = service_name,
        otlp.endpoint = endpoint,
        "Telemetry initialized with OpenTelemetry"
    );
    Ok(())
}

/// Flush pending spans. Call before process exit.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_telemetry("test-service").unwrap();
        init_telemetry("test-service").unwrap();
    }
}
