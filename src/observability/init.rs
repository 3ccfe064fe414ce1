//! Subscriber setup.

use super::export;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const TRACE_FILE_NAME: &str = "marquee-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Where spans end up: `~/.local/share/zellij/marquee/marquee-otlp.json` on
/// the host.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    crate::infrastructure::get_data_dir().join(TRACE_FILE_NAME)
}

/// Installs the global subscriber.
///
/// Tracing is best effort: if the data directory cannot be created the plugin
/// runs without a subscriber. Calling this twice leaves the first subscriber
/// in place.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let trace_file = trace_file_path();
    if let Some(dir) = trace_file.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "marquee"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = export::file_tracer_provider(trace_file, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(export::SCOPE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
