//! Span exporter that appends OTLP JSON documents to a rotating file.
//!
//! Each exported batch becomes one line holding a full `resourceSpans`
//! document, so the file can be replayed into any OTLP-aware viewer.

use super::rotation::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every document.
pub const SCOPE_NAME: &str = "marquee";

struct OtlpFileExporter {
    file: RotatingFile,
    resource: Resource,
    stopped: AtomicBool,
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped.load(Ordering::SeqCst) {
            Err(TraceError::from("trace exporter already stopped"))
        } else {
            let document = otlp_document(&self.resource, &batch);
            self.file
                .append_line(&document.to_string())
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for OtlpFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFileExporter")
            .field("file", &self.file)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

/// Builds a provider whose spans are exported synchronously to `file_path`.
#[must_use]
pub fn file_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter {
        file: RotatingFile::new(file_path),
        resource: resource.clone(),
        stopped: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn otlp_document(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attributes: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| json!({ "key": key.to_string(), "value": otlp_value(value) }))
        .collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": batch.iter().map(otlp_span).collect::<Vec<_>>(),
            }],
        }],
    })
}

fn otlp_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = otlp_status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": otlp_kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": otlp_attributes(&span.attributes),
        "events": span.events.iter().map(otlp_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(otlp_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn otlp_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": otlp_attributes(&event.attributes),
    })
}

fn otlp_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": otlp_attributes(&link.attributes),
    })
}

fn otlp_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": otlp_value(&kv.value) }))
        .collect()
}

/// OTLP encodes 64-bit integers as strings. Arrays fall back to their debug
/// rendering.
fn otlp_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

const fn otlp_kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn otlp_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn values_use_otlp_encodings() {
        assert_eq!(otlp_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(otlp_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            otlp_value(&Value::String("heat".into())),
            json!({ "stringValue": "heat" })
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(otlp_status(&Status::Unset), (0, String::new()));
        assert_eq!(otlp_status(&Status::Ok), (1, String::new()));
        assert_eq!(otlp_status(&Status::error("boom")), (2, "boom".to_string()));
    }

    #[test]
    fn timestamps_are_nanosecond_strings() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_millis(3)), "3000000");
        assert_eq!(unix_nanos(UNIX_EPOCH), "0");
    }

    #[test]
    fn response_spans_join_the_trace_that_issued_the_request() {
        use crate::api::{ApiClient, HttpResponse, RequestTag, TraceContext};
        use crate::app::{handle_event, AppState, Event};
        use opentelemetry::trace::TracerProvider as _;
        use std::time::Instant;
        use tracing_opentelemetry::OpenTelemetryLayer;
        use tracing_subscriber::layer::SubscriberExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let provider = file_tracer_provider(path.clone(), Resource::empty());
        let subscriber =
            tracing_subscriber::registry().with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)));

        let issuer = TraceContext {
            trace_id: "0af7651916cd43dd8448eb211c80319c".into(),
            parent_span_id: "b7ad6b7169203331".into(),
        };
        let response = HttpResponse {
            tag: RequestTag::Like {
                movie_id: "5f1".into(),
                trace_context: Some(issuer.clone()),
            },
            status: 200,
            body: vec![],
        };
        let mut state = AppState::new(
            ApiClient::new("http://svc", "/movie/details", None),
            crate::ui::Theme::default(),
        );

        // The plugin shim always handles events inside its own update span.
        tracing::subscriber::with_default(subscriber, || {
            let _update = tracing::debug_span!("plugin_update_event").entered();
            handle_event(&mut state, &Event::ApiResponse(response), Instant::now()).unwrap();
        });
        let _ = provider.force_flush();

        let spans: Vec<JsonValue> = std::fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str::<JsonValue>(line).unwrap())
            .flat_map(|doc| {
                doc["resourceSpans"][0]["scopeSpans"][0]["spans"]
                    .as_array()
                    .cloned()
                    .unwrap_or_default()
            })
            .collect();

        let handled = spans.iter().find(|span| span["name"] == "handle_event").unwrap();
        assert_eq!(handled["traceId"], issuer.trace_id.as_str());
        assert_eq!(handled["parentSpanId"], issuer.parent_span_id.as_str());
    }

    #[test]
    fn empty_batch_still_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "marquee")]);
        let document = otlp_document(&resource, &[]);

        let scope = &document["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], SCOPE_NAME);
        assert_eq!(scope["spans"], json!([]));

        let attributes = document["resourceSpans"][0]["resource"]["attributes"]
            .as_array()
            .unwrap();
        assert!(attributes.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "marquee" }
        })));
    }
}
