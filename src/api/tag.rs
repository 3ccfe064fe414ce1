//! Request tags carried through the Zellij web request context map.
//!
//! Zellij hands back the context map it was given alongside every
//! `WebRequestResult`, so each outgoing request is tagged with what it was for
//! (and, for searches, which generation issued it). Tags also carry the
//! OpenTelemetry context of the issuing span so response handling joins the
//! same trace.

use crate::domain::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Context map key under which the serialized tag travels.
pub const CONTEXT_KEY: &str = "marquee";

/// Distributed tracing context for linking a response to the span that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the issuing span.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled,
    /// which is always the case when tracing is not initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }

    /// Makes this context the remote parent of `span`, replacing the parent it
    /// inherited from the enclosing tracing span.
    ///
    /// Returns `false` if the ids do not parse.
    pub fn adopt(&self, span: &tracing::Span) -> bool {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let (Ok(trace_id), Ok(span_id)) = (
            TraceId::from_hex(&self.trace_id),
            SpanId::from_hex(&self.parent_span_id),
        ) else {
            return false;
        };

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        span.set_parent(opentelemetry::Context::new().with_remote_span_context(span_context));
        true
    }
}

/// Generates tag constructors that capture the current trace context.
macro_rules! request_tag_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl RequestTag {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " tag with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

request_tag_builders! {
    search(Search { generation: u64, query: String }),
    details(Details { movie_id: String }),
    recommendations(Recommendations { title: String }),
    like(Like { movie_id: String }),
    dislike(Dislike { movie_id: String }),
}

/// Identifies what an in-flight web request was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestTag {
    /// Title search issued by the request coordinator.
    Search {
        /// Coordinator generation that issued the request.
        generation: u64,
        /// Committed query text.
        query: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Details fetch for the dialog controller.
    Details {
        movie_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// "Find similar" fetch for the dialog controller.
    Recommendations {
        /// Title the recommendations were requested for.
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Fire-and-forget like.
    Like {
        movie_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Fire-and-forget dislike.
    Dislike {
        movie_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl RequestTag {
    /// Short name used in span fields and log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Details { .. } => "details",
            Self::Recommendations { .. } => "recommendations",
            Self::Like { .. } => "like",
            Self::Dislike { .. } => "dislike",
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Search { trace_context, .. }
            | Self::Details { trace_context, .. }
            | Self::Recommendations { trace_context, .. }
            | Self::Like { trace_context, .. }
            | Self::Dislike { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Serializes the tag into a Zellij web request context map.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::ParseFailure`] if the tag cannot be serialized.
    pub fn to_context(&self) -> Result<BTreeMap<String, String>> {
        let payload = serde_json::to_string(self)?;
        Ok(BTreeMap::from([(CONTEXT_KEY.to_string(), payload)]))
    }

    /// Recovers a tag from the context map returned with a web request result.
    ///
    /// # Errors
    ///
    /// Returns an error if the map has no tag (a request this plugin did not
    /// issue) or the tag does not decode.
    pub fn from_context(context: &BTreeMap<String, String>) -> Result<Self> {
        let payload = context
            .get(CONTEXT_KEY)
            .ok_or_else(|| MarqueeError::ParseFailure(format!("context has no `{CONTEXT_KEY}` entry")))?;
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_leave_trace_context_empty_without_subscriber() {
        let tag = RequestTag::search(3, "alien".into());
        assert_eq!(tag.trace_context(), None);
        assert_eq!(tag.kind(), "search");
    }

    #[test]
    fn tags_survive_the_context_map() {
        let tags = vec![
            RequestTag::search(42, "the thing".into()),
            RequestTag::details("5f1".into()),
            RequestTag::recommendations("Heat".into()),
            RequestTag::like("5f1".into()),
            RequestTag::dislike("5f2".into()),
        ];

        for tag in tags {
            let context = tag.to_context().unwrap();
            assert_eq!(RequestTag::from_context(&context).unwrap(), tag);
        }
    }

    #[test]
    fn foreign_context_is_rejected() {
        let context = BTreeMap::from([("other".to_string(), "{}".to_string())]);
        assert!(matches!(RequestTag::from_context(&context), Err(MarqueeError::ParseFailure(_))));

        let garbled = BTreeMap::from([(CONTEXT_KEY.to_string(), "not json".to_string())]);
        assert!(RequestTag::from_context(&garbled).is_err());
    }

    #[test]
    fn trace_context_with_bad_hex_is_not_adopted() {
        let ctx = TraceContext {
            trace_id: "zz".into(),
            parent_span_id: "00".into(),
        };
        assert!(!ctx.adopt(&tracing::Span::none()));
    }
}
