//! HTTP protocol layer for the movie discovery service.
//!
//! This module defines the request and response protocol between the widget
//! and the remote service. Requests are built as plain values and executed by
//! the plugin shim through Zellij's `web_request`; results come back tagged so
//! the event handler can route them and discard stale searches.
//!
//! # Architecture
//!
//! - `client`: Endpoint construction and session cookie attachment
//! - `tag`: Request tags with trace context propagation through the context map
//! - `decode`: Status checking and body decoding per endpoint

pub mod client;
pub mod decode;
pub mod tag;

pub use client::{ApiClient, HttpMethod, HttpRequest, HttpResponse};
pub use tag::{RequestTag, TraceContext, CONTEXT_KEY};
