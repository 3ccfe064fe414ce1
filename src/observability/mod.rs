//! Structured tracing exported as OTLP JSON to a file in the plugin data dir.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OtlpFileExporter → marquee-otlp.json
//! ```
//!
//! The live file rotates at 5 MB and keeps two numbered backups. The filter
//! comes from the `trace_level` plugin option and defaults to `info`.
//!
//! ```rust,no_run
//! use marquee::observability::init_tracing;
//! use marquee::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("plugin loaded");
//! ```

mod export;
mod init;
mod rotation;

pub use init::{init_tracing, trace_file_path, TRACE_FILE_NAME};
