//! Error types for the Marquee plugin.
//!
//! This module defines the centralized error type [`MarqueeError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors never escape an operation boundary as failures: the event handler turns
//! them into notices via [`MarqueeError::user_message`].

use thiserror::Error;

/// The main error type for Marquee plugin operations.
///
/// # Examples
///
/// ```
/// use marquee::domain::MarqueeError;
///
/// let err = MarqueeError::NetworkFailure { status: 503 };
/// assert_eq!(err.to_string(), "Network failure: HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// The remote call failed at the transport level or returned a non-success status.
    ///
    /// Zellij reports transport failures as a status code as well, so both cases
    /// collapse into this variant.
    #[error("Network failure: HTTP status {status}")]
    NetworkFailure {
        /// Status code reported by the host for the request.
        status: u16,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MarqueeError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailure(err.to_string())
    }
}

impl MarqueeError {
    /// Builds the widget-visible message for a failed operation.
    ///
    /// `operation` is phrased as the thing that failed, e.g. `"fetch search results"`.
    ///
    /// ```
    /// use marquee::domain::MarqueeError;
    ///
    /// let err = MarqueeError::ParseFailure("expected array".into());
    /// assert_eq!(err.user_message("like movie"), "Failed to like movie (malformed response)");
    /// ```
    #[must_use]
    pub fn user_message(&self, operation: &str) -> String {
        match self {
            Self::NetworkFailure { status } => format!("Failed to {operation} (HTTP {status})"),
            Self::ParseFailure(_) => format!("Failed to {operation} (malformed response)"),
            other => format!("Failed to {operation}: {other}"),
        }
    }
}

/// A specialized `Result` type for Marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;
