//! Domain layer for the Marquee plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or the HTTP transport.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie summaries, details and recommendations
//! - [`results`]: De-duplicated result sets

pub mod error;
pub mod movie;
pub mod results;

pub use error::{MarqueeError, Result};
pub use movie::{Movie, MovieDetails, Recommendation, Recommendations};
pub use results::{dedup_by_id, ResultSet};
