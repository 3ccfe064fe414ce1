//! Response decoding for each endpoint.
//!
//! Every decoder first maps a non-2xx status to
//! [`MarqueeError::NetworkFailure`], then maps body decoding errors to
//! [`MarqueeError::ParseFailure`].

use crate::domain::{MarqueeError, Movie, MovieDetails, Recommendations, Result};
use serde::Deserialize;

#[derive(Deserialize)]
struct RecommendationEnvelope {
    #[serde(rename = "Recommendations")]
    recommendations: Recommendations,
}

/// Fails unless `status` is in `200..=299`.
///
/// # Errors
///
/// Returns [`MarqueeError::NetworkFailure`] for any other status.
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(MarqueeError::NetworkFailure { status })
    }
}

/// Decodes a `GET /search/title` response into raw (not yet de-duplicated) movies.
///
/// # Errors
///
/// Returns a network failure for a bad status, a parse failure for any body
/// that is not an array of movies.
pub fn decode_search(status: u16, body: &[u8]) -> Result<Vec<Movie>> {
    check_status(status)?;
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a details response.
///
/// # Errors
///
/// Returns a network failure for a bad status, a parse failure for a body that
/// lacks `id` or `title`.
pub fn decode_details(status: u16, body: &[u8]) -> Result<MovieDetails> {
    check_status(status)?;
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a `{"Recommendations": [...]}` envelope.
///
/// # Errors
///
/// Returns a network failure for a bad status, a parse failure when the
/// envelope key is missing or malformed.
pub fn decode_recommendations(status: u16, body: &[u8]) -> Result<Recommendations> {
    check_status(status)?;
    let envelope: RecommendationEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.recommendations)
}

/// Like/dislike carry no body this plugin needs; only the status matters.
///
/// # Errors
///
/// Returns a network failure for a bad status.
pub fn decode_ack(status: u16) -> Result<()> {
    check_status(status)
}
