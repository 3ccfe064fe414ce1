//! Like/dislike dispatch.
//!
//! Reactions are fire-and-forget: the request goes out, and its outcome only
//! ever produces a notice. Results, highlight and modal are never touched, and
//! nothing here waits on or supersedes the search pipeline.

use super::notice::NoticeKind;
use crate::api::{ApiClient, HttpRequest};
use crate::domain::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    /// Builds the POST for this reaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request body cannot be serialized.
    pub fn request(self, client: &ApiClient, movie_id: &str) -> Result<HttpRequest> {
        tracing::debug!(reaction = ?self, movie_id = %movie_id, "reaction dispatched");
        match self {
            Self::Like => client.like(movie_id),
            Self::Dislike => client.dislike(movie_id),
        }
    }

    /// Turns the reaction's outcome into the notice to show.
    #[must_use]
    pub fn outcome(self, result: &Result<()>) -> (NoticeKind, String) {
        match result {
            Ok(()) => (NoticeKind::Ack, self.ack_text().to_string()),
            Err(e) => (NoticeKind::Error, e.user_message(self.operation())),
        }
    }

    const fn ack_text(self) -> &'static str {
        match self {
            Self::Like => "Movie liked",
            Self::Dislike => "Movie disliked",
        }
    }

    const fn operation(self) -> &'static str {
        match self {
            Self::Like => "like movie",
            Self::Dislike => "dislike movie",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarqueeError;

    #[test]
    fn outcome_maps_to_notice() {
        assert_eq!(
            Reaction::Like.outcome(&Ok(())),
            (NoticeKind::Ack, "Movie liked".to_string())
        );
        assert_eq!(
            Reaction::Dislike.outcome(&Err(MarqueeError::NetworkFailure { status: 401 })),
            (NoticeKind::Error, "Failed to dislike movie (HTTP 401)".to_string())
        );
    }

    #[test]
    fn request_targets_the_reaction_endpoint() {
        let client = ApiClient::new("http://svc", "/movie/details", Some("tok".into()));

        let like = Reaction::Like.request(&client, "9").unwrap();
        assert_eq!(like.url, "http://svc/api/like");

        let dislike = Reaction::Dislike.request(&client, "9").unwrap();
        assert_eq!(dislike.url, "http://svc/api/dislike");
        assert_eq!(dislike.headers.get("Cookie").map(String::as_str), Some("authToken=tok"));
    }
}
