//! Modal dialog controller.
//!
//! Details and recommendations share a single modal slot. The slot is a sum
//! type, so the two views are exclusive by construction: whichever fetch
//! succeeds last is what the user sees. Failed fetches never touch the slot.

use crate::api::{ApiClient, HttpRequest};
use crate::domain::{MovieDetails, Recommendations, Result};

/// What the modal currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    ShowingDetails(MovieDetails),
    ShowingRecommendations {
        /// Title the user asked for similar movies to.
        source_title: String,
        items: Recommendations,
    },
}

/// Owns the [`ModalState`] and builds the fetches that feed it.
#[derive(Debug, Clone, Default)]
pub struct DialogController {
    modal: ModalState,
}

impl DialogController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modal: ModalState::Closed,
        }
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.modal, ModalState::Closed)
    }

    /// Builds the details fetch for `movie_id`. The modal is unchanged until
    /// the response is applied.
    #[must_use]
    pub fn open_details(&self, client: &ApiClient, movie_id: &str) -> HttpRequest {
        tracing::debug!(movie_id = %movie_id, "details requested");
        client.details(movie_id)
    }

    /// Builds the "find similar" fetch for `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request body cannot be serialized.
    pub fn open_recommendations(&self, client: &ApiClient, title: &str) -> Result<HttpRequest> {
        tracing::debug!(title = %title, "recommendations requested");
        client.recommendations(title)
    }

    /// Applies a details response.
    ///
    /// On success the details replace whatever modal was open.
    ///
    /// # Errors
    ///
    /// Hands back the fetch error with the modal left as it was.
    pub fn apply_details(&mut self, result: Result<MovieDetails>) -> Result<()> {
        let details = result?;
        tracing::debug!(movie_id = %details.id, replaced_open = self.is_open(), "showing details");
        self.modal = ModalState::ShowingDetails(details);
        Ok(())
    }

    /// Applies a recommendations response for `source_title`.
    ///
    /// # Errors
    ///
    /// Hands back the fetch error with the modal left as it was.
    pub fn apply_recommendations(&mut self, source_title: String, result: Result<Recommendations>) -> Result<()> {
        let items = result?;
        tracing::debug!(
            source_title = %source_title,
            count = items.len(),
            replaced_open = self.is_open(),
            "showing recommendations"
        );
        self.modal = ModalState::ShowingRecommendations { source_title, items };
        Ok(())
    }

    /// Dismisses the modal. Returns `true` if one was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.modal = ModalState::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MarqueeError, Recommendation};

    fn details(id: &str, title: &str) -> MovieDetails {
        serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
    }

    #[test]
    fn recommendations_replace_open_details() {
        let mut dialog = DialogController::new();

        dialog.apply_details(Ok(details("1", "Heat"))).unwrap();
        assert!(matches!(dialog.modal(), ModalState::ShowingDetails(d) if d.title == "Heat"));

        dialog
            .apply_recommendations("Heat".into(), Ok(vec![Recommendation::Title("Ronin".into())]))
            .unwrap();
        assert!(matches!(
            dialog.modal(),
            ModalState::ShowingRecommendations { source_title, items } if source_title == "Heat" && items.len() == 1
        ));
    }

    #[test]
    fn details_replace_open_recommendations() {
        let mut dialog = DialogController::new();

        dialog.apply_recommendations("Heat".into(), Ok(vec![])).unwrap();
        dialog.apply_details(Ok(details("2", "Thief"))).unwrap();

        assert!(matches!(dialog.modal(), ModalState::ShowingDetails(d) if d.id == "2"));
    }

    #[test]
    fn failure_leaves_modal_untouched() {
        let mut dialog = DialogController::new();

        let err = dialog
            .apply_details(Err(MarqueeError::NetworkFailure { status: 404 }))
            .unwrap_err();
        assert!(matches!(err, MarqueeError::NetworkFailure { status: 404 }));
        assert_eq!(dialog.modal(), &ModalState::Closed);

        dialog.apply_details(Ok(details("1", "Heat"))).unwrap();
        let err = dialog
            .apply_recommendations("Heat".into(), Err(MarqueeError::ParseFailure("bad".into())))
            .unwrap_err();
        assert!(matches!(err, MarqueeError::ParseFailure(_)));
        assert!(matches!(dialog.modal(), ModalState::ShowingDetails(_)));
    }

    #[test]
    fn close_from_any_variant() {
        let mut dialog = DialogController::new();
        assert!(!dialog.close());

        dialog.apply_recommendations("Heat".into(), Ok(vec![])).unwrap();
        assert!(dialog.close());
        assert!(!dialog.is_open());
    }

    #[test]
    fn open_builds_requests_without_changing_state() {
        let dialog = DialogController::new();
        let client = ApiClient::new("http://svc", "/movie/details", None);

        let request = dialog.open_details(&client, "7");
        assert_eq!(request.url, "http://svc/movie/details?id=7");

        let request = dialog.open_recommendations(&client, "Heat").unwrap();
        assert_eq!(request.url, "http://svc/api/MakeRecommendation");
        assert!(!dialog.is_open());
    }
}
