//! Result set construction and identity de-duplication.
//!
//! The search service may return the same movie more than once (exact and text
//! matches are merged upstream). [`ResultSet`] is the only shape that reaches
//! rendering and navigation, and it can only be built through [`dedup_by_id`].

use super::movie::Movie;
use std::collections::HashSet;

/// Collapses `movies` to one entry per `id`, keeping each first occurrence in order.
///
/// ```
/// use marquee::domain::{dedup_by_id, Movie};
///
/// let raw = vec![Movie::new("1", "A"), Movie::new("2", "B"), Movie::new("1", "A")];
/// let ids: Vec<_> = dedup_by_id(raw).into_iter().map(|m| m.id).collect();
/// assert_eq!(ids, vec!["1", "2"]);
/// ```
#[must_use]
pub fn dedup_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::with_capacity(movies.len());
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.id.clone()))
        .collect()
}

/// Ordered, de-duplicated search results owned by one widget.
///
/// Replaced atomically on every accepted response, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    movies: Vec<Movie>,
}

impl ResultSet {
    /// Builds a result set from a raw service response.
    #[must_use]
    pub fn from_raw(raw: Vec<Movie>) -> Self {
        let original_count = raw.len();
        let movies = dedup_by_id(raw);
        if movies.len() != original_count {
            tracing::debug!(
                original_count = original_count,
                unique_count = movies.len(),
                "deduplicated search results"
            );
        }
        Self { movies }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
