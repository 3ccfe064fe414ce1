//! Movie domain models as delivered by the discovery service.
//!
//! Search results arrive as [`Movie`] summaries, the details dialog consumes a
//! single [`MovieDetails`], and "find similar" yields a list of
//! [`Recommendation`]s. All types deserialize straight from the service's JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder the service uses for fields it has no value for.
const UNKNOWN: &str = "Unknown";

/// A search result summary.
///
/// Produced by `GET /search/title`; never mutated, only replaced wholesale when
/// a newer response is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
}

impl Movie {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            poster: None,
        }
    }
}

/// Full movie record shown in the details dialog.
///
/// The service sends scalar fields either as numbers or as the string
/// `"Unknown"`, so everything except the lists is held as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub id: String,
    pub title: String,
    #[serde(default = "unknown", deserialize_with = "display_scalar")]
    pub overview: String,
    #[serde(default = "unknown", deserialize_with = "display_scalar")]
    pub release_date: String,
    #[serde(default = "unknown", deserialize_with = "display_scalar")]
    pub runtime: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub production_companies: Vec<String>,
    #[serde(default = "unknown", deserialize_with = "display_scalar")]
    pub popularity: String,
    #[serde(default = "unknown", deserialize_with = "display_scalar")]
    pub vote_average: String,
    #[serde(default = "unknown", deserialize_with = "display_scalar")]
    pub vote_count: String,
}

impl MovieDetails {
    /// Parses the release date, accepting `YYYY-MM-DD` as sent by the service.
    #[must_use]
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok()
    }

    /// Title decorated with the release year when the date parses.
    ///
    /// ```
    /// # use marquee::domain::MovieDetails;
    /// let details: MovieDetails = serde_json::from_str(
    ///     r#"{"id":"1","title":"Heat","releaseDate":"1995-12-15"}"#,
    /// ).unwrap();
    /// assert_eq!(details.display_title(), "Heat (1995)");
    /// ```
    #[must_use]
    pub fn display_title(&self) -> String {
        self.parsed_release_date().map_or_else(
            || self.title.clone(),
            |date| format!("{} ({})", self.title, date.format("%Y")),
        )
    }

    /// Release date in long form (`15 December 1995`), or the raw text.
    #[must_use]
    pub fn display_release_date(&self) -> String {
        self.parsed_release_date().map_or_else(
            || self.release_date.clone(),
            |date| date.format("%-d %B %Y").to_string(),
        )
    }

    /// Runtime with a minutes suffix when the service knows it.
    #[must_use]
    pub fn display_runtime(&self) -> String {
        if self.runtime == UNKNOWN {
            self.runtime.clone()
        } else {
            format!("{} mins", self.runtime)
        }
    }
}

/// A single "find similar" entry.
///
/// Older service builds return bare titles, newer ones return objects with an
/// optional poster. Both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    Title(String),
    Movie {
        title: String,
        #[serde(default)]
        poster: Option<String>,
    },
}

impl Recommendation {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Title(title) | Self::Movie { title, .. } => title,
        }
    }

    #[must_use]
    pub fn has_poster(&self) -> bool {
        matches!(self, Self::Movie { poster: Some(_), .. })
    }
}

/// Ordered recommendation list; lifecycle is independent from the result set.
pub type Recommendations = Vec<Recommendation>;

fn unknown() -> String {
    UNKNOWN.to_string()
}

fn display_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => unknown(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_poster_may_be_null_or_missing() {
        let movies: Vec<Movie> = serde_json::from_str(
            r#"[{"id":"a","title":"Alien","poster":null},{"id":"b","title":"Brazil"},
                {"id":"c","title":"Casablanca","poster":"http://img/c.jpg"}]"#,
        )
        .unwrap();

        assert_eq!(movies[0].poster, None);
        assert_eq!(movies[1].poster, None);
        assert_eq!(movies[2].poster.as_deref(), Some("http://img/c.jpg"));
    }

    #[test]
    fn details_accept_numbers_and_unknown_strings() {
        let details: MovieDetails = serde_json::from_str(
            r#"{
                "id": "5f1",
                "title": "Heat",
                "overview": "A group of professional bank robbers...",
                "releaseDate": "1995-12-15",
                "runtime": 170.0,
                "genres": ["Action", "Crime"],
                "productionCompanies": ["Regency Enterprises"],
                "popularity": "17.924927",
                "voteAverage": 7.7,
                "voteCount": "Unknown"
            }"#,
        )
        .unwrap();

        assert_eq!(details.runtime, "170.0");
        assert_eq!(details.vote_average, "7.7");
        assert_eq!(details.vote_count, "Unknown");
        assert_eq!(details.genres, vec!["Action", "Crime"]);
        assert_eq!(details.display_release_date(), "15 December 1995");
        assert_eq!(details.display_runtime(), "170.0 mins");
    }

    #[test]
    fn details_default_missing_fields() {
        let details: MovieDetails =
            serde_json::from_str(r#"{"id":"1","title":"Solaris","runtime":"Unknown"}"#).unwrap();

        assert_eq!(details.overview, "Unknown");
        assert!(details.production_companies.is_empty());
        assert_eq!(details.display_title(), "Solaris");
        assert_eq!(details.display_runtime(), "Unknown");
    }

    #[test]
    fn recommendations_accept_both_shapes() {
        let recs: Recommendations = serde_json::from_str(
            r#"["Ronin", {"title": "Collateral", "poster": "http://img/x.jpg"}, {"title": "Thief"}]"#,
        )
        .unwrap();

        assert_eq!(
            recs.iter().map(Recommendation::title).collect::<Vec<_>>(),
            vec!["Ronin", "Collateral", "Thief"]
        );
        assert!(!recs[0].has_poster());
        assert!(recs[1].has_poster());
        assert!(!recs[2].has_poster());
    }
}
