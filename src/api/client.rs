//! Endpoint construction for the movie discovery service.
//!
//! [`ApiClient`] turns widget operations into transport-neutral [`HttpRequest`]
//! values. The plugin shim hands those to Zellij's `web_request`; tests assert
//! on them directly.

use super::tag::RequestTag;
use crate::domain::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// HTTP verbs used by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A request ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
    /// Round-trips through the transport so the response can be routed.
    pub tag: RequestTag,
}

/// A completed request as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub tag: RequestTag,
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MovieIdBody<'a> {
    movie_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MovieTitleBody<'a> {
    movie_title: &'a str,
}

/// Builds requests against one service base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    details_path: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Creates a client. A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn new(base_url: &str, details_path: &str, auth_token: Option<String>) -> Self {
        let details_path = if details_path.starts_with('/') {
            details_path.to_string()
        } else {
            format!("/{details_path}")
        };

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            details_path,
            auth_token,
        }
    }

    /// `GET /search/title?q=<query>`
    #[must_use]
    pub fn search(&self, generation: u64, query: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/search/title?q={}", self.base_url, urlencoding::encode(query)),
            headers: BTreeMap::new(),
            body: Vec::new(),
            tag: RequestTag::search(generation, query.to_string()),
        }
    }

    /// `GET <details_path>?id=<movie_id>`
    #[must_use]
    pub fn details(&self, movie_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!(
                "{}{}?id={}",
                self.base_url,
                self.details_path,
                urlencoding::encode(movie_id)
            ),
            headers: BTreeMap::new(),
            body: Vec::new(),
            tag: RequestTag::details(movie_id.to_string()),
        }
    }

    /// `POST /api/MakeRecommendation` with `{"movieTitle": title}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body fails to serialize.
    pub fn recommendations(&self, title: &str) -> Result<HttpRequest> {
        let body = serde_json::to_vec(&MovieTitleBody { movie_title: title })?;
        Ok(self.post_json(
            "/api/MakeRecommendation",
            body,
            RequestTag::recommendations(title.to_string()),
        ))
    }

    /// `POST /api/like` with `{"movieId": id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body fails to serialize.
    pub fn like(&self, movie_id: &str) -> Result<HttpRequest> {
        let body = serde_json::to_vec(&MovieIdBody { movie_id })?;
        Ok(self.post_json("/api/like", body, RequestTag::like(movie_id.to_string())))
    }

    /// `POST /api/dislike` with `{"movieId": id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body fails to serialize.
    pub fn dislike(&self, movie_id: &str) -> Result<HttpRequest> {
        let body = serde_json::to_vec(&MovieIdBody { movie_id })?;
        Ok(self.post_json("/api/dislike", body, RequestTag::dislike(movie_id.to_string())))
    }

    /// Identity-bearing JSON POST; attaches the session cookie when configured.
    fn post_json(&self, path: &str, body: Vec<u8>, tag: RequestTag) -> HttpRequest {
        let mut headers = BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        if let Some(token) = &self.auth_token {
            headers.insert("Cookie".to_string(), format!("authToken={token}"));
        }

        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            headers,
            body,
            tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> ApiClient {
        ApiClient::new("http://localhost:8080/", "movie/details", token.map(String::from))
    }

    #[test]
    fn search_encodes_query() {
        let request = client(None).search(7, "amélie & co");

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "http://localhost:8080/search/title?q=am%C3%A9lie%20%26%20co"
        );
        assert!(request.body.is_empty());
        assert!(matches!(request.tag, RequestTag::Search { generation: 7, .. }));
    }

    #[test]
    fn details_uses_configured_path() {
        let request = client(None).details("5f1");
        assert_eq!(request.url, "http://localhost:8080/movie/details?id=5f1");

        let api = ApiClient::new("http://svc", "/api/movie/details", None);
        assert_eq!(api.details("x y").url, "http://svc/api/movie/details?id=x%20y");
    }

    #[test]
    fn identity_requests_carry_cookie_only_when_configured() {
        let with = client(Some("s3cret")).like("5f1").unwrap();
        assert_eq!(with.headers.get("Cookie").map(String::as_str), Some("authToken=s3cret"));
        assert_eq!(with.body, br#"{"movieId":"5f1"}"#.to_vec());

        let without = client(None).dislike("5f1").unwrap();
        assert!(!without.headers.contains_key("Cookie"));
        assert_eq!(
            without.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(without.url, "http://localhost:8080/api/dislike");
    }

    #[test]
    fn recommendation_body_uses_movie_title() {
        let request = client(None).recommendations("Heat").unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:8080/api/MakeRecommendation");
        assert_eq!(request.body, br#"{"movieTitle":"Heat"}"#.to_vec());
    }
}
