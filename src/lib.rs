//! Marquee: an incremental movie search widget for Zellij.
//!
//! Typing in the search bar queries a remote movie discovery service once the
//! user pauses. Results can be walked with the keyboard, opened in a details
//! panel, liked or disliked, or used as the seed for a "find similar" list.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ↓   ↑ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Debounce, request generations                    │
//! │  - Highlight navigation, dialogs, notices           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │
//! │ (ui/)         │   │ (api/)        │
//! │ - Rendering   │   │ - Endpoints   │
//! │ - Theming     │   │ - Tags        │
//! │ - Components  │   │ - Decoding    │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (movies, result sets, errors)               │
//! │  Infrastructure (sandbox paths)                     │
//! │  Observability (OTLP file export)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls Zellij. [`handle_event`] mutates [`AppState`] and
//! returns [`Action`]s (`Fetch`, `ScheduleTimer`, `CloseFocus`) which the shim
//! turns into `web_request`, `set_timeout` and `hide_self`. Time is passed in,
//! so the whole pipeline runs under plain `cargo test`.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/marquee.wasm" {
//!         api_base_url "http://localhost:8080"
//!         details_path "/api/movie/details"
//!         auth_token "eyJhbGciOi..."
//!         on_select "details"
//!         debounce_ms "300"
//!         notice_ttl_ms "3000"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use marquee::{handle_event, initialize, Action, Config, Event};
//! use std::time::{Duration, Instant};
//!
//! let mut state = initialize(&Config::default());
//! let start = Instant::now();
//!
//! for c in "dune".chars() {
//!     handle_event(&mut state, &Event::Char(c), start)?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Timer, start + Duration::from_millis(300))?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, SelectionBinding};
pub use domain::{MarqueeError, Movie, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_DETAILS_PATH: &str = "/movie/details";
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_NOTICE_TTL_MS: u64 = 3000;

/// Plugin configuration parsed from the KDL block Zellij hands to `load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Service root; a trailing slash is ignored. Default: `http://localhost:8080`
    pub api_base_url: String,

    /// Path of the details endpoint. Default: `/movie/details`
    pub details_path: String,

    /// Sent as `Cookie: authToken=<token>` on recommend, like and dislike.
    pub auth_token: Option<String>,

    /// Quiet period before a typed query is sent. Default: 300
    pub debounce_ms: u64,

    /// How long a notice stays on screen. Default: 3000
    pub notice_ttl_ms: u64,

    /// What Enter does with the highlighted movie.
    pub on_select: SelectionBinding,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            details_path: DEFAULT_DETAILS_PATH.to_string(),
            auth_token: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            on_select: SelectionBinding::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values fall back to their defaults; blank strings count as
    /// unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use marquee::{Config, SelectionBinding};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "https://movies.example".to_string());
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    /// map.insert("on_select".to_string(), "autocomplete".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base_url, "https://movies.example");
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.on_select, SelectionBinding::Autocomplete);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let millis = |key: &str, default: u64| {
            text(key).map_or(default, |raw| {
                raw.parse::<u64>().unwrap_or_else(|_| {
                    tracing::warn!(key, value = %raw, default, "invalid duration, using default");
                    default
                })
            })
        };

        let on_select = text("on_select").map_or_else(SelectionBinding::default, |raw| {
            raw.parse::<SelectionBinding>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid on_select, using default");
                SelectionBinding::default()
            })
        });

        Self {
            api_base_url: text("api_base_url").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            details_path: text("details_path").unwrap_or_else(|| DEFAULT_DETAILS_PATH.to_string()),
            auth_token: text("auth_token"),
            debounce_ms: millis("debounce_ms", DEFAULT_DEBOUNCE_MS),
            notice_ttl_ms: millis("notice_ttl_ms", DEFAULT_NOTICE_TTL_MS),
            on_select,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }
}

/// Builds the widget state for a configuration.
///
/// A theme file wins over a theme name; either one failing to load falls back
/// to the default theme with a debug log.
///
/// # Example
///
/// ```rust
/// use marquee::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.query.is_empty());
/// assert!(state.results.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, on_select = %config.on_select, "initializing marquee");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let client = api::ApiClient::new(&config.api_base_url, &config.details_path, config.auth_token.clone());

    AppState::new(client, theme)
        .with_binding(config.on_select)
        .with_debounce(Duration::from_millis(config.debounce_ms))
        .with_notice_ttl(Duration::from_millis(config.notice_ttl_ms))
}
