//! Zellij plugin wrapper and entry point.
//!
//! This is the only place that talks to the Zellij host. Host events are
//! mapped to library [`Event`]s, passed through `handle_event`, and the
//! returned [`Action`]s are executed:
//!
//! - `Action::Fetch` → `web_request` with the request tag in the context map
//! - `Action::ScheduleTimer` → `set_timeout`
//! - `Action::CloseFocus` → `hide_self`
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: `Key`, `Mouse`, `Timer`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Permissions**: Request `WebAccess`; a denial shows an error notice
//! 4. **Update**: Map event, delegate to the library, run actions
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! - Printable characters: Type into the search bar
//! - `Backspace`: Delete the last character
//! - `Ctrl+u`: Clear the query and results
//! - `Down`/`Ctrl+n`: Move down
//! - `Up`/`Ctrl+p`: Move up
//! - `Enter`: Open details (or autocomplete, per `on_select`)
//! - `Ctrl+r`: Find similar movies
//! - `Ctrl+l`: Like
//! - `Ctrl+d`: Dislike
//! - `Esc`: Close the dialog, then clear results
//! - `Ctrl+c`: Hide the plugin
//!
//! Hovering the mouse over a result highlights it.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use marquee::api::{HttpMethod, HttpRequest, HttpResponse, RequestTag};
#[cfg(target_family = "wasm")]
use marquee::{handle_event, Action, Config, Event};

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("marquee is a Zellij plugin; build it with `cargo build --target wasm32-wasip1`");
}

/// Plugin state wrapper.
#[cfg(target_family = "wasm")]
struct State {
    app: marquee::AppState,

    /// Pane height from the last render, for mapping mouse lines to rows.
    rows: usize,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: marquee::initialize(&Config::default()),
            rows: 0,
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        marquee::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_base_url = %config.api_base_url, on_select = %config.on_select, "parsed configuration");
        self.app = marquee::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let Some(our_event) = self.map_event(event) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event, std::time::Instant::now()) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        marquee::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_event(&self, event: zellij_tile::prelude::Event) -> Option<Event> {
        match event {
            zellij_tile::prelude::Event::Key(key) => Self::map_key_event(&key),
            zellij_tile::prelude::Event::Mouse(Mouse::Hover(line, _col)) => {
                let line = usize::try_from(line).ok()?;
                self.app.result_index_at(line, self.rows).map(Event::HighlightAt)
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Some(Event::Timer),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_result(status, body, &context)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Some(Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            }),
            _ => None,
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('u') => Some(Event::ClearQuery),
                BareKey::Char('r') => Some(Event::FindSimilar),
                BareKey::Char('l') => Some(Event::Like),
                BareKey::Char('d') => Some(Event::Dislike),
                BareKey::Char('c') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Select,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        match RequestTag::from_context(context) {
            Ok(tag) => Some(Event::ApiResponse(HttpResponse { tag, status, body })),
            Err(e) => {
                tracing::debug!(error = %e, status = status, "web response without a marquee tag");
                None
            }
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleTimer(delay) => {
                tracing::trace!(?delay, "scheduling timer");
                set_timeout(delay.as_secs_f64());
            }
            Action::Fetch(request) => Self::send(request),
        }
    }

    fn send(request: HttpRequest) {
        let context = match request.tag.to_context() {
            Ok(context) => context,
            Err(e) => {
                tracing::warn!(error = %e, kind = request.tag.kind(), "failed to encode request tag");
                return;
            }
        };
        let verb = match request.method {
            HttpMethod::Get => HttpVerb::Get,
            HttpMethod::Post => HttpVerb::Post,
        };

        tracing::debug!(kind = request.tag.kind(), url = %request.url, "sending web request");
        web_request(request.url, verb, request.headers, request.body, context);
    }
}
