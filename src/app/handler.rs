//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes key input,
//! timer expiries and web responses, translating them into state changes and
//! action sequences. It serves as the primary control flow coordinator for the
//! widget.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its components
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Editing**: `Char`, `Backspace`, `ClearQuery`
//! - **Navigation**: `KeyDown`, `KeyUp`, `HighlightAt`, `Select`, `Escape`
//! - **Interaction**: `Like`, `Dislike`, `FindSimilar`
//! - **System**: `Timer`, `PermissionsResult`, `CloseFocus`
//! - **Transport**: `ApiResponse` with the tag of the request it answers
//!
//! # Example
//!
//! ```rust
//! use marquee::api::ApiClient;
//! use marquee::app::{handle_event, Action, AppState, Event};
//! use marquee::ui::Theme;
//! use std::time::Instant;
//!
//! let client = ApiClient::new("http://localhost:8080", "/movie/details", None);
//! let mut state = AppState::new(client, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Char('h'), Instant::now())?;
//! assert!(render);
//! assert!(matches!(actions[..], [Action::ScheduleTimer(_)]));
//! # Ok::<(), marquee::MarqueeError>(())
//! ```

use super::debounce::TimerOutcome;
use super::feedback::Reaction;
use super::modes::SelectionBinding;
use super::notice::NoticeKind;
use super::requests::Dispatch;
use crate::api::{decode, HttpResponse, RequestTag};
use crate::app::{Action, AppState};
use crate::domain::{MarqueeError, Result};
use std::time::Instant;

/// Events triggered by user input, host timers or web responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Empties the query and the result list at once.
    ClearQuery,

    /// Moves the highlight down (clamped).
    KeyDown,
    /// Moves the highlight up (clamped).
    KeyUp,
    /// Points the highlight at a row (mouse hover).
    HighlightAt(usize),
    /// Acts on the highlighted movie according to the selection binding.
    Select,
    /// Closes the open dialog, or clears the results when none is open.
    Escape,

    Like,
    Dislike,
    /// Requests movies similar to the highlighted one.
    FindSimilar,

    /// Hides the plugin pane.
    CloseFocus,

    /// A host timer expired. The host does not say which one.
    Timer,

    /// Outcome of the web access permission request.
    PermissionsResult {
        granted: bool,
    },

    /// A web request completed.
    ApiResponse(HttpResponse),
}

impl Event {
    /// Short name for span fields; response bodies stay out of traces.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Char(_) => "char",
            Self::Backspace => "backspace",
            Self::ClearQuery => "clear_query",
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
            Self::HighlightAt(_) => "highlight_at",
            Self::Select => "select",
            Self::Escape => "escape",
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::FindSimilar => "find_similar",
            Self::CloseFocus => "close_focus",
            Self::Timer => "timer",
            Self::PermissionsResult { .. } => "permissions_result",
            Self::ApiResponse(_) => "api_response",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Fetch failures never surface here: they are converted into notices at the
/// operation that observed them. Stale search responses are dropped without
/// a notice.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
/// * `now` - Time the event was observed; drives debounce and notice expiry
///
/// # Returns
///
/// Whether the UI needs re-rendering, and the actions to execute in sequence.
///
/// # Errors
///
/// Returns an error if an outgoing request cannot be built.
pub fn handle_event(state: &mut AppState, event: &Event, now: Instant) -> Result<(bool, Vec<Action>)> {
    let span = tracing::debug_span!("handle_event", event_type = event.name());
    if let Event::ApiResponse(response) = event {
        if let Some(trace_context) = response.tag.trace_context() {
            trace_context.adopt(&span);
        }
    }
    let _span = span.entered();

    match event {
        Event::Char(c) => {
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "query updated");
            Ok((true, schedule_commit(state, now)))
        }
        Event::Backspace => {
            if state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, schedule_commit(state, now)))
        }
        Event::ClearQuery => {
            let had_query = !state.query.is_empty();
            state.query.clear();
            let was_pending = cancel_search(state);
            let cleared = state.clear_results();
            Ok((had_query || was_pending || cleared, vec![]))
        }
        Event::KeyDown => {
            if state.dialog.is_open() {
                return Ok((false, vec![]));
            }
            Ok((state.highlight.down(state.results.len()), vec![]))
        }
        Event::KeyUp => {
            if state.dialog.is_open() {
                return Ok((false, vec![]));
            }
            Ok((state.highlight.up(state.results.len()), vec![]))
        }
        Event::HighlightAt(index) => {
            if state.dialog.is_open() {
                return Ok((false, vec![]));
            }
            Ok((state.highlight.highlight_at(*index, state.results.len()), vec![]))
        }
        Event::Select => select(state, now),
        Event::Escape => {
            if state.dialog.close() {
                tracing::debug!("dialog dismissed");
                return Ok((true, vec![]));
            }

            let was_pending = cancel_search(state);
            let cleared = state.clear_results();
            tracing::debug!(cleared = cleared, "results dismissed");
            Ok((cleared || was_pending, vec![]))
        }
        Event::Like => react(state, Reaction::Like),
        Event::Dislike => react(state, Reaction::Dislike),
        Event::FindSimilar => {
            let Some(movie) = state.highlighted_movie() else {
                tracing::debug!("no movie highlighted");
                return Ok((false, vec![]));
            };
            let request = state.dialog.open_recommendations(&state.client, &movie.title)?;
            Ok((false, vec![Action::Fetch(request)]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Timer => Ok(on_timer(state, now)),
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("web access granted");
                return Ok((false, vec![]));
            }
            cancel_search(state);
            let ttl = state.notices.post(
                NoticeKind::Error,
                "Web access was denied; searches cannot run",
                now,
            );
            Ok((true, vec![Action::ScheduleTimer(ttl)]))
        }
        Event::ApiResponse(response) => Ok(on_response(state, response, now)),
    }
}

/// Feeds the current query to the debouncer.
fn schedule_commit(state: &mut AppState, now: Instant) -> Vec<Action> {
    state
        .debouncer
        .update(state.query.clone(), now)
        .map(Action::ScheduleTimer)
        .into_iter()
        .collect()
}

/// Drops the pending commit and supersedes the in-flight search.
///
/// Returns `true` if either existed.
fn cancel_search(state: &mut AppState) -> bool {
    let was_pending = state.search_pending();
    state.debouncer.cancel();
    state.requests.clear();
    was_pending
}

fn select(state: &mut AppState, now: Instant) -> Result<(bool, Vec<Action>)> {
    let Some(movie) = state.highlighted_movie().cloned() else {
        tracing::debug!("no movie highlighted");
        return Ok((false, vec![]));
    };

    tracing::debug!(movie_id = %movie.id, title = %movie.title, binding = %state.binding, "movie selected");

    match state.binding {
        SelectionBinding::Details => {
            let request = state.dialog.open_details(&state.client, &movie.id);
            Ok((false, vec![Action::Fetch(request)]))
        }
        SelectionBinding::Autocomplete => {
            state.query = movie.title;
            state.requests.clear();
            state.clear_results();
            Ok((true, schedule_commit(state, now)))
        }
    }
}

fn react(state: &AppState, reaction: Reaction) -> Result<(bool, Vec<Action>)> {
    let Some(movie) = state.highlighted_movie() else {
        tracing::debug!(reaction = ?reaction, "no movie highlighted");
        return Ok((false, vec![]));
    };
    let request = reaction.request(&state.client, &movie.id)?;
    Ok((false, vec![Action::Fetch(request)]))
}

fn on_timer(state: &mut AppState, now: Instant) -> (bool, Vec<Action>) {
    let mut render = state.notices.expire(now);
    let mut actions = vec![];

    match state.debouncer.on_timer(now) {
        TimerOutcome::Commit(query) => {
            tracing::debug!(query = %query, "query committed");
            match state.requests.dispatch(&query) {
                Dispatch::Cleared => {
                    state.clear_results();
                }
                Dispatch::Issue { generation, query } => {
                    actions.push(Action::Fetch(state.client.search(generation, &query)));
                }
            }
            render = true;
        }
        TimerOutcome::Rearm(remaining) => actions.push(Action::ScheduleTimer(remaining)),
        TimerOutcome::Waiting | TimerOutcome::Idle => {}
    }

    (render, actions)
}

fn on_response(state: &mut AppState, response: &HttpResponse, now: Instant) -> (bool, Vec<Action>) {
    let HttpResponse { tag, status, body } = response;
    let status = *status;

    tracing::debug!(kind = tag.kind(), status = status, bytes = body.len(), "response received");

    let failure = match tag {
        RequestTag::Search { generation, query, .. } => {
            if state.requests.settle(*generation).is_stale() {
                return (false, vec![]);
            }
            match decode::decode_search(status, body) {
                Ok(movies) => {
                    tracing::debug!(query = %query, "search results accepted");
                    state.replace_results(movies);
                    None
                }
                Err(e) => {
                    state.clear_results();
                    Some((e, "fetch search results"))
                }
            }
        }
        RequestTag::Details { .. } => state
            .dialog
            .apply_details(decode::decode_details(status, body))
            .err()
            .map(|e| (e, "load movie details")),
        RequestTag::Recommendations { title, .. } => state
            .dialog
            .apply_recommendations(title.clone(), decode::decode_recommendations(status, body))
            .err()
            .map(|e| (e, "load similar movies")),
        RequestTag::Like { .. } => return post_reaction(state, Reaction::Like, status, now),
        RequestTag::Dislike { .. } => return post_reaction(state, Reaction::Dislike, status, now),
    };

    match failure {
        Some((error, operation)) => (true, vec![post_error(state, &error, operation, now)]),
        None => (true, vec![]),
    }
}

fn post_reaction(state: &mut AppState, reaction: Reaction, status: u16, now: Instant) -> (bool, Vec<Action>) {
    let (kind, text) = reaction.outcome(&decode::decode_ack(status));
    let ttl = state.notices.post(kind, text, now);
    (true, vec![Action::ScheduleTimer(ttl)])
}

fn post_error(state: &mut AppState, error: &MarqueeError, operation: &str, now: Instant) -> Action {
    tracing::debug!(error = %error, operation = operation, "operation failed");
    let ttl = state.notices.post(NoticeKind::Error, error.user_message(operation), now);
    Action::ScheduleTimer(ttl)
}
