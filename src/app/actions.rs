//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler after processing user input, timer expiries or web
//! responses. Actions bridge pure state transformations and the Zellij host
//! calls that perform them.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The plugin runtime executes
//! these actions in sequence.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleTimer(Duration::from_millis(300))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::api::HttpRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Arms a host timer that delivers `Event::Timer` after the delay.
    ///
    /// Host timers cannot be cancelled; consumers tolerate expiries that
    /// arrive for someone else's timer.
    ScheduleTimer(Duration),

    /// Issues a web request. The response comes back as `Event::ApiResponse`
    /// carrying the request's tag.
    Fetch(HttpRequest),
}
