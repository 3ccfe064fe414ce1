//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core widget logic, sitting between the plugin
//! runtime (main.rs) and the domain/api layers. It never calls the host: every
//! side effect leaves as an [`Action`], and every completion comes back as an
//! [`Event`].
//!
//! # Architecture
//!
//! ```text
//! Keys → Debouncer → committed query → RequestCoordinator → Fetch action
//!                                                              ↓
//! ResultSet ← dedup ← settle(generation) ←──────────── ApiResponse event
//!     ↓
//! Highlight → Select / Like / Dislike / FindSimilar → Fetch action
//!                                                        ↓
//! DialogController / NoticeBoard ←────────────────── ApiResponse event
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Trailing-edge scheduler for query input
//! - [`requests`]: Search generation tracking and stale response rejection
//! - [`navigation`]: Highlight state machine over the result set
//! - [`dialog`]: Mutually exclusive details/recommendations modal
//! - [`feedback`]: Like/dislike dispatch
//! - [`notice`]: Transient acknowledgement and error line
//! - [`modes`]: Selection binding for Enter
//! - [`handler`]: Event processing and state transition coordinator
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod debounce;
pub mod dialog;
pub mod feedback;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod notice;
pub mod requests;
pub mod state;

pub use actions::Action;
pub use dialog::ModalState;
pub use handler::{handle_event, Event};
pub use modes::SelectionBinding;
pub use notice::{Notice, NoticeKind};
pub use state::AppState;
