//! Display-ready snapshot of one frame.
//!
//! Built by `AppState::compute_viewmodel` for a given pane size: the result
//! window is already cut, titles truncated, match ranges computed and modal
//! text wrapped. Components only print what is here.
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         title: "Heat".to_string(),
//!         poster: "yes".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 2)],
//!     }],
//!     selected_index: Some(0),
//!     header: HeaderInfo { title: " Marquee (1) ".to_string() },
//!     footer: FooterInfo { keybindings: "Ctrl+c: quit".to_string() },
//!     empty_state: None,
//!     search_bar: SearchBarInfo { query: "he".to_string(), pending: false },
//!     modal: None,
//!     notice: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Everything one frame shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Result rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Highlighted row relative to the visible window.
    pub selected_index: Option<usize>,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Message shown in place of the table when there are no rows.
    pub empty_state: Option<EmptyState>,

    /// The search input is always visible.
    pub search_bar: SearchBarInfo,

    /// Modal panel replacing the table while a dialog is open.
    pub modal: Option<ModalView>,

    pub notice: Option<NoticeLine>,
}

/// Display information for a single search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,

    /// Poster column text.
    pub poster: String,

    pub is_selected: bool,

    /// Character ranges to highlight (for fuzzy matches against the query).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current context.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No movies found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,

    /// A search is debouncing or in flight.
    pub pending: bool,
}

/// Pre-wrapped contents of the open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeLine {
    pub text: String,
    pub is_error: bool,
}
