//! Screen components, each drawn at an explicit row.
//!
//! ```text
//!  1  (blank)
//!  2  header
//!  3  ───────────
//!  4  ┌ search ┐
//!  5  │        │
//!  6  └────────┘
//!  7  TITLE  POSTER     │ modal title  │ (blank)
//!  8… result rows       │ modal lines  │ empty state
//! -3  notice
//! -2  ───────────
//! -1  footer
//! ```
//!
//! The body shows the open modal if there is one, otherwise the table, or the
//! empty state when there are no rows.

mod chrome;
mod empty;
mod modal;
mod notice;
mod search;
mod table;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Draws the whole widget for a `cols` x `rows` pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let row = chrome::render_header(2, &vm.header, theme, cols);
    let row = chrome::render_border(row, theme, cols);
    let body = search::render_search_bar(row, &vm.search_bar, theme, cols);

    match (&vm.modal, &vm.empty_state) {
        (Some(panel), _) => {
            modal::render_modal(body, panel, theme, cols);
        }
        (None, Some(empty)) => empty::render_empty_state(body + 1, empty, theme, cols),
        (None, None) => {
            let first = table::render_table_headers(body, theme);
            table::render_table_rows(first, &vm.display_items, theme, cols);
        }
    }

    let footer_row = rows.saturating_sub(1);
    if let Some(line) = &vm.notice {
        notice::render_notice(footer_row.saturating_sub(2), line, theme, cols);
    }
    chrome::render_border(footer_row.saturating_sub(1), theme, cols);
    chrome::render_footer(footer_row, &vm.footer, theme, cols);
}
