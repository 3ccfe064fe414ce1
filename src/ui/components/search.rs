//! Search input box.
//!
//! ```text
//!      ┌──────────────────────────────┐
//!      │ Search: heat             ... │
//!      └──────────────────────────────┘
//! ```
//!
//! The trailing `...` shows while a search is debouncing or in flight. A query
//! longer than the box keeps its end visible.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const MARGIN: usize = 5;
const LABEL: &str = " Search: ";
const PENDING_MARKER: &str = " ... ";

/// Draws the three-line box at `row` and returns the row after it.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(MARGIN * 2 + 2);
    let frame = Theme::fg(&theme.colors.search_bar_border);

    let edge = |row: usize, left: char, right: char| {
        position_cursor(row, MARGIN + 1);
        print!("{frame}{left}{}{right}{}", "─".repeat(inner), Theme::reset());
    };

    edge(row, '┌', '┐');

    let marker = if search.pending { PENDING_MARKER } else { "" };
    let shown = query_tail(&search.query, inner.saturating_sub(LABEL.len() + marker.len()));
    let fill = inner.saturating_sub(LABEL.len() + display_len(&shown) + marker.len());

    position_cursor(row + 1, MARGIN + 1);
    print!("{frame}│{}{LABEL}{shown}", Theme::fg(&theme.colors.text_normal));
    print!("{:fill$}{}{marker}{frame}│{}", "", Theme::fg(&theme.colors.text_dim), Theme::reset());

    edge(row + 2, '└', '┘');
    row + 3
}

/// The last `room` characters of `query`.
fn query_tail(query: &str, room: usize) -> String {
    let skip = display_len(query).saturating_sub(room);
    query.chars().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_queries_keep_their_end() {
        assert_eq!(query_tail("the good the bad", 7), "the bad");
        assert_eq!(query_tail("heat", 10), "heat");
        assert_eq!(query_tail("amélie", 3), "lie");
    }
}
