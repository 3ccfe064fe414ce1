//! Result list with TITLE and POSTER columns.
//!
//! The highlighted row is drawn in the selection colors behind a `>` marker;
//! other rows show query matches in the match colors.

use crate::ui::helpers::{display_len, position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the TITLE column including its gutter.
const TITLE_COLUMN_WIDTH: usize = 48;

const GUTTER: usize = 2;

pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!(
        "{}{}{:gutter$}{:<title$}POSTER{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        "",
        "TITLE",
        Theme::reset(),
        gutter = GUTTER,
        title = TITLE_COLUMN_WIDTH - GUTTER,
    );
    row + 1
}

/// One line per item from `row` down; returns the row after the last.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    for (offset, item) in items.iter().enumerate() {
        render_row(row + offset, item, theme, cols);
    }
    row + items.len()
}

/// Pads to the full width so the selection background spans the line.
fn render_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    let (marker, poster_color) = if item.is_selected {
        print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
        ("> ", None)
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        ("  ", Some(&theme.colors.text_dim))
    };
    print!("{marker}");
    render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);

    let used = GUTTER + display_len(&item.title);
    let title_fill = TITLE_COLUMN_WIDTH.saturating_sub(used);
    print!("{:title_fill$}", "");

    if let Some(color) = poster_color {
        print!("{}", Theme::fg(color));
    }
    let line_fill = cols.saturating_sub(used + title_fill + display_len(&item.poster));
    print!("{}{:line_fill$}{}", item.poster, "", Theme::reset());
}
