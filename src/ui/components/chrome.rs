//! Fixed frame around the body: title bar, separators and key hints.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo};

/// Bold title, centered, on the optional header background.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print_centered(row, &header.title, cols);
    print!("{}", Theme::reset());
    row + 1
}

pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(row, &footer.keybindings, cols);
    print!("{}", Theme::reset());
    row + 1
}

/// Full-width horizontal rule.
pub fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(cols), Theme::reset());
    row + 1
}
