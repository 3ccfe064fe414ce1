//! Placeholder shown where the result table would be.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Message on `row`, dimmed subtitle on the line below.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(row, &empty.message, cols);

    print!("{}{}{}", Theme::reset(), Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(row + 1, &empty.subtitle, cols);
    print!("{}", Theme::reset());
}
