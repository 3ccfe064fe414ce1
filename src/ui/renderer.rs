//! Frame entry point: state → view model → components.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;

/// Smallest pane that fits the chrome plus one result row.
pub const MIN_ROWS: usize = 12;
pub const MIN_COLS: usize = 30;

/// Prints one frame to stdout.
///
/// Zellij hands the plugin a cleared frame on every render, so nothing is
/// erased first. Panes below [`MIN_ROWS`] x [`MIN_COLS`] get a one-line hint
/// instead of a clipped layout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    if rows < MIN_ROWS || cols < MIN_COLS {
        print!("{}", Theme::fg(&state.theme.colors.text_dim));
        print_centered((rows + 1) / 2, "pane too small", cols);
        print!("{}", Theme::reset());
        return;
    }

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
