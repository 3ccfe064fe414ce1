//! Modal panel renderer for the details and recommendations dialogs.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalView;

/// Left margin of the panel.
const MODAL_MARGIN: usize = 2;

/// Renders the panel title at `row` and its pre-wrapped lines below it,
/// framed on the left with the `modal_border` color.
///
/// # Returns
///
/// The next available row position.
pub fn render_modal(row: usize, modal: &ModalView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(MODAL_MARGIN));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("┃ {}", modal.title);
    print!("{}", " ".repeat(cols.saturating_sub(MODAL_MARGIN + 2 + display_len(&modal.title))));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for line in &modal.lines {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(MODAL_MARGIN));
        print!("{}", Theme::fg(&theme.colors.modal_border));
        print!("┃ ");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", " ".repeat(cols.saturating_sub(MODAL_MARGIN + 2 + display_len(line))));
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}
