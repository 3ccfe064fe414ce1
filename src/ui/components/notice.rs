//! Notice line renderer.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeLine;

pub fn render_notice(row: usize, notice: &NoticeLine, theme: &Theme, cols: usize) -> usize {
    let color = if notice.is_error {
        &theme.colors.notice_error_fg
    } else {
        &theme.colors.notice_ack_fg
    };
    let text: String = notice.text.chars().take(cols.saturating_sub(2)).collect();

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("  {text}");
    print!("{}", " ".repeat(cols.saturating_sub(2 + display_len(&text))));
    print!("{}", Theme::reset());
    row + 1
}
