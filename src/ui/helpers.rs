//! Low-level drawing helpers shared by the components.
//!
//! All measurements are in characters, never bytes, so accented titles line
//! up.
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::helpers::wrap_text;
//!
//! let lines = wrap_text("A group of professional bank robbers", 16);
//! assert_eq!(lines, vec!["A group of", "professional", "bank robbers"]);
//! ```

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-based `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the character ranges in `ranges` drawn in the match
/// colors, returning to `text_normal` after each range.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Selected rows print plain so the selection colors win.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if is_selected {
        print!("{text}");
    } else {
        print!("{}", highlight_spans(text, ranges, theme));
    }
}

fn highlight_spans(text: &str, ranges: &[(usize, usize)], theme: &Theme) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let on = format!(
        "{}{}",
        Theme::fg(&theme.colors.match_highlight_fg),
        Theme::bg(&theme.colors.match_highlight_bg)
    );
    let off = format!("{}{}", Theme::reset(), Theme::fg(&theme.colors.text_normal));

    let mut out = String::with_capacity(text.len() + ranges.len() * (on.len() + off.len()));
    let mut ranges = ranges.iter().peekable();
    for (i, c) in text.chars().enumerate() {
        while ranges.next_if(|&&(_, end)| end <= i).is_some() {}
        match ranges.peek() {
            Some(&&(start, _)) if start == i => {
                out.push_str(&on);
                out.push(c);
            }
            _ => out.push(c),
        }
        if ranges.peek().is_some_and(|&&(start, end)| start <= i && i + 1 == end) {
            out.push_str(&off);
        }
    }
    out
}

/// Wraps `text` greedily at word boundaries so no line exceeds `width`
/// characters. Words longer than `width` are split.
///
/// Text that already fits is returned as a single line, whitespace intact.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > width && line_len > 0 {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Prints `text` centered in a `cols`-wide line starting at `row`, padding
/// both sides so background colors span the full width. Text wider than the
/// line is cut at the right edge.
///
/// Styling is left to the caller.
pub fn print_centered(row: usize, text: &str, cols: usize) {
    let text: String = text.chars().take(cols).collect();
    let len = display_len(&text);
    let left = (cols - len) / 2;

    position_cursor(row, 1);
    print!("{:left$}{text}{:right$}", "", "", right = cols - len - left);
}

/// Number of characters `text` occupies on screen (one cell per char).
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ranges_are_wrapped_in_highlight_colors() {
        let theme = Theme::default();
        let on = format!(
            "{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg)
        );
        let off = format!("{}{}", Theme::reset(), Theme::fg(&theme.colors.text_normal));

        assert_eq!(highlight_spans("Heat", &[(0, 2)], &theme), format!("{on}He{off}at"));
        assert_eq!(
            highlight_spans("Amélie", &[(2, 3), (5, 6)], &theme),
            format!("Am{on}é{off}li{on}e{off}")
        );
        assert_eq!(highlight_spans("Heat", &[(2, 2), (9, 12)], &theme), "Heat");
    }

    #[test]
    fn short_text_is_kept_verbatim() {
        assert_eq!(wrap_text(" 1. Ronin", 40), vec![" 1. Ronin"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(lines.iter().all(|l| display_len(l) <= 9));
    }

    #[test]
    fn splits_overlong_words() {
        let lines = wrap_text("ab supercalifragilistic cd", 8);
        assert_eq!(lines, vec!["ab", "supercal", "ifragili", "stic cd"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(display_len("Amélie"), 6);
        assert_eq!(wrap_text("Amélie Poulain", 6), vec!["Amélie", "Poulai", "n"]);
    }
}
