//! Color themes and the ANSI escapes built from them.
//!
//! Four Catppuccin flavours are compiled in; anything else comes from a TOML
//! file with the same shape:
//!
//! ```toml
//! name = "dune"
//!
//! [colors]
//! header_fg = "#e6c384"
//! selection_fg = "#1f1f28"
//! selection_bg = "#e6c384"
//! text_normal = "#dcd7ba"
//! text_dim = "#727169"
//! border = "#54546d"
//! search_bar_border = "#e6c384"
//! match_highlight_fg = "#1f1f28"
//! match_highlight_bg = "#98bb6c"
//! empty_state_fg = "#7e9cd8"
//! notice_ack_fg = "#98bb6c"
//! notice_error_fg = "#e46876"
//! modal_border = "#957fb8"
//! ```
//!
//! `header_bg` is optional. Colors that fail to parse render as white.

use crate::domain::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

const BUILTIN_THEMES: [(&str, &str); 4] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
    ("catppuccin-macchiato", include_str!("../../themes/catppuccin-macchiato.toml")),
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each part of the screen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Highlighted result row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer hints, poster column, pending marker.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    /// Characters of a title matched by the query.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// "Movie liked" and friends.
    pub notice_ack_fg: String,
    pub notice_error_fg: String,

    /// Left rule of the details/recommendations panel.
    pub modal_border: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_THEMES.iter().map(|(name, _)| *name)
    }

    /// Looks up a compiled-in theme.
    ///
    /// ```rust
    /// use marquee::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, source) = BUILTIN_THEMES.iter().find(|(builtin, _)| *builtin == name)?;
        toml::from_str(source).ok()
    }

    /// Loads a theme from a TOML file. A leading `~` resolves against the
    /// sandbox home mount.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = crate::infrastructure::expand_tilde(&path.as_ref().to_string_lossy());

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| MarqueeError::Theme(format!("cannot read {path}: {e}")))?;

        toml::from_str(&contents).map_err(|e| MarqueeError::Theme(format!("invalid theme {path}: {e}")))
    }

    /// 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use marquee::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = parse_hex(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = parse_hex(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Clears every attribute and color.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in theme does not parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

const WHITE: (u8, u8, u8) = (255, 255, 255);

/// `#rrggbb` or `rrggbb` to components; anything else is white.
fn parse_hex(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return WHITE;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => (r, g, b),
        _ => WHITE,
    }
}
