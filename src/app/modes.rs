//! Selection binding for the Enter key.
//!
//! The same widget core serves two front ends that differ only in what a
//! selection does:
//! - **Details**: open the details dialog for the highlighted movie
//! - **Autocomplete**: write the highlighted title back into the query, close
//!   the result list and search for the title once the debounce settles
//!
//! # Example
//!
//! ```rust
//! use marquee::app::modes::SelectionBinding;
//!
//! let binding: SelectionBinding = "autocomplete".parse().unwrap();
//! assert_eq!(binding, SelectionBinding::Autocomplete);
//! ```

use crate::domain::MarqueeError;
use std::fmt;
use std::str::FromStr;

/// What Enter does with the highlighted movie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionBinding {
    /// Opens the details dialog; the result list stays.
    #[default]
    Details,

    /// Commits the title to the query and clears the result list.
    ///
    /// Terminal for the interaction cycle: no new search is issued for the
    /// written-back title.
    Autocomplete,
}

impl FromStr for SelectionBinding {
    type Err = MarqueeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "details" => Ok(Self::Details),
            "autocomplete" => Ok(Self::Autocomplete),
            other => Err(MarqueeError::Config(format!(
                "unknown on_select binding `{other}` (expected `details` or `autocomplete`)"
            ))),
        }
    }
}

impl fmt::Display for SelectionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Details => f.write_str("details"),
            Self::Autocomplete => f.write_str("autocomplete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Details ".parse::<SelectionBinding>().unwrap(), SelectionBinding::Details);
        assert_eq!("AUTOCOMPLETE".parse::<SelectionBinding>().unwrap(), SelectionBinding::Autocomplete);
    }

    #[test]
    fn rejects_unknown_bindings() {
        let err = "navigate".parse::<SelectionBinding>().unwrap_err();
        assert!(matches!(err, MarqueeError::Config(_)));
    }
}
