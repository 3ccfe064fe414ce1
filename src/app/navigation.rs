//! Keyboard highlight over the current result set.
//!
//! The highlight is the only memory the navigation state machine has; the
//! result count `n` is always passed in by the caller, so the two can never
//! disagree about bounds.
//!
//! ```text
//! Down: none -> 0       i -> min(n-1, i+1)
//! Up:   none -> n-1     i -> max(0, i-1)
//! n = 0: both are no-ops
//! ```

/// Highlighted position within the result set, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    index: Option<usize>,
}

impl Highlight {
    #[must_use]
    pub const fn none() -> Self {
        Self { index: None }
    }

    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.index
    }

    /// Moves the highlight down, clamping at the last entry.
    ///
    /// Returns `true` when the highlight changed.
    pub fn down(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let next = self.index.map_or(0, |i| (i + 1).min(len - 1));
        self.set(Some(next))
    }

    /// Moves the highlight up, clamping at the first entry.
    ///
    /// Returns `true` when the highlight changed.
    pub fn up(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let next = self.index.map_or(len - 1, |i| i.saturating_sub(1));
        self.set(Some(next))
    }

    /// Points the highlight directly at `index` (mouse hover).
    ///
    /// Out-of-range indices are ignored.
    pub fn highlight_at(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.set(Some(index))
    }

    /// Clears the highlight; required whenever the result set is replaced.
    pub fn reset(&mut self) -> bool {
        self.set(None)
    }

    fn set(&mut self, index: Option<usize>) -> bool {
        let changed = self.index != index;
        if changed {
            tracing::trace!(from = ?self.index, to = ?index, "highlight moved");
            self.index = index;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_sequence_over_three_results() {
        let mut highlight = Highlight::none();

        highlight.down(3);
        assert_eq!(highlight.current(), Some(0));
        highlight.down(3);
        assert_eq!(highlight.current(), Some(1));
        highlight.up(3);
        assert_eq!(highlight.current(), Some(0));
        assert!(!highlight.up(3));
        assert_eq!(highlight.current(), Some(0));
    }

    #[test]
    fn up_from_none_goes_to_last() {
        let mut highlight = Highlight::none();
        highlight.up(4);
        assert_eq!(highlight.current(), Some(3));
    }

    #[test]
    fn down_clamps_at_end() {
        let mut highlight = Highlight::none();
        highlight.highlight_at(2, 3);
        assert!(!highlight.down(3));
        assert_eq!(highlight.current(), Some(2));
    }

    #[test]
    fn empty_result_set_is_a_no_op() {
        let mut highlight = Highlight::none();
        assert!(!highlight.down(0));
        assert!(!highlight.up(0));
        assert_eq!(highlight.current(), None);
    }

    #[test]
    fn highlight_at_ignores_out_of_range() {
        let mut highlight = Highlight::none();
        assert!(!highlight.highlight_at(5, 3));
        assert!(highlight.highlight_at(1, 3));
        assert_eq!(highlight.current(), Some(1));
        assert!(highlight.reset());
        assert_eq!(highlight.current(), None);
    }
}
