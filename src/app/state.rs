//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the widget.
//! It owns the query text, the current result set with its highlight, and the
//! pipeline components that coordinate asynchronous work: the debouncer, the
//! request coordinator, the dialog controller and the notice board.
//!
//! # State Components
//!
//! - **Query**: Latest typed text; only a settled query reaches the coordinator
//! - **Results**: De-duplicated result set, replaced wholesale per accepted response
//! - **Highlight**: Keyboard position within the results, reset on every replacement
//! - **Dialog**: Mutually exclusive details/recommendations modal
//! - **Notices**: Transient acknowledgement or error line
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing, fuzzy match highlighting, modal text
//! wrapping and responsive layout adjustments based on terminal dimensions.
//!
//! # Example
//!
//! ```rust
//! use marquee::api::ApiClient;
//! use marquee::app::AppState;
//! use marquee::ui::Theme;
//!
//! let client = ApiClient::new("http://localhost:8080", "/movie/details", None);
//! let state = AppState::new(client, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.display_items.is_empty());
//! ```

use super::debounce::Debouncer;
use super::dialog::{DialogController, ModalState};
use super::modes::SelectionBinding;
use super::navigation::Highlight;
use super::notice::{NoticeBoard, NoticeKind};
use super::requests::RequestCoordinator;
use crate::api::ApiClient;
use crate::domain::{Movie, MovieDetails, Recommendations, ResultSet};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, ModalView, NoticeLine, SearchBarInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::ops::Range;
use std::time::Duration;

/// Default quiet period before a typed query is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default lifetime of a notice.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(3000);

const MAX_TITLE_CHARS: usize = 46;

/// Rows taken by everything except the table body: blank, header, border,
/// search box (3), column headers, notice, border, footer, trailing blank.
const CHROME_ROWS: usize = 11;

/// 0-based pane line of the first result row.
const FIRST_RESULT_LINE: usize = 7;

/// Central widget state container.
///
/// Mutated only by the event handler; Zellij delivers events one at a time on
/// the plugin thread, so no interior synchronization is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest typed query text.
    pub query: String,

    pub results: ResultSet,

    pub highlight: Highlight,

    pub debouncer: Debouncer,

    pub requests: RequestCoordinator,

    pub dialog: DialogController,

    pub notices: NoticeBoard,

    /// Endpoint builder for every outgoing request.
    pub client: ApiClient,

    /// What Enter does with the highlighted movie.
    pub binding: SelectionBinding,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a widget state with default timings and the `details` binding.
    ///
    /// # Parameters
    ///
    /// * `client` - Endpoint builder for the discovery service
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(client: ApiClient, theme: Theme) -> Self {
        Self {
            query: String::new(),
            results: ResultSet::default(),
            highlight: Highlight::none(),
            debouncer: Debouncer::new(DEFAULT_DEBOUNCE),
            requests: RequestCoordinator::new(),
            dialog: DialogController::new(),
            notices: NoticeBoard::new(DEFAULT_NOTICE_TTL),
            client,
            binding: SelectionBinding::default(),
            theme,
        }
    }

    #[must_use]
    pub fn with_binding(mut self, binding: SelectionBinding) -> Self {
        self.binding = binding;
        self
    }

    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    #[must_use]
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notices = NoticeBoard::new(ttl);
        self
    }

    /// The movie under the highlight, if any.
    #[must_use]
    pub fn highlighted_movie(&self) -> Option<&Movie> {
        self.highlight.current().and_then(|i| self.results.get(i))
    }

    /// Replaces the result set with a de-duplicated copy of `raw` and resets
    /// the highlight.
    pub fn replace_results(&mut self, raw: Vec<Movie>) {
        let raw_count = raw.len();
        self.results = ResultSet::from_raw(raw);
        self.highlight.reset();

        tracing::debug!(
            raw_count = raw_count,
            result_count = self.results.len(),
            "result set replaced"
        );
    }

    /// Empties the result set and highlight. Returns `true` if anything changed.
    pub fn clear_results(&mut self) -> bool {
        let had_results = !self.results.is_empty();
        self.results = ResultSet::default();
        let had_highlight = self.highlight.reset();
        had_results || had_highlight
    }

    /// A search is debouncing or awaiting its response.
    #[must_use]
    pub const fn search_pending(&self) -> bool {
        self.debouncer.is_pending() || self.requests.in_flight().is_some()
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around the highlight (or start at the top without one)
    /// 3. Adjust window if near the end to maximize visible items
    /// 4. Compute relative highlight index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = rows.saturating_sub(CHROME_ROWS);

        let modal = self.compute_modal(cols, available_rows);

        let (display_items, selected_index) = if self.results.is_empty() {
            (vec![], None)
        } else {
            self.compute_window(available_rows)
        };

        let empty_state = if display_items.is_empty() && modal.is_none() {
            Some(self.compute_empty_state())
        } else {
            None
        };

        UIViewModel {
            display_items,
            selected_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state,
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                pending: self.search_pending(),
            },
            modal,
            notice: self.notices.current().map(|notice| NoticeLine {
                text: notice.text.clone(),
                is_error: notice.kind == NoticeKind::Error,
            }),
        }
    }

    /// Result indices shown for `available_rows` table rows.
    fn visible_range(&self, available_rows: usize) -> Range<usize> {
        let total = self.results.len();
        let anchor = self.highlight.current().unwrap_or(0);

        let mut visible_start = anchor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total);

        if visible_end - visible_start < available_rows && total >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        visible_start..visible_end
    }

    /// Maps a 0-based pane line (as reported by mouse events) to the result
    /// drawn there, given the pane height used for the last render.
    #[must_use]
    pub fn result_index_at(&self, line: usize, rows: usize) -> Option<usize> {
        if self.dialog.is_open() {
            return None;
        }
        let offset = line.checked_sub(FIRST_RESULT_LINE)?;
        let range = self.visible_range(rows.saturating_sub(CHROME_ROWS));
        let index = range.start + offset;
        range.contains(&index).then_some(index)
    }

    fn compute_window(&self, available_rows: usize) -> (Vec<DisplayItem>, Option<usize>) {
        let Range {
            start: visible_start,
            end: visible_end,
        } = self.visible_range(available_rows);

        let matcher = if self.query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let items = self.results.as_slice()[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| {
                let is_selected = self.highlight.current() == Some(visible_start + relative_idx);
                self.compute_display_item(movie, is_selected, matcher.as_ref())
            })
            .collect();

        let selected = self
            .highlight
            .current()
            .filter(|&i| (visible_start..visible_end).contains(&i))
            .map(|i| i - visible_start);

        (items, selected)
    }

    fn compute_display_item(&self, movie: &Movie, is_selected: bool, matcher: Option<&SkimMatcherV2>) -> DisplayItem {
        let title = if movie.title.chars().count() > MAX_TITLE_CHARS {
            let kept: String = movie.title.chars().take(MAX_TITLE_CHARS - 3).collect();
            format!("{kept}...")
        } else {
            movie.title.clone()
        };

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&title, m));

        DisplayItem {
            title,
            poster: if movie.poster.is_some() { "yes" } else { "-" }.to_string(),
            is_selected,
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight for fuzzy match visualization.
    ///
    /// Uses the Skim fuzzy matcher to find matching character positions, then
    /// coalesces consecutive indices into `(start, end)` ranges with exclusive end.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.query) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_modal(&self, cols: usize, max_lines: usize) -> Option<ModalView> {
        let width = cols.saturating_sub(8).max(20);

        let (title, mut lines) = match self.dialog.modal() {
            ModalState::Closed => return None,
            ModalState::ShowingDetails(details) => (details.display_title(), Self::details_lines(details, width)),
            ModalState::ShowingRecommendations { source_title, items } => (
                format!("Similar to {source_title}"),
                Self::recommendation_lines(items, width),
            ),
        };

        lines.truncate(max_lines);
        Some(ModalView { title, lines })
    }

    fn details_lines(details: &MovieDetails, width: usize) -> Vec<String> {
        let facts = [
            format!("Released:   {}", details.display_release_date()),
            format!("Runtime:    {}", details.display_runtime()),
            format!("Genres:     {}", join_or_unknown(&details.genres)),
            format!("Studios:    {}", join_or_unknown(&details.production_companies)),
            format!("Rating:     {} ({} votes)", details.vote_average, details.vote_count),
            format!("Popularity: {}", details.popularity),
            String::new(),
            details.overview.clone(),
        ];
        facts.iter().flat_map(|line| wrap_text(line, width)).collect()
    }

    fn recommendation_lines(items: &Recommendations, width: usize) -> Vec<String> {
        if items.is_empty() {
            return vec!["No similar movies found".to_string()];
        }

        items
            .iter()
            .enumerate()
            .flat_map(|(i, rec)| {
                let marker = if rec.has_poster() { " [poster]" } else { "" };
                wrap_text(&format!("{:>2}. {}{marker}", i + 1, rec.title()), width)
            })
            .collect()
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.query.is_empty() {
            EmptyState {
                message: "Search for a movie".to_string(),
                subtitle: "Start typing a title".to_string(),
            }
        } else if self.search_pending() {
            EmptyState {
                message: "Searching...".to_string(),
                subtitle: format!("Looking for \"{}\"", self.query),
            }
        } else {
            EmptyState {
                message: "No movies found".to_string(),
                subtitle: "Try a different title".to_string(),
            }
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.dialog.modal() {
            ModalState::ShowingDetails(_) => " Marquee: Details ".to_string(),
            ModalState::ShowingRecommendations { .. } => " Marquee: Similar Movies ".to_string(),
            ModalState::Closed => format!(" Marquee ({}) ", self.results.len()),
        };
        HeaderInfo { title }
    }

    /// Keybinding hints for the current context.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.dialog.is_open() {
            "ESC: close  Ctrl+l: like  Ctrl+d: dislike  Ctrl+r: similar  Ctrl+c: quit".to_string()
        } else {
            let enter = match self.binding {
                SelectionBinding::Details => "details",
                SelectionBinding::Autocomplete => "complete",
            };
            format!(
                "Type to search  Up/Down: navigate  Enter: {enter}  Ctrl+l/d: like/dislike  Ctrl+r: similar  ESC: clear"
            )
        };

        FooterInfo { keybindings }
    }
}

fn join_or_unknown(values: &[String]) -> String {
    if values.is_empty() {
        "Unknown".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Recommendation;

    fn state_with(titles: &[&str]) -> AppState {
        let client = ApiClient::new("http://svc", "/movie/details", None);
        let mut state = AppState::new(client, Theme::default());
        state.replace_results(
            titles
                .iter()
                .enumerate()
                .map(|(i, t)| Movie::new(i.to_string(), *t))
                .collect(),
        );
        state
    }

    #[test]
    fn replacing_results_resets_highlight() {
        let mut state = state_with(&["Alien", "Aliens", "Alien 3"]);
        state.highlight.down(state.results.len());
        assert_eq!(state.highlighted_movie().map(|m| m.title.as_str()), Some("Alien"));

        state.replace_results(vec![Movie::new("9", "Heat"), Movie::new("8", "Ronin")]);
        assert_eq!(state.highlight.current(), None);
        assert!(state.highlighted_movie().is_none());
    }

    #[test]
    fn window_follows_highlight() {
        let titles: Vec<String> = (0..30).map(|i| format!("Movie {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);

        for _ in 0..25 {
            state.highlight.down(state.results.len());
        }

        // 20 rows leaves 9 for the table.
        let vm = state.compute_viewmodel(20, 80);
        assert_eq!(vm.display_items.len(), 9);
        let selected = vm.selected_index.unwrap();
        assert!(vm.display_items[selected].is_selected);
        assert_eq!(vm.display_items[selected].title, "Movie 24");
    }

    #[test]
    fn pane_lines_map_to_visible_results() {
        let mut state = state_with(&["Alien", "Aliens", "Alien 3"]);

        assert_eq!(state.result_index_at(6, 24), None);
        assert_eq!(state.result_index_at(7, 24), Some(0));
        assert_eq!(state.result_index_at(9, 24), Some(2));
        assert_eq!(state.result_index_at(10, 24), None);

        state.dialog.apply_recommendations("Alien".into(), Ok(vec![])).unwrap();
        assert_eq!(state.result_index_at(7, 24), None);
    }

    #[test]
    fn highlight_ranges_follow_query() {
        let mut state = state_with(&["Heat"]);
        state.query = "he".to_string();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 2)]);
    }

    #[test]
    fn empty_state_reflects_query() {
        let mut state = state_with(&[]);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("Search for a movie".to_string()));

        state.query = "zzz".to_string();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No movies found".to_string()));
    }

    #[test]
    fn modal_replaces_empty_state() {
        let mut state = state_with(&[]);
        state
            .dialog
            .apply_recommendations(
                "Heat".into(),
                Ok(vec![Recommendation::Title("Ronin".into())]),
            )
            .unwrap();

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_none());
        let modal = vm.modal.unwrap();
        assert_eq!(modal.title, "Similar to Heat");
        assert_eq!(modal.lines, vec![" 1. Ronin".to_string()]);
        assert_eq!(vm.header.title, " Marquee: Similar Movies ");
    }

    #[test]
    fn long_titles_are_truncated_on_char_boundaries() {
        let long = "é".repeat(60);
        let state = state_with(&[&long]);
        let vm = state.compute_viewmodel(24, 120);
        assert_eq!(vm.display_items[0].title.chars().count(), MAX_TITLE_CHARS);
        assert!(vm.display_items[0].title.ends_with("..."));
    }
}
