//! The slice of list state an item delegate is allowed to see.
//!
//! Scrolling, pagination and fuzzy matching all live in the enclosing list.
//! Before each redraw the list snapshots what a delegate needs into a
//! [`ListContext`]: the row width, which row is selected, the filter mode
//! and query, and the matched character positions for every visible row.

use std::fmt;

/// Filtering mode of the enclosing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FilterState {
    /// No filter is set.
    #[default]
    Unfiltered,
    /// The user is typing a query.
    Filtering,
    /// A query has been committed and the list is narrowed to its matches.
    FilterApplied,
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterState::Unfiltered => "unfiltered",
            FilterState::Filtering => "filtering",
            FilterState::FilterApplied => "filter applied",
        })
    }
}

/// Which style set a row is drawn with. Derived on every render, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    Normal,
    Selected,
    /// The filter input is open but nothing has been typed yet.
    Dimmed,
}

impl DisplayState {
    /// Resolve the state of row `index`.
    ///
    /// An open filter with an empty query dims every row. Otherwise the
    /// selected row is highlighted, except while the query is being typed.
    pub fn resolve(ctx: &ListContext, index: usize) -> Self {
        if ctx.filter_state == FilterState::Filtering && ctx.filter_value.is_empty() {
            DisplayState::Dimmed
        } else if index == ctx.index && ctx.filter_state != FilterState::Filtering {
            DisplayState::Selected
        } else {
            DisplayState::Normal
        }
    }
}

/// Observable list state handed to [`ItemDelegate`](crate::ItemDelegate)s.
///
/// Rendering only reads it. Update hooks get it mutably and may change the
/// selection or filter before the next frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContext {
    width: u16,
    index: usize,
    filter_state: FilterState,
    filter_value: String,
    matches: Vec<Vec<usize>>,
}

impl ListContext {
    /// An unfiltered context with the first row selected and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row width in cells. `0` disables truncation.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the selected row.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Set the filter mode and query.
    pub fn with_filter(mut self, state: FilterState, value: impl Into<String>) -> Self {
        self.set_filter(state, value);
        self
    }

    /// Set matched character positions, one entry per visible row.
    pub fn with_matches(mut self, matches: Vec<Vec<usize>>) -> Self {
        self.matches = matches;
        self
    }

    /// Row width in cells; `0` means unbounded.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Index of the selected row.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    /// The current query, empty when no filter is set.
    pub fn filter_value(&self) -> &str {
        &self.filter_value
    }

    /// Whether a filter is being typed or has been applied.
    pub fn is_filtered(&self) -> bool {
        matches!(
            self.filter_state,
            FilterState::Filtering | FilterState::FilterApplied
        )
    }

    /// Matched character positions in the title of row `index`.
    ///
    /// Empty when no filter is active or the row has no recorded matches.
    pub fn matches_for_item(&self, index: usize) -> &[usize] {
        if !self.is_filtered() {
            return &[];
        }
        self.matches.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Move the selection to `index`.
    pub fn select(&mut self, index: usize) {
        self.index = index;
    }

    /// Change the filter mode and query.
    ///
    /// Returning to [`FilterState::Unfiltered`] clears the query and any
    /// recorded matches.
    pub fn set_filter(&mut self, state: FilterState, value: impl Into<String>) {
        self.filter_state = state;
        self.filter_value = value.into();
        if state == FilterState::Unfiltered {
            self.filter_value.clear();
            self.matches.clear();
        }
    }

    pub fn set_matches(&mut self, matches: Vec<Vec<usize>>) {
        self.matches = matches;
    }

    /// Display state of row `index` under the current state.
    pub fn display_state(&self, index: usize) -> DisplayState {
        DisplayState::resolve(self, index)
    }
}
