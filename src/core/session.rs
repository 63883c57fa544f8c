//! Session controller: owns the committed roster and every piece of
//! user-driven state, and derives the ordered view from them.

use crate::core::filter::{self, FilterState, StationChoice, StationFilter};
use crate::core::order::{self, SortMode};
use crate::core::selection::{Mark, SelectionState};
use crate::errors::AppResult;
use crate::models::{RosterRow, Shift};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct RosterSession {
    rows: Vec<RosterRow>,
    filter: FilterState,
    selection: SelectionState,
    sort: SortMode,
    last_error: Option<String>,
}

/// What the presentation layer receives after each recomputation.
#[derive(Debug)]
pub struct RosterView<'a> {
    pub rows: Vec<(&'a RosterRow, Mark)>,
    /// Count after filtering, before ordering.
    pub visible_row_count: usize,
    pub total_selected_count: usize,
    /// Per-shift station columns are only meaningful without filters.
    pub show_station_columns: bool,
}

impl RosterSession {
    pub fn new(rows: Vec<RosterRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    /// Message of the last failed ingestion, cleared by a successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ---------------------------
    // Ingestion
    // ---------------------------

    /// Replace the whole roster. Filters and marks survive; marks whose row
    /// disappeared stay stored but no longer count.
    pub fn replace_rows(&mut self, rows: Vec<RosterRow>) {
        debug!(old = self.rows.len(), new = rows.len(), "roster replaced");
        self.rows = rows;
    }

    /// Commit the outcome of an ingestion. A failure commits an empty roster.
    pub fn ingest(&mut self, result: AppResult<Vec<RosterRow>>) {
        match result {
            Ok(rows) => {
                self.last_error = None;
                self.replace_rows(rows);
            }
            Err(e) => {
                warn!(error = %e, "ingestion failed, presenting an empty roster");
                self.last_error = Some(e.to_string());
                self.replace_rows(Vec::new());
            }
        }
    }

    // ---------------------------
    // Filter transitions
    // ---------------------------

    pub fn set_shift(&mut self, shift: Shift) {
        debug!(shift = shift.as_str(), "shift filter");
        self.filter.shift = shift;
    }

    pub fn toggle_station(&mut self, choice: StationChoice) -> &StationFilter {
        let current = std::mem::take(&mut self.filter.stations);
        self.filter.stations = current.toggle(choice);
        debug!(stations = ?self.filter.stations, "station filter");
        &self.filter.stations
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.filter.name_query = query.into();
    }

    pub fn clear_name_query(&mut self) {
        self.filter.name_query.clear();
    }

    // ---------------------------
    // Selection transitions
    // ---------------------------

    pub fn toggle_mark(&mut self, row_index: &str) -> Mark {
        let mark = self.selection.toggle(row_index);
        debug!(row = row_index, mark = mark.as_str(), "mark toggled");
        mark
    }

    pub fn mark_of(&self, row_index: &str) -> Mark {
        self.selection.mark_of(row_index)
    }

    /// Bulk clear, only meaningful while something is marked.
    pub fn can_clear_marks(&self) -> bool {
        self.total_selected_count() > 0
    }

    pub fn clear_marks(&mut self) -> bool {
        self.selection.clear()
    }

    // ---------------------------
    // Sort transitions
    // ---------------------------

    pub fn toggle_sort(&mut self) -> SortMode {
        self.sort = self.sort.toggled();
        self.sort
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.sort = mode;
    }

    // ---------------------------
    // Derived queries
    // ---------------------------

    pub fn visible_row_count(&self) -> usize {
        filter::apply(&self.rows, &self.filter).len()
    }

    /// Rows of the committed roster that are selected or flagged.
    pub fn total_selected_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| self.selection.mark_of(&r.row_index).is_marked())
            .count()
    }

    pub fn find(&self, row_index: &str) -> Option<&RosterRow> {
        self.rows.iter().find(|r| r.row_index == row_index)
    }

    pub fn view(&self) -> RosterView<'_> {
        let visible = filter::apply(&self.rows, &self.filter);
        let visible_row_count = visible.len();

        let rows = order::order(visible, self.sort, &self.selection)
            .into_iter()
            .map(|r| (r, self.selection.mark_of(&r.row_index)))
            .collect();

        RosterView {
            rows,
            visible_row_count,
            total_selected_count: self.total_selected_count(),
            show_station_columns: self.filter.shift == Shift::All && self.filter.stations.is_all(),
        }
    }
}
