//! Display ordering by selection state.

use crate::core::selection::SelectionState;
use crate::models::RosterRow;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// Input order
    #[default]
    None,
    /// Selected and flagged rows on top
    SelectedFirst,
    /// Unselected rows on top
    SelectedLast,
}

impl SortMode {
    /// Header click. `None` is only ever the starting mode; the first click
    /// puts unselected rows on top, later clicks alternate.
    pub fn toggled(self) -> Self {
        match self {
            SortMode::SelectedLast => SortMode::SelectedFirst,
            SortMode::None | SortMode::SelectedFirst => SortMode::SelectedLast,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::SelectedFirst => "selected-first",
            SortMode::SelectedLast => "selected-last",
        }
    }
}

/// Reorder `rows` for display. Stable partition: rows keep their input
/// order inside each group, ties are never broken by name or index.
pub fn order<'a>(
    rows: Vec<&'a RosterRow>,
    mode: SortMode,
    selection: &SelectionState,
) -> Vec<&'a RosterRow> {
    let marked_first = match mode {
        SortMode::None => return rows,
        SortMode::SelectedFirst => true,
        SortMode::SelectedLast => false,
    };

    let (marked, unmarked): (Vec<_>, Vec<_>) = rows
        .into_iter()
        .partition(|r| selection.mark_of(&r.row_index).is_marked());

    if marked_first {
        marked.into_iter().chain(unmarked).collect()
    } else {
        unmarked.into_iter().chain(marked).collect()
    }
}
