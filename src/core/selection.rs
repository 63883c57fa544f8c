//! Tri-state row marks: Unselected → Selected → Flagged → Unselected.

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    #[default]
    Unselected,
    Selected,
    Flagged,
}

impl Mark {
    /// State reached by one more click on the same row.
    pub fn next(self) -> Self {
        match self {
            Mark::Unselected => Mark::Selected,
            Mark::Selected => Mark::Flagged,
            Mark::Flagged => Mark::Unselected,
        }
    }

    /// Selected or flagged.
    pub fn is_marked(self) -> bool {
        !matches!(self, Mark::Unselected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Unselected => "unselected",
            Mark::Selected => "selected",
            Mark::Flagged => "flagged",
        }
    }
}

/// Marks keyed by row index. Absence of a key means `Unselected`, so the
/// map never stores that state.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    marks: HashMap<String, Mark>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_of(&self, row_index: &str) -> Mark {
        self.marks.get(row_index).copied().unwrap_or_default()
    }

    /// Advance the mark of one row; no other key is touched.
    pub fn toggle(&mut self, row_index: &str) -> Mark {
        let next = self.mark_of(row_index).next();
        if next.is_marked() {
            self.marks.insert(row_index.to_string(), next);
        } else {
            self.marks.remove(row_index);
        }
        next
    }

    /// Bulk clear. Returns false when there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        let had_marks = !self.marks.is_empty();
        self.marks.clear();
        had_marks
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Number of marked keys, including keys no longer in the roster.
    pub fn len(&self) -> usize {
        self.marks.len()
    }
}
