// src/export/model.rs

use crate::core::{Mark, RosterView};
use crate::models::{StationFlags, StationId};
use serde::Serialize;

/// Flat record for one exported row, in display order.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub position: usize,
    pub index: String,
    pub id: String,
    pub name: String,
    pub mark: Mark,
    pub morning: String,
    pub evening: String,
}

fn keys(flags: &StationFlags) -> String {
    flags
        .stations()
        .map(StationId::key)
        .collect::<Vec<_>>()
        .join(";")
}

pub(crate) fn rows_from_view(view: &RosterView<'_>) -> Vec<RowExport> {
    view.rows
        .iter()
        .enumerate()
        .map(|(i, (row, mark))| RowExport {
            position: i + 1,
            index: row.row_index.clone(),
            id: row.person_id.clone(),
            name: row.name.clone(),
            mark: *mark,
            morning: keys(&row.morning),
            evening: keys(&row.evening),
        })
        .collect()
}
