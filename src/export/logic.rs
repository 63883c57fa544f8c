// src/export/logic.rs

use crate::core::RosterView;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::rows_from_view;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of the current view.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the ordered, filtered rows of `view` to `file`.
    pub fn export(
        view: &RosterView<'_>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if path.is_dir() {
            return Err(AppError::Export(format!(
                "output path is a directory: {}",
                path.display()
            )));
        }

        ensure_writable(&path, force)?;

        let rows = rows_from_view(view);
        if rows.is_empty() {
            warning("No rows match the current filters; writing an empty export.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path),
            ExportFormat::Json => export_json(&rows, &path),
        }
    }
}
