// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::models::{DateRange, OtEntry};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `entries` (restricted to `range` when given) to `path`.
    /// Returns the number of exported rows; nothing is written when no entry
    /// matches.
    pub fn export(
        entries: &[OtEntry],
        format: &ExportFormat,
        path: &Path,
        range: Option<&DateRange>,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        let rows: Vec<EntryExport> = entries
            .iter()
            .filter(|e| range.is_none_or(|r| r.contains(e.date)))
            .map(EntryExport::from)
            .collect();

        if rows.is_empty() {
            warning("No entries found for the selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
