// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ReportKind, ReportTable};
use crate::models::AggregateResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export di un risultato.
    ///
    /// - `kind`: total (single row) or daily (one row per date)
    /// - `format`: xlsx | csv | json
    /// - `out_dir`: directory where `{user}_work_hours.{ext}` (or
    ///   `{user}_daily_work_hours.{ext}`) is created
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the path of the written file.
    pub fn export(
        result: &AggregateResult,
        kind: ReportKind,
        format: ExportFormat,
        out_dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        if !out_dir.as_os_str().is_empty() && !out_dir.exists() {
            fs::create_dir_all(out_dir)?;
        }

        let path = out_dir.join(kind.file_name(&result.user, format.extension()));
        ensure_writable(&path, force)?;

        let table = ReportTable::from_result(kind, result);
        debug!(path = %path.display(), rows = table.rows.len(), ?format, "writing export");

        Self::write(&table, format, &path)?;
        Ok(path)
    }

    /// Write an already projected table to `path`.
    pub fn write(table: &ReportTable, format: ExportFormat, path: &Path) -> AppResult<()> {
        match format {
            ExportFormat::Xlsx => export_xlsx(table, path),
            ExportFormat::Csv => export_csv(table, path),
            ExportFormat::Json => export_json(table, path),
        }
    }
}
