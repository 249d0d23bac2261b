// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ReportTable, notify_export_success};
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: one object per row, keyed by header.
pub(crate) fn export_json(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut objects = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut obj = Map::new();
        for (header, value) in table.headers().iter().zip(row) {
            let v = serde_json::to_value(value)
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            obj.insert(header.to_string(), v);
        }
        objects.push(Value::Object(obj));
    }

    let json_data = serde_json::to_string_pretty(&objects)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with header row.
pub(crate) fn export_csv(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(table.headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &table.rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
