//! Spreadsheet readers: workbooks through calamine, CSV through the csv crate.

use crate::errors::{AppError, AppResult};
use crate::input::table::{Cell, RecordTable};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

/// Supported input formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Workbook,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputFormat::Workbook),
            "csv" => Ok(InputFormat::Csv),
            _ => Err(AppError::UnsupportedInput(format!(
                "{} (expected .xlsx, .xls, .ods or .csv)",
                path.display()
            ))),
        }
    }
}

/// Read the record set from `path`. `sheet` selects a worksheet by name;
/// the first one is used otherwise. Ignored for CSV files.
pub fn read_table(path: &Path, sheet: Option<&str>) -> AppResult<RecordTable> {
    if !path.exists() {
        return Err(AppError::Read(format!("file not found: {}", path.display())));
    }

    let table = match InputFormat::from_path(path)? {
        InputFormat::Workbook => read_workbook(path, sheet)?,
        InputFormat::Csv => read_csv(path)?,
    };

    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "input table loaded"
    );
    Ok(table)
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> AppResult<RecordTable> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name)?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::Read("workbook has no worksheets".to_string()))??,
    };

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|c| data_to_cell(c).to_string()).collect(),
        None => return Ok(RecordTable::default()),
    };

    let mut table = RecordTable::new(headers);
    for row in rows {
        table.push_row(row.iter().map(data_to_cell).collect());
    }

    Ok(table)
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::text(s.as_str()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Cell::DateTime(naive),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.as_str()),
        Data::Error(e) => Cell::Text(format!("#{e:?}")),
    }
}

fn read_csv(path: &Path) -> AppResult<RecordTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.iter().map(String::from).collect();
    let mut table = RecordTable::new(headers);

    for record in rdr.records() {
        let record = record?;
        table.push_row(record.iter().map(Cell::text).collect());
    }

    Ok(table)
}
