//! Record set → typed events.

use crate::errors::{AppError, AppResult};
use crate::input::columns::ColumnMap;
use crate::input::table::{Cell, RecordTable};
use crate::models::{Action, Event};
use crate::utils::time::{excel_serial_to_datetime, parse_timestamp};
use chrono::NaiveDateTime;
use tracing::trace;

/// Convert every non-blank row into an [`Event`], in file order.
///
/// Fails with `MissingColumns` before looking at any row, and with
/// `InvalidTimestamp` on the first timestamp that does not parse.
pub fn records_to_events(table: &RecordTable) -> AppResult<Vec<Event>> {
    let columns = ColumnMap::resolve(&table.headers)?;

    let mut events = Vec::with_capacity(table.len());

    for (idx, row) in table.rows.iter().enumerate() {
        if row.iter().all(Cell::is_empty) {
            continue;
        }

        // header is spreadsheet row 1
        let row_number = idx + 2;

        let ts_cell = cell_at(row, columns.timestamp);
        let timestamp = cell_to_timestamp(ts_cell).ok_or_else(|| AppError::InvalidTimestamp {
            row: row_number,
            value: ts_cell.to_string(),
        })?;

        let user = cell_at(row, columns.user).to_string();
        let action = Action::from_cell(&cell_at(row, columns.action).to_string());

        if let Action::Other(raw) = &action {
            trace!(row = row_number, action = %raw, "unrecognized action, row will be ignored");
        }

        events.push(Event::new(timestamp, user, action));
    }

    if events.is_empty() {
        return Err(AppError::EmptyInput);
    }

    Ok(events)
}

fn cell_at(row: &[Cell], idx: usize) -> &Cell {
    static EMPTY: Cell = Cell::Empty;
    row.get(idx).unwrap_or(&EMPTY)
}

fn cell_to_timestamp(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Number(serial) => excel_serial_to_datetime(*serial),
        Cell::Text(s) => parse_timestamp(s),
        Cell::Empty | Cell::Bool(_) => None,
    }
}
