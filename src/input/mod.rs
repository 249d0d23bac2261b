//! Input side: reading a spreadsheet into a record set and typed events.

pub mod columns;
pub mod reader;
pub mod records;
pub mod table;

pub use columns::ColumnMap;
pub use reader::read_table;
pub use records::records_to_events;
pub use table::{Cell, RecordTable};
