// src/export/model.rs

use crate::models::AggregateResult;
use crate::utils::path::sanitize_file_stem;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Which projection of an [`AggregateResult`] is exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// Single row: User, Total Hours Worked.
    Total,
    /// One row per date: Date, Hours Worked.
    Daily,
}

impl ReportKind {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Total => &["User", "Total Hours Worked"],
            ReportKind::Daily => &["Date", "Hours Worked"],
        }
    }

    pub fn sheet_name(&self) -> &'static str {
        match self {
            ReportKind::Total => "Work Hours",
            ReportKind::Daily => "Daily Hours",
        }
    }

    fn file_suffix(&self) -> &'static str {
        match self {
            ReportKind::Total => "work_hours",
            ReportKind::Daily => "daily_work_hours",
        }
    }

    /// `{user}_work_hours.{ext}` or `{user}_daily_work_hours.{ext}`.
    pub fn file_name(&self, user: &str, ext: &str) -> String {
        format!("{}_{}.{}", sanitize_file_stem(user), self.file_suffix(), ext)
    }
}

/// Typed cell of an exported table.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportValue {
    Text(String),
    Hours(f64),
    Date(NaiveDate),
}

impl ExportValue {
    pub fn as_display(&self) -> String {
        match self {
            ExportValue::Text(s) => s.clone(),
            ExportValue::Hours(h) => format!("{h:.2}"),
            ExportValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Serialize for ExportValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExportValue::Text(s) => serializer.serialize_str(s),
            ExportValue::Hours(h) => serializer.serialize_f64(*h),
            ExportValue::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
        }
    }
}

/// “Flat” table handed to the writers: fixed headers per kind, typed rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportTable {
    pub kind: ReportKind,
    pub rows: Vec<Vec<ExportValue>>,
}

impl ReportTable {
    pub fn from_result(kind: ReportKind, result: &AggregateResult) -> Self {
        let rows = match kind {
            ReportKind::Total => vec![vec![
                ExportValue::Text(result.user.clone()),
                ExportValue::Hours(result.total_hours),
            ]],
            ReportKind::Daily => result
                .daily
                .iter()
                .map(|d| vec![ExportValue::Date(d.date), ExportValue::Hours(d.hours())])
                .collect(),
        };

        Self { kind, rows }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.kind.headers()
    }

    /// Rows as string tables (terminal output).
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(ExportValue::as_display).collect())
            .collect()
    }
}
