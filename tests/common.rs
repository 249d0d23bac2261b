#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use rworkhours::models::{Action, Event};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhours")
}

/// Unique, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rworkhours_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Config path that does not exist, so defaults are used
pub fn no_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test timestamp")
}

pub fn ev(when: &str, user: &str, action: Action) -> Event {
    Event::new(ts(when), user, action)
}

pub fn check_in(when: &str) -> Event {
    ev(when, "alice", Action::CheckIn)
}

pub fn check_out(when: &str) -> Event {
    ev(when, "alice", Action::CheckOut)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub const HEADERS: [&str; 3] = ["Timestamp", "User", "Check-in / Check-out"];

/// Write a CSV input file; every row is (timestamp, user, action)
pub fn write_csv(dir: &Path, name: &str, headers: &[&str], rows: &[[&str; 3]]) -> PathBuf {
    let path = dir.join(format!("{name}.csv"));
    let mut content = headers.join(",");
    content.push('\n');
    for r in rows {
        content.push_str(&r.join(","));
        content.push('\n');
    }
    fs::write(&path, content).expect("write csv input");
    path
}

/// Write an XLSX input file with text cells
pub fn write_xlsx(dir: &Path, name: &str, headers: &[&str], rows: &[[&str; 3]]) -> PathBuf {
    let path = dir.join(format!("{name}.xlsx"));
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (c, h) in headers.iter().enumerate() {
        sheet.write(0, c as u16, *h).expect("write header");
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            sheet.write((r + 1) as u32, c as u16, *v).expect("write cell");
        }
    }

    workbook.save(&path).expect("save xlsx input");
    path
}

/// Write an XLSX input file whose timestamps are date-formatted numbers,
/// as spreadsheet apps store them
pub fn write_xlsx_datetimes(dir: &Path, name: &str, rows: &[[&str; 3]]) -> PathBuf {
    let path = dir.join(format!("{name}.xlsx"));
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    for (c, h) in HEADERS.iter().enumerate() {
        sheet.write(0, c as u16, *h).expect("write header");
    }
    for (r, [when, user, action]) in rows.iter().enumerate() {
        let row = (r + 1) as u32;
        let dt = ExcelDateTime::parse_from_str(when).expect("valid test timestamp");
        sheet
            .write_datetime_with_format(row, 0, &dt, &date_fmt)
            .expect("write timestamp");
        sheet.write(row, 1, *user).expect("write user");
        sheet.write(row, 2, *action).expect("write action");
    }

    workbook.save(&path).expect("save xlsx input");
    path
}

/// A typical month excerpt for "alice"
pub fn sample_rows() -> Vec<[&'static str; 3]> {
    vec![
        ["2025-03-03 09:00:00", "alice", "check-in"],
        ["2025-03-03 12:00:00", "alice", "check-out"],
        ["2025-03-03 13:00:00", "alice", "Check-In"],
        ["2025-03-03 17:30:00", "alice", " CHECK-OUT "],
        ["2025-03-04 09:00:00", "alice", "check-in"],
        ["2025-03-04 17:00:00", "alice", "check-out"],
    ]
}
