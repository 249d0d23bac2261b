mod common;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDate;
use common::{check_in, check_out, temp_dir};
use rworkhours::core::Core;
use rworkhours::export::{ExportFormat, ExportLogic, ExportValue, ReportKind, ReportTable};
use rworkhours::models::AggregateResult;
use serde_json::Value;
use std::fs;

fn daily_result() -> AggregateResult {
    let events = vec![
        check_in("2025-03-03 09:00"),
        check_out("2025-03-03 23:59"),
        check_in("2025-03-04 00:05"),
        check_out("2025-03-04 01:00"),
        check_in("2025-03-05 08:17"),
        check_out("2025-03-05 16:58"),
    ];
    Core::daily_from_events(&events, Some(20.0)).unwrap()
}

#[test]
fn test_file_names_follow_report_kind() {
    assert_eq!(
        ReportKind::Total.file_name("alice", "xlsx"),
        "alice_work_hours.xlsx"
    );
    assert_eq!(
        ReportKind::Daily.file_name("alice", "csv"),
        "alice_daily_work_hours.csv"
    );
    assert_eq!(
        ReportKind::Daily.file_name("ops/alice", "xlsx"),
        "ops_alice_daily_work_hours.xlsx"
    );
}

#[test]
fn test_projection_of_total_and_daily() {
    let result = daily_result();

    let total = ReportTable::from_result(ReportKind::Total, &result);
    assert_eq!(total.headers(), &["User", "Total Hours Worked"]);
    assert_eq!(
        total.rows,
        vec![vec![
            ExportValue::Text("alice".to_string()),
            ExportValue::Hours(result.total_hours)
        ]]
    );

    let daily = ReportTable::from_result(ReportKind::Daily, &result);
    assert_eq!(daily.headers(), &["Date", "Hours Worked"]);
    assert_eq!(daily.rows.len(), 3);
    assert_eq!(
        daily.rows[0][0],
        ExportValue::Date(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap())
    );
    assert_eq!(daily.to_strings()[1], vec!["2025-03-04", "0.92"]);
}

#[test]
fn test_xlsx_round_trip_reproduces_rounded_hours() {
    let dir = temp_dir("export_roundtrip");
    let result = daily_result();

    let path = ExportLogic::export(&result, ReportKind::Daily, ExportFormat::Xlsx, &dir, true)
        .expect("export xlsx");
    assert_eq!(path, dir.join("alice_daily_work_hours.xlsx"));

    let mut workbook = open_workbook_auto(&path).expect("open exported xlsx");
    let range = workbook.worksheet_range("Daily Hours").expect("sheet");
    let mut rows = range.rows();

    let header: Vec<String> = rows.next().unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(header, vec!["Date", "Hours Worked"]);

    let hours: Vec<f64> = rows
        .map(|r| match &r[1] {
            Data::Float(f) => *f,
            Data::Int(i) => *i as f64,
            other => panic!("unexpected cell {other:?}"),
        })
        .collect();

    let expected: Vec<f64> = result.daily.iter().map(|d| d.hours()).collect();
    assert_eq!(hours, expected);
}

#[test]
fn test_xlsx_total_sheet() {
    let dir = temp_dir("export_total_xlsx");
    let result = daily_result();

    let path = ExportLogic::export(&result, ReportKind::Total, ExportFormat::Xlsx, &dir, true)
        .expect("export xlsx");

    let mut workbook = open_workbook_auto(&path).expect("open exported xlsx");
    let range = workbook.worksheet_range("Work Hours").expect("sheet");
    let rows: Vec<&[Data]> = range.rows().collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], Data::String("alice".to_string()));
    assert_eq!(rows[1][1], Data::Float(result.total_hours));
}

#[test]
fn test_empty_breakdown_writes_header_only() {
    let dir = temp_dir("export_empty");
    let events = vec![check_in("2025-03-03 22:00"), check_out("2025-03-04 01:00")];
    let result = Core::daily_from_events(&events, None).unwrap();

    let path = ExportLogic::export(&result, ReportKind::Daily, ExportFormat::Csv, &dir, true)
        .expect("export csv");

    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content.trim(), "Date,Hours Worked");
}

#[test]
fn test_csv_export_content() {
    let dir = temp_dir("export_csv");
    let result = daily_result();

    let path = ExportLogic::export(&result, ReportKind::Daily, ExportFormat::Csv, &dir, true)
        .expect("export csv");

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Hours Worked");
    assert_eq!(lines[1], "2025-03-03,14.98");
    assert_eq!(lines[2], "2025-03-04,0.92");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_json_export_content() {
    let dir = temp_dir("export_json");
    let result = daily_result();

    let path = ExportLogic::export(&result, ReportKind::Total, ExportFormat::Json, &dir, true)
        .expect("export json");
    assert_eq!(path, dir.join("alice_work_hours.json"));

    let json: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["User"], "alice");
    assert_eq!(rows[0]["Total Hours Worked"].as_f64(), Some(result.total_hours));
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = temp_dir("export_nested").join("reports").join("march");
    let result = daily_result();

    let path = ExportLogic::export(&result, ReportKind::Total, ExportFormat::Csv, &dir, false)
        .expect("export into new dir");
    assert!(path.exists());
}
