mod common;

use common::{HEADERS, no_config, rwh, sample_rows, temp_dir, write_csv, write_xlsx};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_total_prints_summary() {
    let dir = temp_dir("cli_total");
    let input = write_xlsx(&dir, "march", &HEADERS, &sample_rows());

    rwh()
        .args(["--config", &no_config(&dir), "total"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Calculation completed successfully"))
        .stdout(contains("User:"))
        .stdout(contains("alice"))
        .stdout(contains("15.50"))
        .stdout(contains("Overtime: 15.50 hours"));
}

#[test]
fn test_daily_prints_breakdown_and_undertime() {
    let dir = temp_dir("cli_daily");
    let input = write_csv(&dir, "march", &HEADERS, &sample_rows());

    rwh()
        .args(["--config", &no_config(&dir), "daily"])
        .arg(&input)
        .args(["--expected", "16"])
        .assert()
        .success()
        .stdout(contains("Daily Work Hours"))
        .stdout(contains("2025-03-03"))
        .stdout(contains("7.50"))
        .stdout(contains("2025-03-04"))
        .stdout(contains("8.00"))
        .stdout(contains("Undertime: 0.50 hours"));
}

#[test]
fn test_exact_target() {
    let dir = temp_dir("cli_exact");
    let input = write_csv(&dir, "march", &HEADERS, &sample_rows());

    rwh()
        .args(["--config", &no_config(&dir), "total"])
        .arg(&input)
        .args(["-e", "15.5"])
        .assert()
        .success()
        .stdout(contains("Exactly met expected hours"));
}

#[test]
fn test_missing_column_fails_without_result() {
    let dir = temp_dir("cli_missing");
    let input = write_csv(
        &dir,
        "broken",
        &["timestamp", "who", "check-in / check-out"],
        &[["2025-03-03 09:00:00", "alice", "check-in"]],
    );

    rwh()
        .args(["--config", &no_config(&dir), "total"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Missing required columns in the uploaded file: user"))
        .stdout(contains("Summary").not());
}

#[test]
fn test_negative_expected_is_rejected_by_parser() {
    let dir = temp_dir("cli_negative");
    let input = write_csv(&dir, "march", &HEADERS, &sample_rows());

    rwh()
        .args(["--config", &no_config(&dir), "total"])
        .arg(&input)
        .args(["--expected=-3"])
        .assert()
        .failure()
        .stderr(contains("non-negative"));
}

#[test]
fn test_daily_export_xlsx() {
    let dir = temp_dir("cli_export_daily");
    let input = write_xlsx(&dir, "march", &HEADERS, &sample_rows());
    let out = dir.join("out");

    rwh()
        .args(["--config", &no_config(&dir), "daily"])
        .arg(&input)
        .arg("--export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(out.join("alice_daily_work_hours.xlsx").exists());
}

#[test]
fn test_total_export_csv_with_force() {
    let dir = temp_dir("cli_export_total");
    let input = write_csv(&dir, "march", &HEADERS, &sample_rows());

    for _ in 0..2 {
        rwh()
            .args(["--config", &no_config(&dir), "total"])
            .arg(&input)
            .args(["--export", "--format", "csv", "--force", "--out"])
            .arg(&dir)
            .assert()
            .success();
    }

    let content = fs::read_to_string(dir.join("alice_work_hours.csv")).unwrap();
    assert!(content.starts_with("User,Total Hours Worked"));
    assert!(content.contains("alice,15.5"));
}

#[test]
fn test_existing_export_not_overwritten_when_declined() {
    let dir = temp_dir("cli_export_declined");
    let input = write_csv(&dir, "march", &HEADERS, &sample_rows());
    let target = dir.join("alice_work_hours.csv");
    fs::write(&target, "keep me").unwrap();

    rwh()
        .args(["--config", &no_config(&dir), "total"])
        .arg(&input)
        .args(["--export", "--format", "csv", "--out"])
        .arg(&dir)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
}

#[test]
fn test_config_defaults_are_used() {
    let dir = temp_dir("cli_config_defaults");
    let input = write_csv(&dir, "march", &HEADERS, &sample_rows());
    let cfg = dir.join("rworkhours.conf");
    let out = dir.join("exports");

    fs::write(
        &cfg,
        format!(
            "expected_monthly_hours: 20.0\noutput_dir: {}\nexport_format: json\n",
            out.display()
        ),
    )
    .unwrap();

    rwh()
        .arg("--config")
        .arg(&cfg)
        .arg("total")
        .arg(&input)
        .args(["--export", "--force"])
        .assert()
        .success()
        .stdout(contains("Expected Monthly Hours:"))
        .stdout(contains("20.00"))
        .stdout(contains("Undertime: 4.50 hours"));

    assert!(out.join("alice_work_hours.json").exists());
}

#[test]
fn test_config_init_and_print() {
    let dir = temp_dir("cli_config_init");
    let cfg = dir.join("conf").join("rworkhours.conf");

    rwh()
        .arg("--config")
        .arg(&cfg)
        .args(["config", "--init"])
        .assert()
        .success();

    assert!(cfg.exists());

    rwh()
        .arg("--config")
        .arg(&cfg)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("expected_monthly_hours"))
        .stdout(contains("export_format: xlsx"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = temp_dir("cli_config_invalid");
    let input = write_csv(&dir, "march", &HEADERS, &sample_rows());
    let cfg = dir.join("bad.conf");
    fs::write(&cfg, "expected_monthly_hours: -5\n").unwrap();

    rwh()
        .arg("--config")
        .arg(&cfg)
        .arg("total")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_missing_input_file() {
    let dir = temp_dir("cli_no_input");

    rwh()
        .args(["--config", &no_config(&dir), "daily"])
        .arg(dir.join("nope.xlsx"))
        .assert()
        .failure()
        .stderr(contains("file not found"));
}
