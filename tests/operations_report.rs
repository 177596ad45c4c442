use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::NamedTempFile;

fn write_operations(operations: Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{operations}").unwrap();
    file
}

fn golden_operations() -> Value {
    json!([
        {"id": "f", "amount": -1, "date": "2025-11-19", "description": ""},
        {"id": "a", "amount": -100, "date": "2025-11-11", "description": ""},
        {"id": "b", "amount": 100, "date": "2025-11-12", "description": ""},
        {"id": "c", "amount": -1000, "date": "2025-11-13", "description": ""},
        {"id": "d", "amount": 2000, "date": "2025-11-14", "description": ""},
        {"id": "e", "amount": 100, "date": "2025-11-15", "description": ""}
    ])
}

fn run_report(file: &NamedTempFile, extra_args: &[&str]) -> Value {
    let output = Command::cargo_bin("operations_report")
        .unwrap()
        .env_remove("ACCOUNTER_TIMEZONE")
        .arg("--input")
        .arg(file.path())
        .args(extra_args)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    serde_json::from_slice(&output.stdout).unwrap()
}

fn as_numbers(value: &Value) -> Vec<f64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|number| number.as_str().unwrap().parse().unwrap())
        .collect()
}

#[test]
fn reports_sorted_operations_total_and_charts() {
    let file = write_operations(golden_operations());

    let report = run_report(&file, &[]);

    let ids: Vec<&str> = report["operations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|operation| operation["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e", "f"]);
    assert_eq!(report["total_amount"].as_str().unwrap().parse::<f64>().unwrap(), 1099.0);

    let charts = &report["charts"];
    assert_eq!(
        charts["separate"]["dates"],
        json!([
            "11.11.2025",
            "12.11.2025",
            "13.11.2025",
            "14.11.2025",
            "15.11.2025",
            "19.11.2025"
        ])
    );
    assert_eq!(
        as_numbers(&charts["accumulate"]["income"]),
        vec![0.0, 100.0, 100.0, 2100.0, 2200.0, 2200.0]
    );
    assert_eq!(
        as_numbers(&charts["accumulate"]["expense"]),
        vec![100.0, 100.0, 1100.0, 1100.0, 1100.0, 1101.0]
    );
    assert_eq!(
        as_numbers(&charts["separate"]["income"]),
        vec![0.0, 100.0, 0.0, 2000.0, 100.0, 0.0]
    );
}

#[test]
fn empty_input_has_no_charts() {
    let file = write_operations(json!([]));

    let report = run_report(&file, &[]);

    assert_eq!(report["operations"], json!([]));
    assert_eq!(report["charts"], Value::Null);
    assert_eq!(report["total_amount"].as_str().unwrap().parse::<f64>().unwrap(), 0.0);
}

#[test]
fn filters_by_kind_and_date() {
    let file = write_operations(golden_operations());

    let report = run_report(
        &file,
        &["--kind", "expense", "--from", "2025-11-12", "--to", "2025-11-19"],
    );

    let ids: Vec<&str> = report["operations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|operation| operation["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["c", "f"]);
}

#[test]
fn buckets_days_in_account_timezone() {
    let file = write_operations(json!([
        {"id": "a", "amount": 10, "occurred_at": "2025-11-11T09:00:00Z"},
        {"id": "b", "amount": 20, "occurred_at": "2025-11-11T12:00:00Z"}
    ]));

    let utc = run_report(&file, &["--timezone", "Etc/UTC"]);
    let plus_thirteen = run_report(&file, &["--timezone", "Etc/GMT-13"]);

    assert_eq!(utc["charts"]["separate"]["dates"], json!(["11.11.2025"]));
    assert_eq!(
        plus_thirteen["charts"]["separate"]["dates"],
        json!(["11.11.2025", "12.11.2025"])
    );
}

#[test]
fn buckets_days_with_daylight_saving_offsets() {
    // 23:30 in Auckland, once during daylight saving time and once outside it.
    let file = write_operations(json!([
        {"id": "summer", "amount": 5, "occurred_at": "2025-01-10T10:30:00Z"},
        {"id": "winter", "amount": 10, "occurred_at": "2025-07-10T11:30:00Z"}
    ]));

    let report = run_report(&file, &["--timezone", "Pacific/Auckland"]);

    assert_eq!(
        report["charts"]["separate"]["dates"],
        json!(["10.01.2025", "10.07.2025"])
    );
}

#[test]
fn accepts_contributor_role() {
    let file = write_operations(golden_operations());

    let report = run_report(&file, &["--role", "contributor"]);

    assert_eq!(report["operations"].as_array().unwrap().len(), 6);
}

#[test]
fn unknown_role_is_rejected() {
    let file = write_operations(golden_operations());

    Command::cargo_bin("operations_report")
        .unwrap()
        .arg("--input")
        .arg(file.path())
        .args(["--role", "superuser"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("superuser"));
}

#[test]
fn unknown_timezone_is_rejected() {
    let file = write_operations(golden_operations());

    Command::cargo_bin("operations_report")
        .unwrap()
        .arg("--input")
        .arg(file.path())
        .args(["--timezone", "Mars/Olympus_Mons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mars/Olympus_Mons"));
}

#[test]
fn unparseable_date_is_rejected() {
    let file = write_operations(json!([
        {"id": "a", "amount": 10, "date": "tomorrow"}
    ]));

    Command::cargo_bin("operations_report")
        .unwrap()
        .arg("--input")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("tomorrow"));
}
