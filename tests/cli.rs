#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("ferien-cli").unwrap()
}

#[test]
fn holidays_lists_thirteen_lines() {
    let out = cli()
        .args(["holidays", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-04-01 Ostermontag"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 13);
}

#[test]
fn anchors_for_2020() {
    cli()
        .args(["anchors", "--year", "2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ostersonntag:        2020-04-12"))
        .stdout(predicate::str::contains("Schulbeginn:         2020-09-07"));
}

#[test]
fn periods_respect_reform_year_flag() {
    cli()
        .args(["periods", "--year", "2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Herbstferien"));
    cli()
        .args(["--reform-year", "2021", "periods", "--year", "2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Herbstferien").not());
}

#[test]
fn days_exports_json_and_csv() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("2023.json");
    let csv = dir.path().join("2023.csv");
    cli()
        .args(["days", "--year", "2023", "--out-json"])
        .arg(&json)
        .arg("--out-csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-01-01 | Sun | * | Neujahr"))
        .stdout(predicate::str::contains("2023-03-06 | Mon |   | -"));

    let days = ferien::io::import_days_json(&json).unwrap();
    assert_eq!(days.len(), 365);
    let raw = std::fs::read_to_string(&csv).unwrap();
    assert!(raw.starts_with("date,day_of_year,weekday,public_holiday,label\n"));
}

#[test]
fn unrepresentable_year_fails() {
    cli()
        .args(["days", "--year", "2147483647"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid year"));
}
