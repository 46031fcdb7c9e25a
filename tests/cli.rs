use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("birthdays");
    cmd.env_remove("BIRTHDAYS_TODAY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_cards_sorted_by_next_birthday() {
    let output = cmd()
        .args(["--today", "2024-07-20", "Sam=1990-12-10", "Mia=2015-07-25"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let mia = stdout.find("Mia -").unwrap();
    let sam = stdout.find("Sam -").unwrap();
    assert!(mia < sam);
    assert!(stdout.contains("25.07.2024 (in 5 days)"));
    assert!(stdout.contains("Leo"));
}

#[test]
fn json_output_with_limit() {
    let output = cmd()
        .args([
            "--json",
            "--limit",
            "1",
            "--today",
            "2024-12-31",
            "Noah=2018-03-03",
            "Emma=2020-01-01",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Emma");
    assert_eq!(list[0]["upcoming"], "2025-01-01");
    assert_eq!(list[0]["days_until"], 1);
    assert_eq!(list[0]["turns"], 5);
}

#[test]
fn search_filters_names() {
    let output = cmd()
        .args([
            "--json",
            "--search",
            "mi",
            "--today",
            "2024-07-20",
            "Sam=1990-12-10",
            "Mia=2015-07-25",
            "Jamie=2012-01-05",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Mia", "Jamie"]);
}

#[test]
fn reference_day_from_environment() {
    cmd()
        .env("BIRTHDAYS_TODAY", "2024-12-10")
        .args(["--json", "Sam=1990-12-10"])
        .assert()
        .success()
        .stdout(contains("\"days_until\": 0"));
}

#[test]
fn rejects_impossible_birth_date() {
    cmd()
        .args(["--today", "2024-01-01", "Kim=2023-02-29"])
        .assert()
        .failure()
        .stderr(contains("not a calendar date"));
}

#[test]
fn rejects_birth_after_today() {
    cmd()
        .args(["--today", "2024-01-01", "Kim=2024-06-01"])
        .assert()
        .failure()
        .stderr(contains("is after reference date"));
}

#[test]
fn rejects_entry_without_name() {
    cmd()
        .args(["--today", "2024-01-01", "2015-07-25"])
        .assert()
        .failure()
        .stderr(contains("NAME=YYYY-MM-DD"));
}
