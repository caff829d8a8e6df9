use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_LEDGER_DATA_DIR", data_dir.path())
        .arg("--no-clear");
    cmd
}

#[test]
fn menu_adds_and_lists_an_expense() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .write_stdin("1\nrent\nhousing\n1200.50\nJanuary\n2024/1/1\n2\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("$1,200.50"))
        .stdout(predicate::str::contains("Goodbye"));

    // Every add is written to the audit log
    let log = fs::read_to_string(dir.path().join("audit.log")).unwrap();
    assert!(log.contains("\"operation\":\"create\""));
}

#[test]
fn menu_exits_cleanly_at_end_of_input() {
    let dir = TempDir::new().unwrap();

    expense(&dir).write_stdin("2\n").assert().success();
}

#[test]
fn import_flag_preloads_ledger() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("in.csv");
    fs::write(&csv, "2024/3/1,Gym,Health,30.00,monthly\n").unwrap();

    expense(&dir)
        .args(["--currency", "EUR", "--import"])
        .arg(&csv)
        .write_stdin("2\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 expenses"))
        .stdout(predicate::str::contains("€30.00"));
}

#[test]
fn summary_prints_totals_and_budget() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("expenses.csv");
    fs::write(
        &csv,
        "2024/1/5,Rent,Housing,\"1,200.00\",\n2024/1/9,Food,Groceries,80.00,\n",
    )
    .unwrap();

    expense(&dir)
        .arg("summary")
        .arg(&csv)
        .args(["--budget", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $1,280.00"))
        .stdout(predicate::str::contains("Monthly budget deficit: $280.00"));
}

#[test]
fn summary_rejects_malformed_rows() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("bad.csv");
    fs::write(&csv, "2024/1/5,Rent,Housing\n").unwrap();

    expense(&dir)
        .arg("summary")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format error"));
}

#[test]
fn currency_command_persists_setting() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["currency", "pound"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GBP"));

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency:      GBP (£)"));

    expense(&dir).args(["currency", "doubloon"]).assert().failure();
}
