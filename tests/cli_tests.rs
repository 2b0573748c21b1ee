mod common;
use common::{Sandbox, bare_cmd, sandbox_with_data};
use predicates::prelude::*;
use std::fs;

#[test]
fn init_writes_config_and_bootstraps_ledger() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger ready with 0 entries"));

    let doc = sb.ledger_content();
    assert!(doc.contains("\"entries\": []"));
    assert!(doc.contains("\"start\": \"08:10\""));
    assert!(doc.contains("\"end\": \"16:58\""));

    let conf = fs::read_to_string(sb.home.path().join(".otledger").join("otledger.conf"))
        .expect("config written");
    assert!(conf.contains("ot.json"));
}

#[test]
fn test_mode_init_leaves_config_alone() {
    let sb = Sandbox::new();
    sb.cmd().args(["--test", "init"]).assert().success();

    assert!(sb.ledger().exists());
    assert!(!sb.home.path().join(".otledger").join("otledger.conf").exists());
}

#[test]
fn add_then_stats_prints_total() {
    let sb = Sandbox::new();
    sb.add("2025-06-10", "45");
    sb.add("2025-06-11", "15");

    sb.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("60 min (01h 00m)"))
        .stdout(predicate::str::contains("30.00 min"))
        .stdout(predicate::str::contains("Last month"));
}

#[test]
fn add_rejects_non_integer_amount() {
    let sb = Sandbox::new();
    sb.cmd().arg("init").assert().success();
    let before = sb.ledger_content();

    sb.cmd()
        .args(["add", "2025-06-10", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid integer"));

    assert_eq!(sb.ledger_content(), before);
}

#[test]
fn add_rejects_negative_amount_and_bad_date() {
    let sb = Sandbox::new();
    sb.cmd().arg("init").assert().success();
    let before = sb.ledger_content();

    sb.cmd()
        .args(["add", "2025-06-10", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));

    sb.cmd()
        .args(["add", "2025-02-30", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    assert_eq!(sb.ledger_content(), before);
}

#[test]
fn add_persists_optional_fields_only_when_given() {
    let sb = sandbox_with_data();
    let doc = sb.ledger_content();

    assert!(doc.contains("\"reason\": \"hotfix\""));
    assert!(doc.contains("\"by\": \"Kit\""));
    assert_eq!(doc.matches("\"reason\"").count(), 1);
    assert!(doc.contains("\"total\": 3"));
}

#[test]
fn stats_detailed_on_small_ledger() {
    let sb = Sandbox::new();
    sb.add("2025-06-01", "10");
    sb.add("2025-06-02", "20");
    sb.add("2025-06-03", "30");

    sb.cmd()
        .args(["stats", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kurtosis"))
        .stdout(predicate::str::contains("-1.50"))
        .stdout(predicate::str::contains("W = 1.0000"))
        .stdout(predicate::str::contains("2025-06-01"));
}

#[test]
fn stats_on_empty_ledger_shows_placeholders() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["stats", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no entries yet"))
        .stdout(predicate::str::contains("--"));
}

#[test]
fn list_filters_by_period() {
    let sb = sandbox_with_data();

    sb.cmd()
        .args(["list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-10"))
        .stdout(predicate::str::contains("2025-06-03"))
        .stdout(predicate::str::contains("2025-05-28").not())
        .stdout(predicate::str::contains("2 entries, 75 min"));

    sb.cmd()
        .args(["list", "--from", "2025-05-01", "--to", "2025-05-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries, 15 min"));
}

#[test]
fn list_sort_rewrites_ledger_in_date_order() {
    let sb = sandbox_with_data();

    sb.cmd().args(["list", "--sort"]).assert().success();

    let doc = sb.ledger_content();
    let first = doc.find("2025-05-28").unwrap();
    let second = doc.find("2025-06-03").unwrap();
    let third = doc.find("2025-06-10").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn list_rejects_bad_period() {
    let sb = sandbox_with_data();

    sb.cmd()
        .args(["list", "--period", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn calc_reports_overtime_against_default_workday() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["calc", "08:00", "12:30", "13:30", "18:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10:00"))
        .stdout(predicate::str::contains("9:00"))
        .stdout(predicate::str::contains("72 min (1:12)"));
}

#[test]
fn calc_rejects_malformed_time() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["calc", "8:00", "12:30", "13:30", "18:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn workhour_update_changes_calc() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["workhour", "--start", "09:00", "--end", "18:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workhour updated"));
    assert!(sb.ledger_content().contains("\"end\": \"18:00\""));

    sb.cmd()
        .args(["calc", "09:00", "12:30", "13:30", "18:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30 min (0:30)"));
}

#[test]
fn workhour_invalid_time_changes_nothing() {
    let sb = Sandbox::new();
    sb.cmd().arg("init").assert().success();
    let before = sb.ledger_content();

    sb.cmd()
        .args(["workhour", "--end", "25:00"])
        .assert()
        .failure();

    assert_eq!(sb.ledger_content(), before);
}

#[test]
fn config_print_shows_active_settings() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bar_width: 40"))
        .stdout(predicate::str::contains("ot.json"));
}

#[test]
fn config_file_ledger_is_used_without_override() {
    let sb = Sandbox::new();
    let conf_dir = sb.home.path().join(".otledger");
    fs::create_dir_all(&conf_dir).unwrap();
    let ledger = sb.path("custom.json");
    fs::write(
        conf_dir.join("otledger.conf"),
        format!("ledger: {}\nshow_reason: false\n", ledger.display()),
    )
    .unwrap();

    bare_cmd(sb.home.path())
        .args(["add", "2025-06-10", "20"])
        .assert()
        .success();

    assert!(fs::read_to_string(&ledger).unwrap().contains("\"amount\": 20"));
}

#[test]
fn malformed_ledger_is_reported() {
    let sb = Sandbox::new();
    fs::write(sb.ledger(), "{ not json").unwrap();

    sb.cmd()
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed ledger document"));
}
