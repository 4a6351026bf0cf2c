//! Smoke tests for the tapcalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A tapcalc command run in an empty directory, so no stray config is found
fn tapcalc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tapcalc").expect("tapcalc binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TAPCALC_CONFIG")
        .env_remove("TAPCALC_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_args_fails() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir).assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_addition() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["eval", "2 + 3 ="])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_eval_unquoted_words() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["eval", "2.5", "+", "3", "="])
        .assert()
        .success()
        .stdout("5.5\n");
}

#[test]
fn test_eval_integer_division_truncates() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["eval", "7 / 2 ="])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_eval_percent() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["eval", "50 %"])
        .assert()
        .success()
        .stdout("0.5\n");
}

#[test]
fn test_eval_steps() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["--color", "never", "eval", "--steps", "9 × 9 ="])
        .assert()
        .success()
        .stdout("9  9\n×  9\n9  9\n=  81\n81\n");
}

#[test]
fn test_eval_divide_by_zero_fails() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["eval", "8 / 0 ="])
        .assert()
        .failure()
        .stdout("0\n")
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_eval_divide_by_zero_promoted() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["eval", "--zero-division", "promote", "8 / 0 ="])
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn test_eval_bad_script() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["eval", "2 ^ 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognised button"));
}

#[test]
fn test_eval_json() {
    let dir = TempDir::new().unwrap();
    let output = tapcalc(&dir)
        .args(["eval", "--format", "json", "12 + 3 ="])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"], "15");
    assert_eq!(json["taps"], "1 2 + 3 =");
    assert_eq!(json["steps"].as_array().unwrap().len(), 5);
    assert_eq!(json["steps"][2]["button"]["operator"], "add");
    assert_eq!(json["state"]["display"], "15");
    assert_eq!(json["state"]["phase"], "operand_entered");
    assert!(json["error"].is_null());
}

#[test]
fn test_eval_json_failure_reports_error() {
    let dir = TempDir::new().unwrap();
    let output = tapcalc(&dir)
        .args(["eval", "--format", "json", "1 / 0 ="])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"], "Division by zero");
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_defaults() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("zero_division: reject"))
        .stdout(predicate::str::contains("repeated_decimal: false"));
}

#[test]
fn test_config_file_in_working_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tapcalc.yaml"),
        "rules:\n  zero_division: promote\n",
    )
    .unwrap();

    tapcalc(&dir)
        .args(["eval", "1 / 0 ="])
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn test_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    fs::write(&path, "format: json\nrules:\n  repeated_decimal: true\n").unwrap();

    tapcalc(&dir)
        .args(["--config", path.to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format: json"))
        .stdout(predicate::str::contains("repeated_decimal: true"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tapcalc.yaml"),
        "rules:\n  zero_division: promote\n",
    )
    .unwrap();

    tapcalc(&dir)
        .args(["eval", "--zero-division", "reject", "1 / 0 ="])
        .assert()
        .failure();
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["--config", "missing.yaml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tapcalc.yaml"), "colour: never\n").unwrap();

    tapcalc(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tapcalc.yaml"));
}

#[test]
fn test_config_defaults_ignores_broken_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tapcalc.yaml"), "rules: [not, a, map\n").unwrap();

    tapcalc(&dir)
        .args(["config", "--defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zero_division: reject"));

    tapcalc(&dir).arg("config").assert().failure();
}

#[test]
fn test_no_repeated_decimal_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tapcalc.yaml"),
        "rules:\n  repeated_decimal: true\n",
    )
    .unwrap();

    tapcalc(&dir)
        .args(["eval", "1 . . 5"])
        .assert()
        .success()
        .stdout("1..5\n");

    tapcalc(&dir)
        .args(["eval", "--no-repeated-decimal", "1 . . 5"])
        .assert()
        .success()
        .stdout("1.5\n");
}

#[test]
fn test_repeated_decimal_flag() {
    let dir = TempDir::new().unwrap();
    tapcalc(&dir)
        .args(["eval", "1 . . 5"])
        .assert()
        .success()
        .stdout("1.5\n");

    tapcalc(&dir)
        .args(["eval", "--repeated-decimal", "1 . . 5"])
        .assert()
        .success()
        .stdout("1..5\n");
}
