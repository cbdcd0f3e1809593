//! Integration tests for the LedgerLock CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Passwords are supplied through `LEDGERLOCK_PASSWORD` so nothing
//! prompts, and each test writes a `.ledgerlock.toml` with cheap Argon2
//! settings into its temp directory.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const CONFIG: &str = "argon2_memory_kib = 8192\nargon2_iterations = 1\nargon2_parallelism = 1\n";

/// Helper: get a Command pointing at the ledgerlock binary.
fn ledgerlock() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("ledgerlock").expect("binary should exist")
}

/// Helper: a temp project dir with fast config.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    tmp.child(".ledgerlock.toml").write_str(CONFIG).unwrap();
    tmp
}

/// Helper: a command running inside `dir` with `password` in the env.
fn run_in(dir: &TempDir, password: &str) -> Command {
    let mut cmd = ledgerlock();
    cmd.current_dir(dir.path())
        .env("LEDGERLOCK_PASSWORD", password)
        .env_remove("LEDGERLOCK_NEW_PASSWORD")
        .env_remove("LEDGERLOCK_LOG");
    cmd
}

fn setup(dir: &TempDir) {
    run_in(dir, "hunter22")
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Master password set"));
}

fn add_sbi(dir: &TempDir) {
    run_in(dir, "hunter22")
        .args([
            "bank",
            "add",
            "--bank-name",
            "SBI",
            "--holder",
            "A. Holder",
            "--account-number",
            "1234567890",
            "--phone",
            "9988776655",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added bank account 1 (SBI ******7890)"));
}

#[test]
fn help_flag_shows_usage() {
    ledgerlock()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("change-password"))
        .stdout(predicate::str::contains("bank"))
        .stdout(predicate::str::contains("card"));
}

#[test]
fn version_flag_shows_version() {
    ledgerlock()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ledgerlock"));
}

#[test]
fn no_args_shows_help() {
    ledgerlock()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn setup_creates_document() {
    let tmp = project();
    setup(&tmp);

    let doc = tmp.child(".ledgerlock/ledger.json");
    doc.assert(predicate::path::exists());
    let raw = std::fs::read_to_string(doc.path()).unwrap();
    assert!(!raw.contains("hunter22"));
}

#[test]
fn setup_twice_fails() {
    let tmp = project();
    setup(&tmp);

    run_in(&tmp, "another-pass")
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already set up"));
}

#[test]
fn setup_rejects_short_password() {
    let tmp = project();
    run_in(&tmp, "short")
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8"));
}

#[test]
fn login_accepts_right_password_and_rejects_wrong_one() {
    let tmp = project();
    setup(&tmp);

    run_in(&tmp, "hunter22")
        .arg("login")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password accepted"));

    run_in(&tmp, "hunter23")
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect password. Please try again."));
}

#[test]
fn login_before_setup_fails() {
    let tmp = project();
    run_in(&tmp, "hunter22").arg("login").assert().failure();
}

#[test]
fn bank_list_is_masked() {
    let tmp = project();
    setup(&tmp);
    add_sbi(&tmp);

    run_in(&tmp, "hunter22")
        .args(["bank", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SBI"))
        .stdout(predicate::str::contains("****"))
        .stdout(predicate::str::contains("7890").not())
        .stdout(predicate::str::contains("6655").not());
}

#[test]
fn bank_reveal_needs_the_password() {
    let tmp = project();
    setup(&tmp);
    add_sbi(&tmp);

    run_in(&tmp, "hunter22")
        .args(["bank", "reveal", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234567890"));

    run_in(&tmp, "hunter23")
        .args(["bank", "reveal", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect password"))
        .stdout(predicate::str::contains("1234567890").not());
}

#[test]
fn bank_delete_with_force() {
    let tmp = project();
    setup(&tmp);
    add_sbi(&tmp);

    run_in(&tmp, "hunter22")
        .args(["bank", "delete", "1", "--force"])
        .assert()
        .success();

    run_in(&tmp, "hunter22")
        .args(["bank", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bank accounts yet"));
}

#[test]
fn card_add_list_reveal() {
    let tmp = project();
    setup(&tmp);

    run_in(&tmp, "hunter22")
        .args([
            "card",
            "add",
            "--bank-name",
            "HDFC",
            "--card-number",
            "4111111111111111",
            "--expiry",
            "2029-04",
            "--credit-limit",
            "50000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("************1111"));

    run_in(&tmp, "hunter22")
        .args(["card", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1111").not())
        .stdout(predicate::str::contains("50000.00"));

    run_in(&tmp, "hunter22")
        .args(["card", "reveal", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4111111111111111"))
        .stdout(predicate::str::contains("50000.00"));
}

#[test]
fn change_password_moves_records_to_new_password() {
    let tmp = project();
    setup(&tmp);
    add_sbi(&tmp);

    run_in(&tmp, "hunter22")
        .env("LEDGERLOCK_NEW_PASSWORD", "correct-horse")
        .arg("change-password")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 records re-encrypted"));

    run_in(&tmp, "hunter22").arg("login").assert().failure();
    run_in(&tmp, "correct-horse")
        .args(["bank", "reveal", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234567890"));
}

#[test]
fn wipe_returns_to_first_run() {
    let tmp = project();
    setup(&tmp);
    add_sbi(&tmp);

    run_in(&tmp, "hunter22")
        .args(["wipe", "--force"])
        .assert()
        .success();

    run_in(&tmp, "hunter22").arg("login").assert().failure();
    setup(&tmp);
}

#[test]
fn data_dir_flag_moves_the_document() {
    let tmp = project();
    run_in(&tmp, "hunter22")
        .args(["setup", "--data-dir", "household"])
        .assert()
        .success();

    tmp.child("household/ledger.json")
        .assert(predicate::path::exists());
    tmp.child(".ledgerlock/ledger.json")
        .assert(predicate::path::missing());
}

#[test]
fn mask_command_prints_masked_value() {
    ledgerlock()
        .args(["mask", "9988776655"])
        .assert()
        .success()
        .stdout("******6655\n");

    ledgerlock()
        .args(["mask", "123"])
        .assert()
        .success()
        .stdout("****\n");
}

#[test]
fn token_command_prints_hex() {
    ledgerlock()
        .args(["token", "--length", "8"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{16}\n$").unwrap());
}

#[test]
fn token_command_rejects_huge_length() {
    ledgerlock()
        .args(["token", "--length", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token length must be between 1 and 1024"));
}

#[test]
fn completions_for_bash() {
    ledgerlock()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ledgerlock"));
}
