//! Command line behaviour of the receiptbook binary
//!
//! Every test points `RECEIPTBOOK_HOME` at a temporary directory so nothing
//! touches the real configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn receiptbook(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("receiptbook").unwrap();
    cmd.env("RECEIPTBOOK_HOME", home.path())
        .env_remove("RECEIPTBOOK_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    receiptbook(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("receipts"))
        .stdout(predicate::str::contains("budgets"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn config_shows_defaults() {
    let home = TempDir::new().unwrap();
    receiptbook(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:8000"))
        .stdout(predicate::str::contains("Request timeout: none"));
}

#[test]
fn api_url_flag_overrides_config() {
    let home = TempDir::new().unwrap();
    receiptbook(&home)
        .args(["--api-url", "http://receipts.local:9000/", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://receipts.local:9000\n"));
}

#[test]
fn invalid_api_url_is_rejected() {
    let home = TempDir::new().unwrap();
    receiptbook(&home)
        .args(["--api-url", "receipts.local", "config"])
        .assert()
        .failure();
}

#[test]
fn init_writes_settings_file() {
    let home = TempDir::new().unwrap();
    receiptbook(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(home.path().join("config.json").exists());
}

#[test]
fn blank_category_sends_nothing() {
    let home = TempDir::new().unwrap();
    // Port 1 is never served; a request here would fail the command
    receiptbook(&home)
        .args(["--api-url", "http://127.0.0.1:1"])
        .args(["budgets", "set", "  ", "--limit", "10", "--spent", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category is required"));
}

#[test]
fn unreachable_server_fails_listing() {
    let home = TempDir::new().unwrap();
    receiptbook(&home)
        .args(["--api-url", "http://127.0.0.1:1", "receipts", "list"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Could not load receipts"));
}

#[test]
fn upload_without_existing_file_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.png");
    receiptbook(&home)
        .args(["--api-url", "http://127.0.0.1:1", "receipts", "upload"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Upload failed."));
}
