use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".food-dashboard").join("config.json")
}

const BINARY_NAME: &str = "food-dashboard";

// Port 9 (discard) is closed on test machines, so requests fail fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"))
        .stdout(contains("list"))
        .stdout(contains("--api-url"));
}

#[test]
/// Listing against an unreachable store exits non-zero.
fn list_fails_when_store_unreachable() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["list", "--api-url", UNREACHABLE_API])
        .env("HOME", tmp.path())
        .env_remove("FOOD_DASHBOARD_ENVIRONMENT")
        .assert()
        .failure()
        .stderr(contains("Request failed"));
}

#[test]
/// Add requires a name and a price.
fn add_requires_name_and_price() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["add", "--name", "Soup"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("--price"));
}

#[test]
/// Configure writes the API URL to the config file.
fn configure_saves_api_url() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["configure", "--with-background", "--api-url", UNREACHABLE_API])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Config saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains(UNREACHABLE_API));
    assert!(saved.contains("\"with_background_color\": true"));
}

#[test]
/// A URL saved by configure is used when no flag is given.
fn list_uses_saved_api_url() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(
        &config_path,
        format!("{{\"api_url\": \"{}\"}}", UNREACHABLE_API),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("list")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains(UNREACHABLE_API));
}

#[test]
/// A price that does not parse is rejected before any request is sent.
fn add_rejects_unparseable_price() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["add", "--name", "Tea", "--price", ",", "--api-url", UNREACHABLE_API])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("is not a price"))
        .stdout(contains("Starting").not());
}

#[test]
/// A failed request is reported once, not again by the process exit.
fn failure_is_reported_once() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["delete", "1", "--api-url", UNREACHABLE_API])
        .env("HOME", tmp.path())
        .assert()
        .code(1)
        .stderr(contains("Request failed"))
        .stderr(contains("Error: ").not());
}
