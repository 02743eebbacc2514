//! Integration tests for the gmailfilters binary

use assert_cmd::Command;
use filter_test_utils::FilterDir;
use predicates::prelude::*;

/// Get a Command for the gmailfilters binary
fn gmailfilters_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gmailfilters").expect("Failed to find gmailfilters binary");
    cmd.env_remove("GMAILFILTERS_TOKEN_FILE")
        .env_remove("GMAILFILTERS_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_describes_export() {
    gmailfilters_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--export"))
        .stdout(predicate::str::contains("--token-file"));
}

#[test]
fn test_missing_file_argument_fails() {
    gmailfilters_cmd().assert().failure();
}

#[test]
fn test_missing_token_file_fails() {
    let dir = FilterDir::new();
    let filters = dir.sample();

    gmailfilters_cmd()
        .arg("--token-file")
        .arg(dir.path("missing-token.json"))
        .arg(&filters)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("token file"));
}

#[test]
fn test_token_without_access_token_fails() {
    let dir = FilterDir::new();
    let token = dir.write("token.json", "{\"access_token\": \"\"}");

    gmailfilters_cmd()
        .env("GMAILFILTERS_TOKEN_FILE", &token)
        .arg("--export")
        .arg(dir.path("out.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no access token"));

    assert!(!dir.path("out.toml").exists());
}
