//! Smoke tests for the prodctl binary

use assert_cmd::Command;
use predicates::prelude::*;

fn prodctl() -> Command {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    // Keep the caller's DATABASE_URL / APP_DB_* out of the picture
    cmd.env_clear();
    cmd
}

#[test]
fn test_version() {
    prodctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prodctl"));
}

#[test]
fn test_serve_help() {
    prodctl()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_without_database_fails() {
    prodctl()
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no database configured"));
}

#[test]
fn test_serve_rejects_bad_url() {
    prodctl()
        .args(["serve", "--database-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid database URL"));
}

#[test]
fn test_serve_rejects_bad_bind() {
    prodctl()
        .args(["serve", "--bind", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}
