//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("petstore").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("petstore").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--db-host"));
}

#[test]
fn test_seed_help() {
    let mut cmd = Command::cargo_bin("petstore").unwrap();
    cmd.arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Number of pets to insert"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("petstore").unwrap();
    cmd.arg("adopt");

    cmd.assert().failure();
}
