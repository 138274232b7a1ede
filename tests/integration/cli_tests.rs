//! CLI surface: dispatch, help, and exit codes.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::deployctl;

#[test]
fn no_arguments_prints_help_and_exits_zero() {
    deployctl()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn unrecognized_command_fails_and_prints_usage() {
    deployctl()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_flag_lists_every_operation() {
    let assert = deployctl().arg("--help").assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["init", "plan", "apply", "destroy", "show", "kubectl", "access"] {
        assert!(stdout.contains(command), "help must list '{command}'");
    }
}

#[test]
fn version_flag_reports_the_binary_name() {
    deployctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deployctl"));
}
