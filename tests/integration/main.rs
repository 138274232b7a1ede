//! Integration tests for deployctl.
//!
//! These spawn the actual binary and test end-to-end exit codes and output.
//! Each test gets its own deploy directory via `DEPLOYCTL_DIR`.

mod cli_tests;
mod offline_commands;

use assert_cmd::Command;

/// Binary under test with deterministic output settings.
pub fn deployctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("deployctl"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Binary under test rooted in an isolated deploy directory.
pub fn deployctl_in(dir: &std::path::Path) -> Command {
    let mut cmd = deployctl();
    cmd.env("DEPLOYCTL_DIR", dir);
    cmd
}
