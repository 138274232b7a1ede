//! Read-only commands before any apply: graceful degradation.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::deployctl_in;

#[test]
fn show_before_apply_exits_zero_with_a_notice_and_cost_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    deployctl_in(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No infrastructure found"))
        .stdout(predicate::str::contains("Estimated monthly cost"));
}

#[test]
fn show_json_before_apply_reports_absent_status() {
    let dir = tempfile::tempdir().expect("tempdir");
    deployctl_in(dir.path())
        .arg("show")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "absent""#));
}

#[test]
fn access_before_apply_exits_zero_with_a_notice() {
    let dir = tempfile::tempdir().expect("tempdir");
    deployctl_in(dir.path())
        .arg("access")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deployed yet"));
}

#[test]
fn kubectl_before_apply_fails_with_no_cluster_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    deployctl_in(dir.path())
        .arg("kubectl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no cluster found"));
}
