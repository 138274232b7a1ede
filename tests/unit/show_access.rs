//! Show and access degrade gracefully before any apply.

#![allow(clippy::expect_used)]

use deployctl::commands::{access, show};

use crate::mocks::{DEPLOYED_OUTPUTS, RecordingTerraform, quiet_output};

#[tokio::test]
async fn show_without_infrastructure_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = quiet_output();
    let tf = RecordingTerraform::no_infra();

    show::run(&out, &tf, dir.path(), false).await.expect("show is best-effort");
}

#[tokio::test]
async fn access_without_infrastructure_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = quiet_output();
    let tf = RecordingTerraform::no_infra();

    access::run(&out, &tf, dir.path()).await.expect("access degrades to a notice");
}

#[tokio::test]
async fn show_with_outputs_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = quiet_output();
    let tf = RecordingTerraform::with_outputs(DEPLOYED_OUTPUTS);

    show::run(&out, &tf, dir.path(), false).await.expect("show succeeds");
}

#[tokio::test]
async fn show_json_mode_succeeds_in_both_states() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = quiet_output();

    let deployed = RecordingTerraform::with_outputs(DEPLOYED_OUTPUTS);
    show::run(&out, &deployed, dir.path(), true).await.expect("show --json succeeds");

    let absent = RecordingTerraform::no_infra();
    show::run(&out, &absent, dir.path(), true).await.expect("show --json degrades");
}
