//! Destroy: confirmed teardown path.

#![allow(clippy::expect_used)]

use deployctl::artifact::PlanArtifact;
use deployctl::commands::destroy;

use crate::mocks::{RecordingTerraform, quiet_output};

#[tokio::test]
async fn teardown_invokes_the_engine_and_discards_a_stale_plan() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan_path = PlanArtifact::path_in(dir.path());
    std::fs::write(&plan_path, b"stale").expect("write plan");

    let out = quiet_output();
    let tf = RecordingTerraform::no_infra();

    destroy::teardown(&out, &tf, dir.path())
        .await
        .expect("teardown succeeds");

    assert_eq!(tf.calls.borrow().as_slice(), ["destroy_auto"]);
    assert!(!plan_path.exists(), "stale plan must be discarded");
}

#[tokio::test]
async fn failed_teardown_surfaces_the_engine_status() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = quiet_output();
    let mut tf = RecordingTerraform::no_infra();
    tf.fail_on = Some("destroy_auto");

    let err = destroy::teardown(&out, &tf, dir.path())
        .await
        .expect_err("must fail");

    assert!(err.to_string().contains("terraform destroy failed"));
}
