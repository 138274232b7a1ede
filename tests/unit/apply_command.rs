//! Apply: saved-plan consumption and auto-approve fallback.

#![allow(clippy::expect_used)]

use deployctl::artifact::PlanArtifact;
use deployctl::commands::apply;

use crate::mocks::{DEPLOYED_OUTPUTS, ProbeReady, RecordingRunner, RecordingTerraform, quiet_output};

#[tokio::test]
async fn apply_consumes_and_deletes_the_saved_plan() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan_path = PlanArtifact::path_in(dir.path());
    std::fs::write(&plan_path, b"snapshot").expect("write plan");

    let out = quiet_output();
    let tf = RecordingTerraform::with_outputs(DEPLOYED_OUTPUTS);
    let runner = RecordingRunner::new();

    apply::run(&out, &ProbeReady, &tf, &runner, dir.path())
        .await
        .expect("apply succeeds");

    let calls = tf.calls.borrow();
    assert!(calls.contains(&"init".to_string()));
    assert!(calls.contains(&"apply_plan tfplan".to_string()));
    assert!(!calls.iter().any(|c| c == "apply_auto"));
    assert!(!plan_path.exists(), "consumed plan must be deleted");
}

#[tokio::test]
async fn apply_without_plan_falls_back_to_auto_approve() {
    let dir = tempfile::tempdir().expect("tempdir");

    let out = quiet_output();
    let tf = RecordingTerraform::with_outputs(DEPLOYED_OUTPUTS);
    let runner = RecordingRunner::new();

    apply::run(&out, &ProbeReady, &tf, &runner, dir.path())
        .await
        .expect("apply succeeds");

    let calls = tf.calls.borrow();
    assert!(calls.contains(&"apply_auto".to_string()));
    assert!(!calls.iter().any(|c| c.starts_with("apply_plan")));
}

#[tokio::test]
async fn apply_chains_into_access_configuration() {
    let dir = tempfile::tempdir().expect("tempdir");

    let out = quiet_output();
    let tf = RecordingTerraform::with_outputs(DEPLOYED_OUTPUTS);
    let runner = RecordingRunner::new();

    apply::run(&out, &ProbeReady, &tf, &runner, dir.path())
        .await
        .expect("apply succeeds");

    let runs = runner.calls.borrow();
    assert_eq!(runs.len(), 1);
    assert!(runs[0].starts_with("gcloud container clusters get-credentials fitness-cluster"));
}

#[tokio::test]
async fn failed_apply_keeps_the_plan_and_surfaces_the_status() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan_path = PlanArtifact::path_in(dir.path());
    std::fs::write(&plan_path, b"snapshot").expect("write plan");

    let out = quiet_output();
    let mut tf = RecordingTerraform::with_outputs(DEPLOYED_OUTPUTS);
    tf.fail_on = Some("apply_plan");
    let runner = RecordingRunner::new();

    let err = apply::run(&out, &ProbeReady, &tf, &runner, dir.path())
        .await
        .expect_err("apply must fail");

    assert!(err.to_string().contains("terraform apply failed"));
    assert!(plan_path.exists(), "failed apply must not consume the plan");
    assert!(runner.calls.borrow().is_empty(), "no chaining after failure");
}
