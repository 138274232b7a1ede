//! Kubectl: access configuration from engine outputs.

#![allow(clippy::expect_used)]

use deployctl::commands::kubectl;
use deployctl::errors::OrchestratorError;

use crate::mocks::{DEPLOYED_OUTPUTS, RecordingRunner, RecordingTerraform, quiet_output};

#[tokio::test]
async fn kubectl_before_any_apply_reports_no_cluster() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = quiet_output();
    let tf = RecordingTerraform::no_infra();
    let runner = RecordingRunner::new();

    let err = kubectl::run(&out, &tf, &runner, dir.path())
        .await
        .expect_err("must fail");

    assert!(matches!(
        err.downcast_ref::<OrchestratorError>(),
        Some(OrchestratorError::NoClusterFound)
    ));
    assert!(runner.calls.borrow().is_empty());
}

#[tokio::test]
async fn kubectl_executes_the_exported_credentials_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = quiet_output();
    let tf = RecordingTerraform::with_outputs(DEPLOYED_OUTPUTS);
    let runner = RecordingRunner::new();

    kubectl::run(&out, &tf, &runner, dir.path())
        .await
        .expect("kubectl succeeds");

    let runs = runner.calls.borrow();
    assert_eq!(
        runs.as_slice(),
        [
            "gcloud container clusters get-credentials fitness-cluster \
             --zone us-central1-a --project my-gcp-project"
        ]
    );
}
