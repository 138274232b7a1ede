//! `deployctl apply` — init, apply the saved plan (or auto-approve), then
//! chain into cluster access configuration.

use std::path::Path;

use anyhow::Result;

use crate::artifact::PlanArtifact;
use crate::checks::PrereqProbe;
use crate::command_runner::CommandRunner;
use crate::commands::{access, init, kubectl};
use crate::errors::OrchestratorError;
use crate::output::OutputContext;
use crate::terraform::Terraform;

/// Run `deployctl apply`.
///
/// A saved plan artifact, when present, is the exact change set applied and
/// is deleted once the engine reports success. Without one the engine
/// recomputes the diff itself under `-auto-approve`.
///
/// # Errors
///
/// Returns an error when any chained stage fails: init, the apply itself,
/// or the follow-up access configuration.
pub async fn run(
    out: &OutputContext,
    probe: &impl PrereqProbe,
    tf: &impl Terraform,
    runner: &impl CommandRunner,
    dir: &Path,
) -> Result<()> {
    init::run(out, probe, tf, dir).await?;

    match PlanArtifact::find(dir) {
        Some(artifact) => {
            out.info(&format!("applying saved plan ({} old)", artifact.age_label()));
            let status = tf.apply_plan(dir, crate::artifact::PLAN_FILE).await?;
            if !status.success() {
                return Err(OrchestratorError::engine("terraform apply", status).into());
            }
            artifact.consume()?;
        }
        None => {
            out.info("no saved plan — applying with auto-approve");
            let status = tf.apply_auto(dir).await?;
            if !status.success() {
                return Err(OrchestratorError::engine("terraform apply", status).into());
            }
        }
    }
    out.success("infrastructure applied");

    kubectl::run(out, tf, runner, dir).await?;
    access::run(out, tf, dir).await
}
