//! `deployctl plan` — compute and persist the engine diff.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::artifact::{PLAN_FILE, PlanArtifact};
use crate::checks::{self, PrereqProbe};
use crate::context::DeployContext;
use crate::errors::OrchestratorError;
use crate::intent;
use crate::output::OutputContext;
use crate::terraform::Terraform;

/// Run `deployctl plan`. On success the plan artifact sits in the deploy
/// directory until `apply` consumes it.
///
/// # Errors
///
/// Returns an error when prerequisites are missing, the context cannot be
/// loaded, or the engine exits non-zero. Engine failures surface verbatim
/// and are never retried.
pub async fn run(
    out: &OutputContext,
    probe: &impl PrereqProbe,
    tf: &impl Terraform,
    dir: &Path,
    json: bool,
) -> Result<()> {
    checks::ensure_prerequisites(probe).await?;
    let ctx = DeployContext::load(dir)?;

    let resources = intent::derive(&ctx);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&resources).context("JSON serialization")?
        );
    } else {
        out.header("Declared resources");
        for resource in &resources {
            out.line(&format!("- {resource}"));
        }
        out.blank();
    }

    let status = tf.plan(dir, PLAN_FILE).await?;
    if !status.success() {
        return Err(OrchestratorError::engine("terraform plan", status).into());
    }

    if let Some(artifact) = PlanArtifact::find(dir) {
        out.success(&format!(
            "plan saved ({}) — run 'deployctl apply' to execute it",
            artifact.age_label()
        ));
    }
    Ok(())
}
