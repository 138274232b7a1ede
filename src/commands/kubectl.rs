//! `deployctl kubectl` — configure local cluster access.
//!
//! The engine exports the exact credentials command to run (a
//! `gcloud container clusters get-credentials ...` line); this handler reads
//! it back and executes it.

use std::path::Path;

use anyhow::Result;

use crate::command_runner::CommandRunner;
use crate::errors::OrchestratorError;
use crate::output::OutputContext;
use crate::terraform::{self, Terraform};

/// Run `deployctl kubectl`.
///
/// # Errors
///
/// Returns [`OrchestratorError::NoClusterFound`] when no infrastructure has
/// been applied yet, or an engine error when the credentials command fails.
pub async fn run(
    out: &OutputContext,
    tf: &impl Terraform,
    runner: &impl CommandRunner,
    dir: &Path,
) -> Result<()> {
    let Some(outputs) = terraform::load_outputs(tf, dir).await else {
        return Err(OrchestratorError::NoClusterFound.into());
    };
    let Some(command) = outputs.get("kubectl_config_command").filter(|c| !c.is_empty())
    else {
        return Err(OrchestratorError::NoClusterFound.into());
    };

    let mut words = command.split_whitespace();
    let Some(program) = words.next() else {
        return Err(OrchestratorError::NoClusterFound.into());
    };
    let args: Vec<&str> = words.collect();

    out.info(&format!("running: {command}"));
    let status = runner.run_status(program, &args, dir).await?;
    if !status.success() {
        return Err(OrchestratorError::engine("access configuration", status).into());
    }

    match outputs.get("cluster_name") {
        Some(name) => out.success(&format!("kubectl configured for cluster '{name}'")),
        None => out.success("kubectl configured"),
    }
    Ok(())
}
