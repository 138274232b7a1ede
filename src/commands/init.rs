//! `deployctl init` — prerequisite checks, context materialization, engine init.

use std::path::Path;

use anyhow::Result;

use crate::checks::{self, PrereqProbe};
use crate::context::{CONTEXT_FILE, DeployContext};
use crate::errors::OrchestratorError;
use crate::output::OutputContext;
use crate::terraform::Terraform;

/// Run `deployctl init`.
///
/// # Errors
///
/// Returns an error when a required tool or credential is missing, the
/// context file cannot be materialized, or `terraform init` fails.
pub async fn run(
    out: &OutputContext,
    probe: &impl PrereqProbe,
    tf: &impl Terraform,
    dir: &Path,
) -> Result<()> {
    let account = checks::ensure_prerequisites(probe).await?;
    out.success(&format!("tools present, authenticated as {account}"));

    if DeployContext::materialize(dir)? {
        out.success(&format!(
            "created {CONTEXT_FILE} from template — review it before applying"
        ));
    } else {
        out.info(&format!("{CONTEXT_FILE} already present, leaving it untouched"));
    }

    let ctx = DeployContext::load(dir)?;
    out.kv("project", &ctx.project_id);
    out.kv("cluster", &ctx.cluster_name);
    out.kv("location", &format!("{} / {}", ctx.region, ctx.zone));

    let status = tf.init(dir).await?;
    if !status.success() {
        return Err(OrchestratorError::engine("terraform init", status).into());
    }
    out.success("engine initialized");
    Ok(())
}
