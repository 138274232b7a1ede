//! `deployctl destroy` — confirmation-gated teardown.

use std::path::Path;

use anyhow::Result;

use crate::artifact::PlanArtifact;
use crate::errors::OrchestratorError;
use crate::output::OutputContext;
use crate::terraform::Terraform;

/// Exact literal the operator must type for teardown to proceed.
pub const CONFIRM_LITERAL: &str = "destroy";

/// Run `deployctl destroy`.
///
/// Prints a best-effort summary of tracked resources, then requires the
/// operator to type [`CONFIRM_LITERAL`] exactly. Any other input cancels
/// with exit 0 and the engine uninvoked.
///
/// # Errors
///
/// Returns an error only when the engine teardown itself fails; a declined
/// confirmation is not an error.
pub async fn run(out: &OutputContext, tf: &impl Terraform, dir: &Path) -> Result<()> {
    print_summary(out, tf, dir).await;

    out.blank();
    out.warn("this permanently removes the cluster, node pool, static");
    out.warn("addresses, registry contents, and the CI data disk");
    out.blank();

    let token = read_confirmation()?;
    if !confirmed(&token) {
        println!("Cancelled.");
        return Ok(());
    }

    teardown(out, tf, dir).await
}

/// Whether the typed token authorizes teardown. Exact match only.
#[must_use]
pub fn confirmed(token: &str) -> bool {
    token.trim_end_matches(['\r', '\n']) == CONFIRM_LITERAL
}

/// Post-confirmation teardown path.
///
/// # Errors
///
/// Returns an error when the engine exits non-zero.
pub async fn teardown(out: &OutputContext, tf: &impl Terraform, dir: &Path) -> Result<()> {
    let status = tf.destroy_auto(dir).await?;
    if !status.success() {
        return Err(OrchestratorError::engine("terraform destroy", status).into());
    }
    // A plan computed against the destroyed state is meaningless now.
    if let Some(stale) = PlanArtifact::find(dir) {
        stale.discard();
    }
    out.success("infrastructure destroyed");
    Ok(())
}

/// Best-effort listing of currently tracked resources. Absence of state is
/// not an error here.
async fn print_summary(out: &OutputContext, tf: &impl Terraform, dir: &Path) {
    match tf.state_summary(dir).await {
        Ok(output) if output.status.success() && !output.stdout.is_empty() => {
            out.header("Tracked resources");
            for line in String::from_utf8_lossy(&output.stdout).lines() {
                out.line(line);
            }
        }
        _ => out.info("no tracked infrastructure found"),
    }
}

fn read_confirmation() -> Result<String> {
    use std::io::{BufRead as _, Write as _};
    print!("Type '{CONFIRM_LITERAL}' to confirm: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
