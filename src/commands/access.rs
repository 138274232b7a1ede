//! `deployctl access` — render access URLs and commands.

use std::path::Path;

use anyhow::Result;

use crate::output::OutputContext;
use crate::terraform::{self, Terraform};

/// Run `deployctl access`. Degrades to a notice when nothing is deployed.
///
/// # Errors
///
/// Never fails in practice; the signature matches the other handlers.
pub async fn run(out: &OutputContext, tf: &impl Terraform, dir: &Path) -> Result<()> {
    let Some(outputs) = terraform::load_outputs(tf, dir).await else {
        out.info("Nothing deployed yet — run 'deployctl apply' first");
        return Ok(());
    };

    out.header("Access");
    for (name, value) in outputs.known() {
        out.kv(name, &value);
    }
    Ok(())
}
