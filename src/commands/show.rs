//! `deployctl show` — read-only outputs report plus a static cost table.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::output::OutputContext;
use crate::terraform::{self, Terraform};

/// Fixed informational estimate; not computed from live billing data.
pub const COST_TABLE: &str = "\
Estimated monthly cost (us-central1 list prices, informational only):
  GKE management fee           $74.40
  3x e2-standard-2 nodes      ~$196.56
  2x reserved static IPs      ~$14.60
  Artifact Registry (5 GB)    ~$0.50
  Persistent disks (70 GB)    ~$2.80
  -----------------------------------
  Total                       ~$290";

/// Run `deployctl show`. Best-effort: always succeeds, reporting an absence
/// notice when no infrastructure exists or the engine is unavailable.
///
/// # Errors
///
/// Never fails in practice; the signature matches the other handlers.
pub async fn run(out: &OutputContext, tf: &impl Terraform, dir: &Path, json: bool) -> Result<()> {
    let loaded = terraform::load_outputs(tf, dir).await;

    if json {
        let outputs: serde_json::Map<String, serde_json::Value> = loaded
            .iter()
            .flat_map(terraform::EngineOutputs::known)
            .map(|(name, value)| (name.to_string(), serde_json::Value::String(value)))
            .collect();
        let payload = serde_json::json!({
            "status": if loaded.is_some() { "deployed" } else { "absent" },
            "outputs": outputs,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("JSON serialization")?
        );
        return Ok(());
    }

    match loaded {
        Some(outputs) => {
            out.header("Current outputs");
            for (name, value) in outputs.known() {
                out.kv(name, &value);
            }
        }
        None => out.info("No infrastructure found — run 'deployctl apply' first"),
    }

    out.header("Cost estimate");
    for line in COST_TABLE.lines() {
        out.line(line);
    }
    Ok(())
}
