//! Terraform CLI abstraction — enables test doubles for all engine calls.
//!
//! Long-running operations (init, plan, apply, destroy) stream their output
//! straight to the terminal and return only an exit status; read-only
//! operations capture output for parsing. The engine owns its own state and
//! locking; nothing here inspects or bypasses either.

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::{Context as _, Result};
use serde_json::Value;

use crate::command_runner::{CommandRunner, TokioCommandRunner};

/// Abstraction over the terraform CLI rooted in a deploy directory.
#[allow(async_fn_in_trait)]
pub trait Terraform {
    /// Run `terraform init` (streamed).
    async fn init(&self, dir: &Path) -> Result<ExitStatus>;

    /// Run `terraform plan -out=<plan_file>` (streamed).
    async fn plan(&self, dir: &Path, plan_file: &str) -> Result<ExitStatus>;

    /// Run `terraform apply <plan_file>` (streamed).
    async fn apply_plan(&self, dir: &Path, plan_file: &str) -> Result<ExitStatus>;

    /// Run `terraform apply -auto-approve` (streamed).
    async fn apply_auto(&self, dir: &Path) -> Result<ExitStatus>;

    /// Run `terraform destroy -auto-approve` (streamed).
    async fn destroy_auto(&self, dir: &Path) -> Result<ExitStatus>;

    /// Run `terraform output -json` (captured).
    async fn outputs(&self, dir: &Path) -> Result<Output>;

    /// Run `terraform state list` (captured).
    async fn state_summary(&self, dir: &Path) -> Result<Output>;
}

/// Production implementation — routes every engine call through a
/// [`CommandRunner`], generic so tests can inject a canned runner.
pub struct TerraformCliDriver<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> TerraformCliDriver<R> {
    /// Create a driver with an explicit runner instance.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl TerraformCliDriver<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self::new(TokioCommandRunner)
    }
}

impl<R: CommandRunner> Terraform for TerraformCliDriver<R> {
    async fn init(&self, dir: &Path) -> Result<ExitStatus> {
        self.runner
            .run_status("terraform", &["init"], dir)
            .await
            .context("failed to run terraform init")
    }

    async fn plan(&self, dir: &Path, plan_file: &str) -> Result<ExitStatus> {
        let out_flag = format!("-out={plan_file}");
        self.runner
            .run_status("terraform", &["plan", out_flag.as_str()], dir)
            .await
            .context("failed to run terraform plan")
    }

    async fn apply_plan(&self, dir: &Path, plan_file: &str) -> Result<ExitStatus> {
        self.runner
            .run_status("terraform", &["apply", plan_file], dir)
            .await
            .context("failed to run terraform apply")
    }

    async fn apply_auto(&self, dir: &Path) -> Result<ExitStatus> {
        self.runner
            .run_status("terraform", &["apply", "-auto-approve"], dir)
            .await
            .context("failed to run terraform apply")
    }

    async fn destroy_auto(&self, dir: &Path) -> Result<ExitStatus> {
        self.runner
            .run_status("terraform", &["destroy", "-auto-approve"], dir)
            .await
            .context("failed to run terraform destroy")
    }

    async fn outputs(&self, dir: &Path) -> Result<Output> {
        self.runner
            .run("terraform", &["output", "-json"], dir)
            .await
            .context("failed to run terraform output")
    }

    async fn state_summary(&self, dir: &Path) -> Result<Output> {
        self.runner
            .run("terraform", &["state", "list"], dir)
            .await
            .context("failed to run terraform state list")
    }
}

// ── Engine outputs ────────────────────────────────────────────────────────────

/// Output names the orchestrator knows how to render.
pub const KNOWN_OUTPUTS: &[&str] = &[
    "cluster_name",
    "kubectl_config_command",
    "app_static_ip",
    "jenkins_static_ip",
    "registry_url",
    "app_url",
];

/// Parsed `terraform output -json` payload.
#[derive(Debug, Default)]
pub struct EngineOutputs {
    values: serde_json::Map<String, Value>,
}

impl EngineOutputs {
    /// Parse the raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a JSON object.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(raw).context("parsing engine outputs")?;
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => anyhow::bail!("expected a JSON object of outputs, got {other}"),
        }
    }

    /// Whether the engine reported no outputs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a single output value as a string. Non-string scalars are
    /// rendered through their JSON form.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let value = self.values.get(name)?.get("value")?;
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// All known outputs present in this payload, in rendering order.
    #[must_use]
    pub fn known(&self) -> Vec<(&'static str, String)> {
        KNOWN_OUTPUTS
            .iter()
            .filter_map(|name| self.get(name).map(|v| (*name, v)))
            .collect()
    }
}

/// Best-effort load of engine outputs.
///
/// Returns `Ok(None)` when the engine is unavailable, exits non-zero, emits
/// an unparseable payload, or reports no outputs — callers decide whether
/// absence is a notice (`show`, `access`) or an error (`kubectl`).
pub async fn load_outputs(tf: &impl Terraform, dir: &Path) -> Option<EngineOutputs> {
    let output = tf.outputs(dir).await.ok()?;
    if !output.status.success() {
        return None;
    }
    let outputs = EngineOutputs::parse(&output.stdout).ok()?;
    if outputs.is_empty() {
        return None;
    }
    Some(outputs)
}
