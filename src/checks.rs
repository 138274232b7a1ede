//! Prerequisite checks: required tools on PATH and an active credential.

use std::path::Path;

use anyhow::Result;

use crate::command_runner::{CommandRunner, TokioCommandRunner};
use crate::errors::OrchestratorError;

/// Tools the orchestrator shells out to, with install hints.
pub const REQUIRED_TOOLS: &[(&str, &str)] = &[
    (
        "terraform",
        "https://developer.hashicorp.com/terraform/install",
    ),
    ("gcloud", "https://cloud.google.com/sdk/docs/install"),
    ("kubectl", "gcloud components install kubectl"),
];

/// Abstraction over prerequisite probing, enabling test doubles.
#[allow(async_fn_in_trait)]
pub trait PrereqProbe {
    /// Whether `tool` is runnable from PATH.
    async fn tool_on_path(&self, tool: &str) -> bool;

    /// The active gcloud account, if any.
    ///
    /// # Errors
    ///
    /// Returns an error only on I/O failure talking to gcloud; an
    /// authenticated-but-empty account list is `Ok(None)`.
    async fn active_gcloud_account(&self) -> Result<Option<String>>;
}

/// Production probe — shells out through a [`CommandRunner`].
pub struct SystemProbe<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SystemProbe<R> {
    /// Create a probe with an explicit runner instance.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl SystemProbe<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self::new(TokioCommandRunner)
    }
}

impl<R: CommandRunner> PrereqProbe for SystemProbe<R> {
    async fn tool_on_path(&self, tool: &str) -> bool {
        // Every required tool answers `<tool> version`; spawn failure means
        // the binary isn't on PATH.
        self.runner
            .run(tool, &["version"], Path::new("."))
            .await
            .is_ok()
    }

    async fn active_gcloud_account(&self) -> Result<Option<String>> {
        let output = self
            .runner
            .run(
                "gcloud",
                &[
                    "auth",
                    "list",
                    "--filter=status:ACTIVE",
                    "--format=value(account)",
                ],
                Path::new("."),
            )
            .await?;
        if !output.status.success() {
            return Ok(None);
        }
        let account = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!account.is_empty()).then_some(account))
    }
}

/// Verify every required tool is present and a credential is active.
/// Returns the active account name for display.
///
/// # Errors
///
/// Returns [`OrchestratorError::PrerequisiteMissing`] for the first absent
/// tool, or [`OrchestratorError::AuthenticationMissing`] when no gcloud
/// account is active.
pub async fn ensure_prerequisites(probe: &impl PrereqProbe) -> Result<String> {
    for &(tool, hint) in REQUIRED_TOOLS {
        if !probe.tool_on_path(tool).await {
            return Err(OrchestratorError::PrerequisiteMissing { tool, hint }.into());
        }
    }
    probe
        .active_gcloud_account()
        .await?
        .ok_or_else(|| OrchestratorError::AuthenticationMissing.into())
}
