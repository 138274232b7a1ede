//! Process execution behind a trait so commands can be tested with doubles.

use std::path::Path;
use std::process::{Output, Stdio};

use anyhow::{Context, Result};

/// Generic command execution rooted in a working directory.
///
/// No timeout is imposed: the engine's apply/destroy runs are legitimately
/// long and pace themselves. `kill_on_drop(true)` is set as a safety net so
/// an interrupted orchestrator does not leave children behind.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a command in `dir` and capture stdout/stderr.
    async fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<Output>;

    /// Run a command in `dir` with inherited stdio (interactive pass-through,
    /// used for streamed engine operations). Returns only the exit status.
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        dir: &Path,
    ) -> Result<std::process::ExitStatus>;
}

/// Production `CommandRunner` backed by tokio process execution.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<Output> {
        tokio::process::Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to spawn {program}"))
    }

    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        dir: &Path,
    ) -> Result<std::process::ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .current_dir(dir)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
