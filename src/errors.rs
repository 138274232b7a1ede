//! Error taxonomy for the orchestrator.
//!
//! Fatal conditions terminate the invocation with a non-zero status and a
//! human-readable message; nothing is retried. A cancelled destroy is not an
//! error and never passes through here.

use thiserror::Error;

/// Fatal orchestrator errors surfaced to the operator.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// A required external tool is not on PATH.
    #[error("required tool '{tool}' not found on PATH\n  install it first: {hint}")]
    PrerequisiteMissing {
        /// Missing binary name.
        tool: &'static str,
        /// Install instructions shown to the operator.
        hint: &'static str,
    },

    /// No active cloud credential was found.
    #[error("no active gcloud credential\n  authenticate first: gcloud auth login")]
    AuthenticationMissing,

    /// The external engine exited non-zero. Its own output has already been
    /// streamed to the terminal verbatim; this only carries the status.
    #[error("{operation} failed (exit status {status})")]
    EngineError {
        /// Engine subcommand that failed.
        operation: &'static str,
        /// Raw exit code, or -1 when terminated by signal.
        status: i32,
    },

    /// Cluster access was requested before any successful apply.
    #[error("no cluster found — run 'deployctl apply' first")]
    NoClusterFound,

    /// Engine state exists but holds no outputs.
    #[error("no infrastructure found")]
    NoInfrastructureFound,
}

impl OrchestratorError {
    /// Build an `EngineError` from a child process exit status.
    #[must_use]
    pub fn engine(operation: &'static str, status: std::process::ExitStatus) -> Self {
        Self::EngineError {
            operation,
            status: status.code().unwrap_or(-1),
        }
    }
}
