//! Plan artifact handle.
//!
//! `plan` persists the engine's computed diff as a file; `apply` consumes it.
//! Modeling the file as an explicit handle keeps the produced-then-consumed
//! lifecycle visible in function signatures instead of ambient filesystem
//! state.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};

/// File name of the persisted plan inside the deploy directory.
pub const PLAN_FILE: &str = "tfplan";

/// Handle over a persisted plan artifact. At most one exists per deploy
/// directory; a successful apply that consumes it deletes the file.
#[derive(Debug)]
pub struct PlanArtifact {
    path: PathBuf,
}

impl PlanArtifact {
    /// Path the artifact would occupy inside `dir`.
    #[must_use]
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(PLAN_FILE)
    }

    /// Return a handle to the existing artifact in `dir`, if any.
    #[must_use]
    pub fn find(dir: &Path) -> Option<Self> {
        let path = Self::path_in(dir);
        path.is_file().then_some(Self { path })
    }

    /// Age of the artifact, from filesystem mtime. `None` when the
    /// filesystem doesn't expose one.
    #[must_use]
    pub fn age(&self) -> Option<chrono::TimeDelta> {
        let modified = std::fs::metadata(&self.path).ok()?.modified().ok()?;
        let modified: DateTime<Utc> = modified.into();
        Some(Utc::now() - modified)
    }

    /// Human description of the artifact's age, e.g. `"4m"`.
    #[must_use]
    pub fn age_label(&self) -> String {
        match self.age() {
            Some(age) if age.num_hours() >= 1 => format!("{}h", age.num_hours()),
            Some(age) if age.num_minutes() >= 1 => format!("{}m", age.num_minutes()),
            Some(age) => format!("{}s", age.num_seconds().max(0)),
            None => "unknown age".to_string(),
        }
    }

    /// Delete the artifact after a successful apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    pub fn consume(self) -> Result<()> {
        std::fs::remove_file(&self.path)
            .with_context(|| format!("removing consumed plan {}", self.path.display()))
    }

    /// Discard a stale artifact, tolerating one that is already gone.
    pub fn discard(self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
