//! Deployment context: the key/value configuration file driving a stack.
//!
//! The context lives in `terraform.tfvars` inside the deploy directory. It is
//! materialized from an embedded template on first init, loaded once per
//! invocation, and read-only afterwards. The engine reads the same file
//! itself; this module only parses the flat `key = value` subset the
//! orchestrator needs for summaries and intent derivation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use regex::Regex;

/// Context file name inside the deploy directory.
pub const CONTEXT_FILE: &str = "terraform.tfvars";

/// Template embedded in the binary, written on first init.
pub const CONTEXT_TEMPLATE: &str = include_str!("../assets/terraform.tfvars.example");

/// Resolve the deploy directory: `DEPLOYCTL_DIR` if set, else the current
/// working directory.
#[must_use]
pub fn deploy_dir() -> PathBuf {
    std::env::var("DEPLOYCTL_DIR")
        .map_or_else(|_| PathBuf::from("."), PathBuf::from)
}

/// Read-only deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployContext {
    /// Cloud project identifier.
    pub project_id: String,
    /// Region for regional resources (addresses, registry).
    pub region: String,
    /// Zone hosting the cluster control plane.
    pub zone: String,
    /// Cluster name; also prefixes derived resource names.
    pub cluster_name: String,
    /// Environment tag (dev, staging, prod).
    pub environment: String,
    /// Initial node pool size.
    pub node_count: u32,
    /// Node machine type.
    pub machine_type: String,
    /// Node boot disk size in GB.
    pub disk_size_gb: u32,
    /// Autoscaling lower bound.
    pub min_node_count: u32,
    /// Autoscaling upper bound.
    pub max_node_count: u32,
    /// Persistent disk size for the CI controller, in GB.
    pub jenkins_disk_size_gb: u32,
}

impl DeployContext {
    /// Load the context file from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is absent, unreadable, or missing a
    /// recognized key.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONTEXT_FILE);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {} — run 'deployctl init' first", path.display()))?;
        Self::parse(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    /// Parse flat `key = "string"` / `key = number` assignments. Full-line
    /// and trailing `#` comments are ignored; unknown keys are tolerated so
    /// the engine can grow variables the orchestrator doesn't care about.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first recognized key that is absent.
    pub fn parse(content: &str) -> Result<Self> {
        #[allow(clippy::unwrap_used)]
        let assignment =
            Regex::new(r#"(?m)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(?:"([^"]*)"|(\d+))\s*(?:#.*)?$"#)
                .unwrap();

        let mut values: HashMap<&str, &str> = HashMap::new();
        for caps in assignment.captures_iter(content) {
            let key = caps.get(1).map_or("", |m| m.as_str());
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            values.insert(key, value);
        }

        Ok(Self {
            project_id: required_str(&values, "project_id")?,
            region: required_str(&values, "region")?,
            zone: required_str(&values, "zone")?,
            cluster_name: required_str(&values, "cluster_name")?,
            environment: required_str(&values, "environment")?,
            node_count: required_u32(&values, "node_count")?,
            machine_type: required_str(&values, "machine_type")?,
            disk_size_gb: required_u32(&values, "disk_size_gb")?,
            min_node_count: required_u32(&values, "min_node_count")?,
            max_node_count: required_u32(&values, "max_node_count")?,
            jenkins_disk_size_gb: required_u32(&values, "jenkins_disk_size_gb")?,
        })
    }

    /// Write the embedded template to `dir` if no context file exists yet.
    /// An existing file is never overwritten.
    ///
    /// Returns `true` when the file was created by this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn materialize(dir: &Path) -> Result<bool> {
        let path = dir.join(CONTEXT_FILE);
        if path.exists() {
            return Ok(false);
        }
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
        std::fs::write(&path, CONTEXT_TEMPLATE)
            .with_context(|| format!("cannot write {}", path.display()))?;
        Ok(true)
    }
}

fn required_str(values: &HashMap<&str, &str>, key: &'static str) -> Result<String> {
    values
        .get(key)
        .map(|v| (*v).to_string())
        .ok_or_else(|| anyhow::anyhow!("missing required key '{key}'"))
}

fn required_u32(values: &HashMap<&str, &str>, key: &'static str) -> Result<u32> {
    let raw = values
        .get(key)
        .ok_or_else(|| anyhow::anyhow!("missing required key '{key}'"))?;
    raw.parse()
        .with_context(|| format!("key '{key}' must be a number, got '{raw}'"))
}
