//! Declared-resource intents derived from a deployment context.
//!
//! The engine owns the real dependency graph; this derivation exists so
//! `plan` and `show` can tell the operator what a context translates to
//! without invoking the engine. It is pure and deterministic: the same
//! context always yields the same intents in the same order.

use std::fmt;

use serde::Serialize;

use crate::context::DeployContext;

/// One declared cloud resource, traceable to context values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceIntent {
    /// Kubernetes cluster control plane.
    Cluster {
        name: String,
        location: String,
        environment: String,
    },
    /// Autoscaled worker node pool attached to the cluster.
    NodePool {
        cluster: String,
        count: u32,
        machine_type: String,
        disk_size_gb: u32,
        min_count: u32,
        max_count: u32,
    },
    /// Reserved regional static address.
    StaticAddress { name: String, region: String },
    /// Container image registry.
    Registry { project: String, region: String },
    /// Least-privilege service account for the node pool.
    ServiceAccount { account_id: String, project: String },
    /// Persistent disk for the CI controller.
    CiDisk { name: String, size_gb: u32, zone: String },
}

/// Derive the full resource set a context declares.
///
/// Always exactly one cluster, one node pool, two static addresses (app and
/// CI), one registry, one service account, and one CI disk.
#[must_use]
pub fn derive(ctx: &DeployContext) -> Vec<ResourceIntent> {
    vec![
        ResourceIntent::ServiceAccount {
            account_id: format!("{}-nodes", ctx.cluster_name),
            project: ctx.project_id.clone(),
        },
        ResourceIntent::Cluster {
            name: ctx.cluster_name.clone(),
            location: ctx.zone.clone(),
            environment: ctx.environment.clone(),
        },
        ResourceIntent::NodePool {
            cluster: ctx.cluster_name.clone(),
            count: ctx.node_count,
            machine_type: ctx.machine_type.clone(),
            disk_size_gb: ctx.disk_size_gb,
            min_count: ctx.min_node_count,
            max_count: ctx.max_node_count,
        },
        ResourceIntent::StaticAddress {
            name: format!("{}-app-ip", ctx.cluster_name),
            region: ctx.region.clone(),
        },
        ResourceIntent::StaticAddress {
            name: format!("{}-jenkins-ip", ctx.cluster_name),
            region: ctx.region.clone(),
        },
        ResourceIntent::Registry {
            project: ctx.project_id.clone(),
            region: ctx.region.clone(),
        },
        ResourceIntent::CiDisk {
            name: format!("{}-jenkins-data", ctx.cluster_name),
            size_gb: ctx.jenkins_disk_size_gb,
            zone: ctx.zone.clone(),
        },
    ]
}

impl fmt::Display for ResourceIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cluster {
                name,
                location,
                environment,
            } => write!(f, "cluster '{name}' in {location} ({environment})"),
            Self::NodePool {
                cluster,
                count,
                machine_type,
                disk_size_gb,
                min_count,
                max_count,
            } => write!(
                f,
                "node pool for '{cluster}': {count}x {machine_type}, {disk_size_gb} GB disk, autoscaling {min_count}..{max_count}"
            ),
            Self::StaticAddress { name, region } => {
                write!(f, "static address '{name}' in {region}")
            }
            Self::Registry { project, region } => {
                write!(f, "image registry in {region} (project {project})")
            }
            Self::ServiceAccount {
                account_id,
                project,
            } => write!(f, "service account '{account_id}' (project {project})"),
            Self::CiDisk { name, size_gb, zone } => {
                write!(f, "CI data disk '{name}': {size_gb} GB in {zone}")
            }
        }
    }
}
