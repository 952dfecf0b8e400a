// ABOUTME: Runtime type definitions for Docker and Podman.
// ABOUTME: Includes RuntimeType, detected socket info, and prune parameters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::HashSet;
use std::time::Duration;

/// The container runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    Docker,
    Podman,
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeType::Docker => write!(f, "docker"),
            RuntimeType::Podman => write!(f, "podman"),
        }
    }
}

/// Detected runtime information.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    /// The type of runtime detected.
    pub runtime_type: RuntimeType,
    /// Path to the runtime socket.
    pub socket_path: String,
}

/// Which images a prune operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneFilter {
    /// Unused images created longer ago than the given age.
    Until(Duration),
    /// Every unused image regardless of age (`image prune -a` semantics).
    AllUnused,
}

impl PruneFilter {
    /// Engine-side filter map for the prune endpoint.
    ///
    /// Ages are normalized to seconds so any parsed span round-trips through
    /// the engine's Go-style duration parser.
    pub fn to_engine_filters(&self) -> HashMap<String, Vec<String>> {
        let mut filters = HashMap::new();
        match self {
            PruneFilter::Until(age) => {
                filters.insert("until".to_string(), vec![format!("{}s", age.as_secs())]);
            }
            PruneFilter::AllUnused => {
                filters.insert("dangling".to_string(), vec!["false".to_string()]);
            }
        }
        filters
    }
}

impl std::fmt::Display for PruneFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneFilter::Until(age) => {
                write!(f, "unused images older than {}", humantime::format_duration(*age))
            }
            PruneFilter::AllUnused => write!(f, "all unused images"),
        }
    }
}

/// What the engine reported back from a successful prune call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneSummary {
    /// Aggregate bytes reclaimed, as accounted by the engine.
    pub space_reclaimed: u64,
    /// Identities the engine claims to have deleted, prefix-stripped.
    pub deleted_ids: HashSet<String>,
}
