// ABOUTME: Engine operations trait for container runtimes.
// ABOUTME: Ping, inventory listing, and image pruning.

use super::types::{PruneFilter, PruneSummary};
use crate::types::ImageInventory;
use async_trait::async_trait;

/// Sealed trait to prevent external implementations.
///
/// This pattern allows us to add new methods to traits without breaking
/// semver. Only our internal engine types can implement the engine trait.
pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Operations the cleanup pipeline needs from a container engine.
#[async_trait]
pub trait EngineOps: sealed::Sealed + Send + Sync {
    /// Ping the engine to check connectivity.
    async fn ping(&self) -> Result<(), ConnectError>;

    /// Snapshot every image the engine knows about, including intermediates.
    async fn list_images(&self) -> Result<ImageInventory, ListError>;

    /// Prune images matching the filter.
    async fn prune_images(&self, filter: &PruneFilter) -> Result<PruneSummary, PruneError>;
}

/// Errors establishing or verifying engine connectivity.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("no container engine found (checked Podman and Docker sockets)")]
    NoEngineFound,

    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// Errors enumerating images.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("failed to list images: {0}")]
    Runtime(String),
}

/// Errors from the prune operation itself.
#[derive(Debug, thiserror::Error)]
pub enum PruneError {
    #[error("a prune operation is already running: {0}")]
    AlreadyRunning(String),

    #[error("prune failed: {0}")]
    Runtime(String),
}
