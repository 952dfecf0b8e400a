// ABOUTME: Container engine client for Docker and Podman.
// ABOUTME: Auto-detects the local engine socket and wraps bollard.

mod detection;
mod engine;
mod error;
mod traits;
mod types;

pub use detection::detect_local;
pub use engine::BollardEngine;
pub use error::{EngineError, EngineErrorKind};
pub use traits::{ConnectError, EngineOps, ListError, PruneError};
pub use types::{PruneFilter, PruneSummary, RuntimeInfo, RuntimeType};

#[cfg(test)]
pub(crate) use traits::sealed;
