// ABOUTME: Engine error types with SNAFU pattern.
// ABOUTME: Unifies connectivity and listing errors for programmatic handling.

use snafu::Snafu;

use super::traits::{ConnectError, ListError};

/// Unified fatal engine error: cannot connect or cannot enumerate images.
///
/// Prune failures are deliberately not part of this type; they are non-fatal
/// and folded into the rendered report instead.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum EngineError {
    #[snafu(display("engine connection failed: {source}"))]
    Connect { source: ConnectError },

    #[snafu(display("image listing failed: {source}"))]
    List { source: ListError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    /// No container engine socket found on the system.
    NoEngineFound,
    /// Failed to connect to or ping the engine socket.
    ConnectionFailed,
    /// Engine reachable but image enumeration failed.
    Listing,
}

impl EngineError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> EngineErrorKind {
        match self {
            EngineError::Connect { source } => match source {
                ConnectError::NoEngineFound => EngineErrorKind::NoEngineFound,
                ConnectError::ConnectionFailed(_) => EngineErrorKind::ConnectionFailed,
            },
            EngineError::List { .. } => EngineErrorKind::Listing,
        }
    }
}

impl From<ConnectError> for EngineError {
    fn from(source: ConnectError) -> Self {
        EngineError::Connect { source }
    }
}

impl From<ListError> for EngineError {
    fn from(source: ListError) -> Self {
        EngineError::List { source }
    }
}
