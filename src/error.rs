// ABOUTME: Application-wide error types for sarono.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::runtime::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid duration {value:?}: {source}")]
    InvalidDuration {
        value: String,
        source: humantime::DurationError,
    },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, Error>;
