//! Error types for presence-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresenceError {
    /// The caller-supplied `time` query parameter was not a valid clock time.
    #[error("invalid time parameter: {0:?}")]
    InvalidTimeParam(String),

    /// A persistence collaborator failed a read or write.
    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PresenceError>;
