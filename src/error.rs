//! Error types for the Option-Ladder-Optimizer library.
//!
//! The optimization core itself never fails on expected edge conditions:
//! an empty or insufficient candidate pool yields `None`, and degenerate
//! pricing inputs yield zero-valued outputs. Errors are reserved for
//! invalid configuration and failures of external collaborators.

use thiserror::Error;

/// Result type alias for the Option-Ladder-Optimizer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the Option-Ladder-Optimizer library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The external candidate source failed to deliver a snapshot.
    #[error("candidate source failure: {0}")]
    Source(String),

    /// Serialization or deserialization failed.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an `InvalidConfig` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates a `Source` error.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}
