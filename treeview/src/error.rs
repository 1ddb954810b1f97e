//! Error types for tree data loading and key parsing.
//!
//! Interactive operations on the controller never fail; rejected input is a
//! no-op. Errors only surface from the helpers that turn external input
//! (JSON, key names) into typed values, and from opt-in validation.

use thiserror::Error;

/// Errors produced by the tree helpers.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A key identifier that is not one of the navigation keys.
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    /// Two nodes in the same tree share an id.
    #[error("Duplicate node id '{0}'")]
    DuplicateId(String),

    /// Tree data could not be parsed.
    #[error("Invalid tree data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for tree helpers.
pub type Result<T> = std::result::Result<T, TreeError>;
