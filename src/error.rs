//! Error types for fragment decoding.
//!
//! The accumulator itself never fails; these cover the wire glue around it.

use thiserror::Error;

/// Errors produced while decoding fragments or parsing value types.
#[derive(Debug, Error)]
pub enum Error {
    /// A fragment line was not valid JSON for the fragment shape.
    #[error("failed to decode fragment: {0}")]
    Decode(#[from] serde_json::Error),
    /// A role tag outside system, user, assistant and tool.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Result alias using the crate [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
