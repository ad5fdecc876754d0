//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Catalog operations themselves are total and signal absence through `bool`
/// and empty results. This type only covers decoding commands at the edge.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A command could not be decoded (e.g. malformed JSON, unknown `op`).
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Empty command input (blank or whitespace-only).
    #[error("unsupported command: {0}")]
    Unsupported(String),
}

impl DomainError {
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}
