//! Error types for the core crate

use thiserror::Error;

/// Errors raised while resolving checksum options
///
/// Evaluation itself is infallible: characters missing from a table are
/// skipped and numeric overflow follows IEEE-754 semantics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Alphabet name that is neither Latin nor Greek
    #[error("Unknown alphabet: {0}")]
    UnknownAlphabet(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
