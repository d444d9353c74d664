//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is fatal for the statement being generated: callers get the
/// error back and no partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A play carries a genre the pricing rules do not know.
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    /// A performance references a play id missing from the catalogue.
    #[error("play not found: {0}")]
    PlayNotFound(String),

    /// A value failed validation (e.g. malformed input or configuration).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre(genre.into())
    }

    pub fn play_not_found(play_id: impl Into<String>) -> Self {
        Self::PlayNotFound(play_id.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
