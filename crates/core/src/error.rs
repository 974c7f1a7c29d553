//! Domain error model.

use thiserror::Error;

/// Result type used across the workflow crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Client-side domain error.
///
/// Deterministic failures the workflow layer can produce on its own
/// (validation, state-machine violations, parse failures on ids).
/// Anything involving the remote API belongs in `tillpoint-client`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty count sheet, empty cart).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A workflow invariant was violated (e.g. illegal session transition).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced item is not present in local state.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
