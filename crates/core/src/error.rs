//! Client-side error model.

use thiserror::Error;

/// Result type used across the client core.
pub type StoreResult<T> = Result<T, StoreError>;

/// Deterministic, locally-resolvable failure.
///
/// Keep this focused on validation and state-machine invariants. Network
/// failures belong to the gateway layer and carry their own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A value failed validation (e.g. non-numeric price input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A state-machine invariant was violated (e.g. load-more while exhausted).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl StoreError {
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
