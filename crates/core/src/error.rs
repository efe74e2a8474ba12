//! Error model for the domain layer.
//!
//! Only deterministic business failures live here; locking, IO and
//! authorization have their own error types closer to where they happen.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input that fails a business rule (blank name, blank email, ...).
    #[error("invalid input: {0}")]
    Validation(String),

    /// A structural rule of the model was about to be broken.
    #[error("domain invariant broken: {0}")]
    InvariantViolation(String),

    /// An identifier that could not be parsed.
    #[error("malformed id: {0}")]
    InvalidId(String),

    /// The addressed record does not exist.
    #[error("no such record")]
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
