//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing todo domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}
