//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was missing or empty.
    #[error("Validation failed: `{field}` is required")]
    Validation { field: &'static str },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
///
/// A missing record is never an error here: lookups return `None` and
/// deletes report a zero count.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
