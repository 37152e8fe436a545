//! Repository-level error types.

use thiserror::Error;

/// Store failures surfaced by every repository operation.
///
/// Each variant keeps the message reported by the store. Absence of a
/// record on lookup is never an error; lookups return `Option` or an
/// empty `Vec` instead.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
