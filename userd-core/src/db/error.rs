//! Error types for the database layer

use thiserror::Error;

/// Database error type.
///
/// `Connection` covers failures to open the store at all; `Sqlx` covers
/// anything raised by statement execution, including primary-key constraint
/// violations. Zero-row lookups are not errors and never appear here.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to open database connection: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid user id stored in database: {0}")]
    InvalidId(#[from] uuid::Error),
}
