//! Common error types for bandroll

use thiserror::Error;

/// Common result type for bandroll operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the service and the seed tool
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True when the underlying database rejected a write because of a
    /// NOT NULL, CHECK, UNIQUE or FOREIGN KEY constraint.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Error::Database(sqlx::Error::Database(db_err)) => !matches!(
                db_err.kind(),
                sqlx::error::ErrorKind::Other
            ),
            _ => false,
        }
    }
}
