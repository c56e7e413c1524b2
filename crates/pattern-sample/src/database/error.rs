//! Error types for the shared database resource.

use thiserror::Error;

/// Errors that can occur while querying the database.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// The backing store cannot be reached.
    #[error("Resource unavailable: {0}")]
    Unavailable(String),

    /// The statement is empty or otherwise unusable.
    #[error("Invalid statement: {0:?}")]
    InvalidStatement(String),
}
