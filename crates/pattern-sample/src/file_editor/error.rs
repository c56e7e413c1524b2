//! Error types for the file editor.

use thiserror::Error;

/// Errors that can occur during editor operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    /// `save_file` was called before any file was opened.
    #[error("No file is open")]
    NoOpenFile,

    /// The path given to `open_file` is empty.
    #[error("Invalid path: {0:?}")]
    InvalidPath(String),
}
