//! Error types for path-utils

use std::path::PathBuf;

/// Result type for path-utils operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in path-utils operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Path is Empty")]
    EmptyPath,

    #[error("File must be {expected} type '.{expected}': {path}")]
    InvalidExtension {
        path: String,
        expected: &'static str,
    },

    #[error(
        "Path '{path}' contains an empty name | Like : 'path/to//path' or 'path/to/ /path'"
    )]
    EmptyPathSegment { path: String },

    #[error("Data must be not null")]
    NullData,

    #[error("Error To Create Directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error To Create File '{path}': {source}")]
    FileCreation {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("Failed to read {path}: {message}")]
    ReadFailure { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize content for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ReadFailure {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
