//! Error types for OBJ/MTL export and import.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for OBJ/MTL operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors that can occur while writing or reading OBJ/MTL files.
#[derive(Debug, Error)]
pub enum ObjError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error while reading or writing a file.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written when the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ObjError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Create an `Io` error for the given path.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Map a file-open error, turning `NotFound` into `FileNotFound`.
    pub(crate) fn open(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::io(path, source)
        }
    }
}
