//! Errors raised by the file-backed repositories.

use std::path::PathBuf;

use sequent_application::ApplicationError;

use crate::serialization::SerializationError;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No file exists at any candidate path.
    #[error("not found: {0}")]
    NotFound(String),

    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not valid.
    #[error("failed to decode {path}: {source}")]
    Serialization {
        /// File that failed.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: SerializationError,
    },
}

impl RepositoryError {
    /// Maps an I/O error on `path`, keeping `NotFound` distinct.
    pub(crate) fn from_io(path: PathBuf, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.display().to_string())
        } else {
            Self::Io {
                path,
                source: error,
            }
        }
    }

    /// Converts into the application error for the named suite.
    #[must_use]
    pub fn into_suite_error(self, name: &str) -> ApplicationError {
        match self {
            Self::NotFound(_) => ApplicationError::SuiteNotFound(name.to_string()),
            Self::Io { .. } => ApplicationError::Storage(self.to_string()),
            Self::Serialization { source, .. } => ApplicationError::InvalidSuite {
                name: name.to_string(),
                message: source.to_string(),
            },
        }
    }
}
