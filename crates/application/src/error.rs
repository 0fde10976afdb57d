//! Application error types

use thiserror::Error;

/// Application-level errors.
///
/// Only failures that prevent a run from starting are represented here.
/// Anything that goes wrong inside a step is recorded in that step's result.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The named suite does not exist in the suite source.
    #[error("suite not found: {0}")]
    SuiteNotFound(String),

    /// The suite exists but could not be decoded.
    #[error("invalid suite '{name}': {message}")]
    InvalidSuite {
        /// Suite name or path.
        name: String,
        /// Decoder message.
        message: String,
    },

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
