//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The expected status code cannot be interpreted as a status code.
    #[error("invalid expected status: {0}")]
    InvalidExpectedStatus(String),

    /// An extraction instruction is not a valid instruction document.
    #[error("invalid instruction: {0}")]
    InvalidInstruction(String),
}
