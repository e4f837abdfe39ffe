//! Cross-cutting error types for Ballot.
//!
//! Transport and session errors live in their own crates (`ApiError` in
//! `ballot-client`, `AuthError` in `ballot-auth`). This module holds the
//! errors raised while building or checking domain values on the client.

use thiserror::Error;

/// Errors that can be raised by any Ballot crate before a request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required field is missing or a value is malformed.
    #[error("{0}")]
    Validation(String),

    /// A status transition was requested that only moves backwards or skips a stage.
    #[error("Invalid state transition: election {id} from {from} to {to}")]
    InvalidTransition { id: String, from: String, to: String },

    /// A value could not be parsed from user input.
    #[error("Could not parse {field}: {reason}")]
    Parse { field: String, reason: String },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
