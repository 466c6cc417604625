//! Error types for todofetch
//!
//! Every failure of a single fetch is one of `Transport`, `HttpStatus` or
//! `Decode`. The retry loop treats all three the same way. `Interrupted` is
//! only produced by the retry loop itself and ends it.

use thiserror::Error;
use todofetch_transport::TransportError;

/// Result type alias for todofetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for todofetch.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connect failure, timeout).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with anything other than 200.
    #[error("GET failed with status: {code}")]
    HttpStatus {
        /// HTTP status code
        code: u16,
    },

    /// The body was not a JSON array of todos.
    #[error("Failed to decode todos: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backoff wait was cancelled.
    #[error(transparent)]
    Interrupted(#[from] todofetch_core::retry::Interrupted),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl Error {
    /// Status code for `HttpStatus` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { code } => Some(*code),
            _ => None,
        }
    }
}
