//! Transport error types

use std::time::Duration;
use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while sending a request
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection could not be established
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request did not complete in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Any other failure while sending the request or reading the body
    #[error("HTTP error: {0}")]
    Http(String),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl TransportError {
    /// Classify a reqwest error, attributing timeouts to `timeout`.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}
