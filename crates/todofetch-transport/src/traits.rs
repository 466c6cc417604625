//! Transport trait and request/response types

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Method;

/// Outgoing HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,

    /// Request URL
    pub url: String,
}

impl HttpRequest {
    /// Create a new HTTP request
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }
}

/// HTTP response as received, body fully buffered
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the status is exactly 200 OK
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Parse response body as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

/// Sends one request and returns one response.
///
/// Implementations must not retry; a non-2xx status is a successful send.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and receive a response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
