//! HTTP transport client implementation
//!
//! Implements the Transport trait on top of a pooled reqwest client.

use crate::error::{Result, TransportError};
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// HTTP transport implementation
///
/// Handles HTTP requests with:
/// - A per-request timeout covering connect, send and body read
/// - A separate connect timeout
/// - Connection pooling
///
/// Each `send` performs exactly one request.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Arc<ReqwestClient>,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a new HTTP transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
            timeout: config.timeout,
        })
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "Sending HTTP request");
        let started = Instant::now();

        let response = self
            .client
            .request(request.method.clone(), &request.url)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, self.timeout))?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(e, self.timeout))?
            .to_vec();

        debug!(
            status,
            body_size = body.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Received HTTP response"
        );

        Ok(HttpResponse::new(status, body))
    }
}

/// HTTP transport configuration
#[derive(Clone, Debug)]
pub struct HttpTransportConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 10,
        }
    }
}
