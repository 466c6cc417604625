//! Main client implementation

use std::sync::Arc;
use std::time::Duration;

use todofetch_transport::{HttpTransport, Transport};

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    resources::Todos,
};

/// Client for the todos API.
///
/// Cheap to clone; clones share the same transport.
///
/// # Example
///
/// ```rust,no_run
/// use todofetch::Client;
///
/// # async fn example() -> todofetch::Result<()> {
/// let client = Client::new()?;
/// let todos = client.todos().list().await?;
/// println!("{} todos", todos.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl Client {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Create a builder for a configured client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client backed by a reqwest transport built from `config`.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(config.transport_config())
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(ClientInner { transport, config }),
        }
    }

    /// Access the todos resource.
    pub fn todos(&self) -> Todos {
        Todos::new(self.clone())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a configured Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the maximum number of fetch attempts.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Set the wait after the first failed attempt.
    pub fn initial_backoff(mut self, delay: Duration) -> Self {
        self.config.initial_backoff = delay;
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .base_url("http://localhost:9999")
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(1))
            .max_attempts(5)
            .initial_backoff(Duration::from_millis(10))
            .build()
            .expect("Failed to build client");

        let config = client.config();
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.initial_backoff, Duration::from_millis(10));
    }

    #[test]
    fn test_client_new_uses_defaults() {
        let client = Client::new().expect("Failed to build client");
        assert_eq!(client.config(), &ClientConfig::default());
    }

    #[test]
    fn test_client_clone_shares_inner() {
        let client1 = Client::new().unwrap();
        let client2 = client1.clone();
        assert!(Arc::ptr_eq(&client1.inner, &client2.inner));
    }
}
