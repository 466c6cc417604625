//! Configuration for the todofetch client

use std::time::Duration;
use todofetch_core::retry::ExponentialBackoff;
use todofetch_transport::HttpTransportConfig;

/// Base URL of the public JSONPlaceholder API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Configuration for the todofetch client.
///
/// Everything is static: there is no environment or file lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; the collection lives at `<base_url>/todos`
    pub base_url: String,

    /// Timeout for a single request
    pub timeout: Duration,

    /// Timeout for establishing a connection
    pub connect_timeout: Duration,

    /// Maximum number of fetch attempts, the first one included
    pub max_attempts: u32,

    /// Wait after the first failed attempt; doubles after each further failure
    pub initial_backoff: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(30),
            max_attempts: 3,
            initial_backoff: Duration::from_millis(2000),
        }
    }
}

impl ClientConfig {
    /// Full URL for `path`, tolerating a trailing `/` on the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Settings for the underlying HTTP transport.
    pub fn transport_config(&self) -> HttpTransportConfig {
        HttpTransportConfig {
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            ..Default::default()
        }
    }

    /// Backoff schedule for fetches made with this configuration.
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::builder()
            .max_attempts(self.max_attempts)
            .initial_delay(self.initial_backoff)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todofetch_core::retry::BackoffStrategy;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.initial_backoff, Duration::from_secs(2));
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        let mut config = ClientConfig::default();
        assert_eq!(
            config.endpoint("/todos"),
            "https://jsonplaceholder.typicode.com/todos"
        );

        config.base_url = "http://127.0.0.1:8080/".to_string();
        assert_eq!(config.endpoint("todos"), "http://127.0.0.1:8080/todos");
    }

    #[test]
    fn test_backoff_follows_config() {
        let config = ClientConfig {
            max_attempts: 4,
            initial_backoff: Duration::from_millis(50),
            ..Default::default()
        };

        let backoff = config.backoff();
        assert_eq!(backoff.max_attempts(), 4);
        assert_eq!(backoff.next_delay(0), Some(Duration::from_millis(50)));
        assert_eq!(backoff.next_delay(1), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_transport_config_carries_timeouts() {
        let config = ClientConfig {
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Default::default()
        };

        let transport = config.transport_config();
        assert_eq!(transport.timeout, Duration::from_secs(5));
        assert_eq!(transport.connect_timeout, Duration::from_secs(2));
    }
}
