//! Configuration for the jrpc client

use jrpc_protocol::DEFAULT_ENDPOINT;
use std::time::Duration;

/// Configuration for the jrpc client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full endpoint URL the client posts to
    pub endpoint: String,
    /// Request timeout; `None` leaves the wait bounded only by the transport
    pub timeout: Option<Duration>,
    /// Maximum number of idle connections per host
    pub max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Some(Duration::from_secs(30)),
            max_idle_per_host: 10,
        }
    }
}

impl ClientConfig {
    /// Create a new builder for client configuration
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: Option<String>,
    timeout: Option<Option<Duration>>,
    max_idle_per_host: Option<usize>,
}

impl ClientConfigBuilder {
    /// Set the endpoint URL
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(Some(timeout));
        self
    }

    /// Disable the request timeout, deferring to the transport's default
    pub fn no_timeout(mut self) -> Self {
        self.timeout = Some(None);
        self
    }

    /// Set the maximum number of idle connections per host
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = Some(max);
        self
    }

    /// Build the client configuration
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            endpoint: self.endpoint.unwrap_or(defaults.endpoint),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            max_idle_per_host: self.max_idle_per_host.unwrap_or(defaults.max_idle_per_host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/jrpc");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::builder()
            .endpoint("http://localhost:9000/jrpc")
            .timeout(Duration::from_secs(5))
            .max_idle_per_host(2)
            .build();
        assert_eq!(config.endpoint, "http://localhost:9000/jrpc");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.max_idle_per_host, 2);
    }

    #[test]
    fn test_builder_no_timeout() {
        let config = ClientConfig::builder().no_timeout().build();
        assert_eq!(config.timeout, None);
    }
}
