//! Client configuration

use std::time::Duration;

use stardots_auth::Credentials;

use crate::transport::DEFAULT_TIMEOUT;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.stardots.io";

/// Client configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// API endpoint URL
    pub endpoint: String,
    /// Credential pair used to sign every request
    pub credentials: Credentials,
    /// Per-call request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Config {
    /// Configuration for the public endpoint with the given credential pair
    pub fn new(client_key: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credentials: Credentials::new(client_key, client_secret),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("stardots-sdk-rust/{}", stardots_auth::SDK_VERSION),
        }
    }

    /// Point the client at a different endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("key", "secret");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("stardots-sdk-rust/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new("key", "secret")
            .with_endpoint("http://localhost:9000")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.endpoint, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
