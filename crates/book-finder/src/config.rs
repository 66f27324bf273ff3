//! Configuration for the book catalog client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Google Books volumes endpoint.
    pub const CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";

    /// Path of the volumes endpoint, relative to a mock server root.
    pub const VOLUMES_PATH: &str = "/books/v1/volumes";

    /// Name of the query parameter carrying the search text.
    pub const QUERY_PARAM: &str = "q";

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum idle keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("book-finder/", env!("CARGO_PKG_VERSION"));
}

/// Environment variable overriding the catalog endpoint.
pub const CATALOG_URL_ENV: &str = "BOOK_FINDER_CATALOG_URL";

/// Environment variable setting a whole-request timeout in seconds.
pub const TIMEOUT_ENV: &str = "BOOK_FINDER_TIMEOUT_SECS";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the volumes endpoint (overridable for mock servers).
    pub catalog_url: String,

    /// Whole-request timeout. `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration pointing at the given catalog endpoint.
    #[must_use]
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            request_timeout: None,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Set a whole-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Create a test configuration with a mock server base URL.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            catalog_url: format!("{}{}", base_url, api::VOLUMES_PATH),
            request_timeout: Some(Duration::from_secs(5)),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if `BOOK_FINDER_TIMEOUT_SECS` is not a whole number.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns error if the timeout variable is not a whole number.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_url = lookup(CATALOG_URL_ENV).unwrap_or_else(|| api::CATALOG_URL.to_string());
        let mut config = Self::new(catalog_url);

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid {TIMEOUT_ENV} value {raw:?}: {e}"))?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::CATALOG_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.catalog_url, api::CATALOG_URL);
        assert!(config.request_timeout.is_none());
        assert_eq!(config.connect_timeout, api::CONNECT_TIMEOUT);
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:4000");
        assert_eq!(config.catalog_url, "http://127.0.0.1:4000/books/v1/volumes");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_with_request_timeout() {
        let config = Config::default().with_request_timeout(Duration::from_secs(3));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
    }
}
