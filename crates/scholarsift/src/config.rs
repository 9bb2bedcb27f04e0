//! Configuration for the ScholarSift service.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the arXiv export API.
    pub const BASE_URL: &str = "https://export.arxiv.org/api";

    /// Request timeout (arXiv can be slow on large result sets).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay between upstream requests. The arXiv API terms of use ask
    /// clients to wait 3 seconds between calls.
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(3);

    /// Cache TTL (10 minutes; search followed by export must hit cache).
    pub const CACHE_TTL: Duration = Duration::from_secs(600);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 200;

    /// Default number of results per search.
    pub const DEFAULT_MAX_RESULTS: usize = 5;

    /// Upper bound on results per search. The arXiv API accepts more, but
    /// the export documents are meant for skim-reading, not harvesting.
    pub const MAX_RESULTS_CAP: usize = 100;

    /// User agent sent with every request, as the arXiv API guidelines ask.
    pub const USER_AGENT: &str = concat!("scholarsift/", env!("CARGO_PKG_VERSION"));
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the arXiv export API (for testing with mock servers).
    pub api_base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay between upstream requests.
    pub rate_limit_delay: Duration,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,

    /// Default number of results per search.
    pub default_max_results: usize,

    /// Upper bound on results per search.
    pub max_results_cap: usize,
}

impl Config {
    /// Create the production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay: api::RATE_LIMIT_DELAY,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            default_max_results: api::DEFAULT_MAX_RESULTS,
            max_results_cap: api::MAX_RESULTS_CAP,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_base_url: format!("{base_url}/api"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            cache_ttl: Duration::from_secs(60),
            cache_max_size: 10,
            default_max_results: api::DEFAULT_MAX_RESULTS,
            max_results_cap: api::MAX_RESULTS_CAP,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// `SCHOLARSIFT_API_URL` overrides the arXiv base URL (useful behind
    /// an institutional mirror or proxy).
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();
        if let Ok(url) = std::env::var("SCHOLARSIFT_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    /// Clamp a requested result count to `[1, max_results_cap]`, applying
    /// the default when absent.
    #[must_use]
    pub fn clamp_max_results(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_max_results).clamp(1, self.max_results_cap)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, api::BASE_URL);
        assert_eq!(config.rate_limit_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_for_testing_appends_api_path() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999/api");
        assert_eq!(config.rate_limit_delay, Duration::from_millis(0));
    }

    #[test]
    fn test_clamp_max_results() {
        let config = Config::default();
        assert_eq!(config.clamp_max_results(None), api::DEFAULT_MAX_RESULTS);
        assert_eq!(config.clamp_max_results(Some(0)), 1);
        assert_eq!(config.clamp_max_results(Some(7)), 7);
        assert_eq!(config.clamp_max_results(Some(10_000)), api::MAX_RESULTS_CAP);
    }
}
