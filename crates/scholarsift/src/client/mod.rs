//! arXiv export API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - Polite rate limiting (the arXiv ToS ask for 3 s between requests)
//! - Response caching so a search followed by an export hits arXiv once

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{AtomFeed, Paper, SearchQuery, SearchResult, normalize_whitespace};

/// arXiv export API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Parsed-response cache.
    cache: Cache<String, SearchResult>,

    /// API base URL, e.g. `https://export.arxiv.org/api`.
    api_base_url: String,

    /// Delay before each upstream request.
    rate_limit_delay: Duration,

    /// Upper bound on results per search.
    max_results_cap: usize,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            api::USER_AGENT.parse().expect("valid user-agent header"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(3);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client,
            cache,
            api_base_url: config.api_base_url,
            rate_limit_delay: config.rate_limit_delay,
            max_results_cap: config.max_results_cap,
        })
    }

    /// Search for papers matching a query.
    ///
    /// # Errors
    ///
    /// Returns error for a blank query, on API failure, or when arXiv
    /// rejects the query.
    pub async fn search(&self, query: &SearchQuery) -> ClientResult<SearchResult> {
        if query.is_blank() {
            return Err(ClientError::bad_request("query must not be empty"));
        }

        let search_query = query.search_query();
        let max_results = query.max_results.min(self.max_results_cap);

        let mut params = vec![
            ("search_query".to_string(), search_query.clone()),
            ("start".to_string(), query.start.to_string()),
            ("max_results".to_string(), max_results.to_string()),
        ];

        if query.sort_by != crate::models::SortBy::Relevance {
            params.push(("sortBy".to_string(), query.sort_by.api_value().to_string()));
            params.push(("sortOrder".to_string(), query.sort_order.api_value().to_string()));
        }

        self.fetch(&search_query, &params).await
    }

    /// Fetch specific papers by arXiv id (with or without version suffix).
    ///
    /// Unknown ids yield blank placeholder entries upstream; those are
    /// filtered out here.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_by_ids(&self, ids: &[String]) -> ClientResult<Vec<Paper>> {
        let id_list = ids.join(",");
        let params = vec![
            ("id_list".to_string(), id_list.clone()),
            ("max_results".to_string(), ids.len().to_string()),
        ];

        let result = self.fetch(&id_list, &params).await?;
        Ok(result.papers.into_iter().filter(|p| !p.title.is_empty()).collect())
    }

    /// Issue a query request, going through the cache.
    async fn fetch(&self, label: &str, params: &[(String, String)]) -> ClientResult<SearchResult> {
        let url = format!("{}/query", self.api_base_url);

        let cache_key = cache_key(&url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            tracing::debug!(query = label, "Cache hit");
            return Ok(cached);
        }

        // Rate limit
        tokio::time::sleep(self.rate_limit_delay).await;

        let response = self.client.get(&url).query(params).send().await?;
        let response = handle_response(response).await?;
        let body = response.text().await?;

        let feed: AtomFeed = quick_xml::de::from_str(&body)?;
        let result = feed_to_result(label, feed)?;

        self.cache.insert(cache_key, result.clone()).await;
        Ok(result)
    }
}

/// Convert a parsed feed into a result set, surfacing arXiv error entries.
fn feed_to_result(query: &str, feed: AtomFeed) -> ClientResult<SearchResult> {
    if let Some(error) = feed.entries.iter().find(|e| e.is_error_entry()) {
        return Err(ClientError::feed(normalize_whitespace(&error.summary)));
    }

    Ok(SearchResult {
        query: query.to_string(),
        total: feed.total_results,
        start: feed.start_index,
        papers: feed.entries.into_iter().map(Paper::from).collect(),
    })
}

/// Map API response status codes onto client errors.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        429 => {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);

            Err(ClientError::rate_limited(retry_after))
        }
        400 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::bad_request(text))
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::not_found(text))
        }
        500..=599 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::server(status.as_u16(), text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
        }
    }
}

/// Generate a cache key from the request URL and parameters.
fn cache_key(url: &str, params: &[(String, String)]) -> String {
    use md5::{Digest, Md5};

    let mut hasher = Md5::new();
    hasher.update(url.as_bytes());
    hasher.update(b"|");

    for (k, v) in params {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    format!("{:x}", hasher.finalize())
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient").field("api_base_url", &self.api_base_url).finish()
    }
}
