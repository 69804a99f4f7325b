//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings
//! - Spacing requests through the rate limiter
//! - GET requests to fetch page content
//! - Error classification

use crate::config::UserAgentConfig;
use crate::crawler::rate_limiter::RateLimiter;
use reqwest::{redirect::Policy, Client};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Maximum number of redirects followed for a single request
const MAX_REDIRECTS: usize = 10;

/// Why a fetch failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The server answered with a non-2xx status
    Status(u16),

    /// The request timed out
    Timeout,

    /// The connection could not be established (refused, DNS, TLS)
    Connect(String),

    /// Any other transport failure, including redirect errors
    Network(String),

    /// The response body could not be read as text
    Body(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP {}", code),
            Self::Timeout => write!(f, "request timeout"),
            Self::Connect(e) => write!(f, "connection failed: {}", e),
            Self::Network(e) => write!(f, "network error: {}", e),
            Self::Body(e) => write!(f, "failed to read body: {}", e),
        }
    }
}

/// A failed fetch of one URL
#[derive(Debug, Clone, Error)]
#[error("failed to fetch {url}: {cause}")]
pub struct FetchError {
    /// The URL that was requested
    pub url: String,

    /// What went wrong
    pub cause: FetchFailure,
}

impl FetchError {
    fn new(url: &str, cause: FetchFailure) -> Self {
        Self {
            url: url.to_string(),
            cause,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Total per-request timeout
///
/// # Example
///
/// ```no_run
/// use actions_harvest::config::UserAgentConfig;
/// use actions_harvest::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Rate-limited page fetcher
///
/// Every call to [`Fetcher::fetch`] waits on the rate limiter first and
/// stamps it once the attempt has finished, whatever the outcome.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    limiter: RateLimiter,
}

impl Fetcher {
    /// Creates a fetcher from an HTTP client and a rate limiter
    pub fn new(client: Client, limiter: RateLimiter) -> Self {
        Self { client, limiter }
    }

    /// Returns the rate limiter guarding this fetcher
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Fetches a URL and returns its body as text
    ///
    /// # Error Classification
    ///
    /// | Condition | Failure |
    /// |-----------|---------|
    /// | Non-2xx status | `Status(code)` |
    /// | Timeout | `Timeout` |
    /// | Connection refused, DNS, TLS | `Connect` |
    /// | Redirect limit, other transport errors | `Network` |
    /// | Undecodable body | `Body` |
    ///
    /// Failures are returned to the caller, which decides whether they are
    /// fatal and reports them.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.limiter.acquire().await;

        let result = self.request(url).await;
        self.limiter.record_request();

        match &result {
            Ok(body) => tracing::debug!("Fetched {} ({} bytes)", url, body.len()),
            Err(e) => tracing::debug!("Error fetching {}: {}", url, e.cause),
        }

        result
    }

    async fn request(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, classify_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(url, FetchFailure::Status(status.as_u16())));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::new(url, FetchFailure::Body(e.to_string())))
    }
}

/// Maps a transport error onto a fetch failure
fn classify_error(error: &reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout
    } else if error.is_connect() {
        FetchFailure::Connect(error.to_string())
    } else {
        FetchFailure::Network(error.to_string())
    }
}
