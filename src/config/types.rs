use serde::Deserialize;

/// Listing root crawled when no configuration overrides it
pub const DEFAULT_BASE_URL: &str = "https://www.whitehouse.gov/presidential-actions/";

/// Default minimum spacing between two outbound requests (milliseconds)
pub const DEFAULT_MIN_REQUEST_DELAY_MS: u64 = 1000;

/// Default per-request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default output directory for harvested documents
pub const DEFAULT_OUTPUT_DIR: &str = "presidential_actions";

/// Main configuration structure for Actions-Harvest
///
/// Every section is optional in the TOML file; missing sections fall back
/// to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Listing root URL; page N lives at `{base-url}page/N/`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Minimum time between two requests (milliseconds)
    #[serde(rename = "min-request-delay")]
    pub min_request_delay: u64,

    /// Per-request timeout enforced by the HTTP client (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_request_delay: DEFAULT_MIN_REQUEST_DELAY_MS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "ActionsHarvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving one JSON file per document plus `index.json`
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}
