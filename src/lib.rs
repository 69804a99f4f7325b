//! Actions-Harvest: a polite listing harvester
//!
//! This crate walks a paginated listing of presidential actions, follows every
//! listing entry to its article page, extracts the title and body text, and
//! writes each article plus a summary index as JSON records.

pub mod config;
pub mod crawler;
pub mod document;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Actions-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Listing root {url} is unreachable: {source}")]
    RootUnreachable {
        url: String,
        source: crawler::FetchError,
    },

    #[error("Invalid crawl phase transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::CrawlPhase,
        to: state::CrawlPhase,
    },

    #[error("Invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),

    #[error("Listing URL must end with '/': {0}")]
    NotADirectory(String),
}

/// Result type alias for Actions-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, CrawlReport};
pub use document::{Document, PersistedIndex};
pub use state::{ArticleState, CrawlPhase};
