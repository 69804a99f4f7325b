//! Configuration module for Actions-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing configuration file is not an error at this layer: callers fall back
//! to [`Config::default`], which reproduces the stock whitehouse.gov crawl.
//!
//! # Example
//!
//! ```no_run
//! use actions_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawling listing: {}", config.crawler.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_BASE_URL,
    DEFAULT_MIN_REQUEST_DELAY_MS, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, read_config, read_config_with_hash};
pub use validation::validate;
