//! Crawler module for listing and article fetching
//!
//! This module contains the core crawling logic, including:
//! - Request spacing through a rate limiter
//! - HTTP fetching with typed failures
//! - Listing page link extraction
//! - Article title and content extraction
//! - Overall crawl coordination

mod article;
mod coordinator;
mod fetcher;
mod listing;
mod rate_limiter;

pub use article::{extract_article, ExtractedArticle};
pub use coordinator::{Coordinator, CrawlReport};
pub use fetcher::{build_http_client, FetchError, FetchFailure, Fetcher};
pub use listing::{LinkExtractor, PatternLinkExtractor};
pub use rate_limiter::{Clock, RateLimiter, SystemClock};

use crate::config::Config;
use crate::output::{JsonDirectoryOutput, OutputHandler, PersistSummary};
use crate::HarvestError;

/// Runs a complete harvest
///
/// This is the main entry point for a crawl. It will:
/// 1. Build the HTTP client, rate limiter and link extractor
/// 2. Resolve the listing root and its page count
/// 3. Fetch every listing page and every article on it
/// 4. Write the collected documents and the index to the output directory
///
/// Nothing is written when the listing root is unreachable.
///
/// # Example
///
/// ```no_run
/// use actions_harvest::config::Config;
/// use actions_harvest::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (report, summary) = run_crawl(&Config::default()).await?;
/// println!("{} documents written to {}", report.documents.len(), summary.directory.display());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<(CrawlReport, PersistSummary), HarvestError> {
    let mut coordinator = Coordinator::new(config)?;
    let report = coordinator.collect_all().await?;

    let output = JsonDirectoryOutput::new(&config.output.directory);
    let summary = output.persist(&report.documents)?;

    Ok((report, summary))
}
