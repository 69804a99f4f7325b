//! Crawler coordinator - main crawl orchestration logic
//!
//! This module drives the pagination state machine:
//! - Resolving the listing root and the total page count
//! - Fetching each listing page in order
//! - Fetching and extracting every article listed on a page
//! - Isolating per-page and per-article failures
//! - Accumulating documents in page-then-discovery order

use crate::config::Config;
use crate::crawler::article::extract_article;
use crate::crawler::fetcher::{build_http_client, Fetcher};
use crate::crawler::listing::{LinkExtractor, PatternLinkExtractor};
use crate::crawler::rate_limiter::RateLimiter;
use crate::document::Document;
use crate::state::{ArticleState, CrawlPhase};
use crate::url::{listing_pages, parse_listing_url, ListingPage};
use crate::HarvestError;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use url::Url;

/// Everything a completed crawl produced
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Collected documents in page-then-discovery order
    pub documents: Vec<Document>,

    /// Number of listing pages the listing root advertised
    pub total_pages: u32,

    /// Listing pages that could not be fetched
    pub pages_failed: u32,

    /// Article URLs visited, by outcome
    pub article_outcomes: HashMap<ArticleState, u64>,
}

impl CrawlReport {
    fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            ..Self::default()
        }
    }

    fn record(&mut self, state: ArticleState) {
        *self.article_outcomes.entry(state).or_insert(0) += 1;
    }

    /// Returns how many article URLs ended in `state`
    pub fn count(&self, state: ArticleState) -> u64 {
        self.article_outcomes.get(&state).copied().unwrap_or(0)
    }

    /// Returns true if the listing was reachable but nothing was collected
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Main crawler coordinator structure
///
/// The coordinator owns the fetcher (and through it the rate limiter), so
/// every request of a crawl is spaced by the same limiter.
pub struct Coordinator<E = PatternLinkExtractor> {
    base_url: Url,
    fetcher: Fetcher,
    extractor: E,
    phase: CrawlPhase,
}

impl Coordinator<PatternLinkExtractor> {
    /// Creates a coordinator from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HarvestError)` - Invalid listing URL or HTTP client failure
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let base_url = parse_listing_url(&config.crawler.base_url)?;

        let client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.crawler.request_timeout),
        )?;
        let limiter = RateLimiter::new(Duration::from_millis(config.crawler.min_request_delay));
        let extractor = PatternLinkExtractor::for_listing(&base_url)?;

        Ok(Self::with_parts(
            base_url,
            Fetcher::new(client, limiter),
            extractor,
        ))
    }
}

impl<E: LinkExtractor> Coordinator<E> {
    /// Assembles a coordinator from already-built parts
    pub fn with_parts(base_url: Url, fetcher: Fetcher, extractor: E) -> Self {
        Self {
            base_url,
            fetcher,
            extractor,
            phase: CrawlPhase::Init,
        }
    }

    /// Returns the listing root this coordinator crawls
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the current crawl phase
    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    /// Collects every document reachable from the listing
    ///
    /// Page and article failures are logged and skipped; they never abort
    /// the crawl. The only failure that does is an unreachable listing root,
    /// which is reported as [`HarvestError::RootUnreachable`] so it can be
    /// told apart from a reachable listing with nothing on it.
    pub async fn collect_all(&mut self) -> Result<CrawlReport, HarvestError> {
        self.phase = CrawlPhase::Init;

        let root_html = self
            .fetcher
            .fetch(self.base_url.as_str())
            .await
            .map_err(|source| HarvestError::RootUnreachable {
                url: self.base_url.to_string(),
                source,
            })?;

        let total_pages = self.extractor.max_page_number(&root_html);
        tracing::info!("Found {} pages to process", total_pages);

        let mut report = CrawlReport::new(total_pages);
        let mut root_html = Some(root_html);
        let base_url = self.base_url.clone();

        self.transition(CrawlPhase::Paging { page: 1 })?;

        for page in listing_pages(&base_url, total_pages) {
            // The root document is listing page 1; reuse it instead of fetching twice.
            let cached = if page.number == 1 {
                root_html.take()
            } else {
                None
            };

            match self.listing_html(&page, cached).await {
                Some(html) => {
                    self.transition(CrawlPhase::PerArticle { page: page.number })?;
                    self.collect_page_articles(&html, &mut report).await;
                }
                None => report.pages_failed += 1,
            }

            self.transition(CrawlPhase::after_page(page.number, total_pages))?;
        }

        tracing::info!(
            "Crawl finished: {} documents from {} pages ({} pages failed)",
            report.documents.len(),
            report.total_pages,
            report.pages_failed
        );

        Ok(report)
    }

    /// Returns the HTML of a listing page, or None if it could not be fetched
    async fn listing_html(&self, page: &ListingPage, cached: Option<String>) -> Option<String> {
        if let Some(html) = cached {
            return Some(html);
        }

        tracing::debug!("Fetching listing page {}: {}", page.number, page.url);
        match self.fetcher.fetch(page.url.as_str()).await {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::warn!(
                    "Skipping listing page {} ({}): {}",
                    page.number,
                    e.url,
                    e.cause
                );
                None
            }
        }
    }

    /// Visits every article listed in `html`, in order
    ///
    /// A URL repeated on the same page is visited once; repeats across pages
    /// are visited again.
    async fn collect_page_articles(&self, html: &str, report: &mut CrawlReport) {
        let urls = self.extractor.article_urls(html);
        tracing::debug!("Found {} article links on page", urls.len());

        let mut seen = HashSet::new();
        for url in urls {
            let state = if seen.insert(url.clone()) {
                self.collect_article(&url, &mut report.documents).await
            } else {
                ArticleState::Duplicate
            };
            report.record(state);
        }
    }

    /// Fetches and extracts one article, appending it to `documents` if complete
    async fn collect_article(&self, url: &str, documents: &mut Vec<Document>) -> ArticleState {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Skipping article {}: {}", e.url, e.cause);
                return ArticleState::FetchFailed;
            }
        };

        let article = extract_article(&html, url);
        if article.is_empty() {
            tracing::debug!("Nothing extracted from {}", url);
            return ArticleState::Empty;
        }
        if !article.is_complete() {
            tracing::debug!(
                "Skipping {}: title {:?}, {} bytes of content",
                url,
                article.title,
                article.content.len()
            );
            return ArticleState::Incomplete;
        }

        match Document::new(article.title, article.content) {
            Some(document) => {
                tracing::info!("Collected: {}", document.title);
                documents.push(document);
                ArticleState::Collected
            }
            None => ArticleState::Incomplete,
        }
    }

    fn transition(&mut self, next: CrawlPhase) -> Result<(), HarvestError> {
        if !self.phase.can_transition_to(&next) {
            return Err(HarvestError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }

        tracing::trace!("Crawl phase {} -> {}", self.phase, next);
        self.phase = next;
        Ok(())
    }
}
