//! Listing page link extraction
//!
//! Two questions are asked of every listing page: how many pages does the
//! listing have, and which article URLs does this page mention.
//!
//! Article URLs are found by matching the canonical article URL shape against
//! the raw markup instead of walking `<a>` elements, because the listing embeds
//! article URLs in data attributes and inline JSON as well as in links. The
//! pattern is brittle against markup changes by nature, so it sits behind the
//! [`LinkExtractor`] trait and the coordinator never sees it.

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::url::{listing_origin, listing_section};

/// Extracts pagination and article links from listing pages
pub trait LinkExtractor {
    /// Returns the highest page number linked from `html`, or 1 if none
    fn max_page_number(&self, html: &str) -> u32;

    /// Returns every article URL in `html`, in document order, duplicates included
    fn article_urls(&self, html: &str) -> Vec<String>;
}

/// Pattern-based extractor for WordPress-style listings
///
/// For a listing rooted at `https://host/section/` it recognizes:
///
/// - pagination links ending in `section/page/<n>/` (trailing slash optional)
/// - article URLs of the form `https://host/section/YYYY/MM/<slug>`, where
///   the slug stops at `/`, whitespace, quotes, `<`, `>`, `?`, `#` or `\`
#[derive(Debug, Clone)]
pub struct PatternLinkExtractor {
    page_pattern: Regex,
    article_pattern: Regex,
}

impl PatternLinkExtractor {
    /// Builds the patterns for the listing rooted at `base`
    ///
    /// # Example
    ///
    /// ```
    /// use actions_harvest::crawler::{LinkExtractor, PatternLinkExtractor};
    /// use actions_harvest::url::parse_listing_url;
    ///
    /// let base = parse_listing_url("https://www.whitehouse.gov/presidential-actions/").unwrap();
    /// let extractor = PatternLinkExtractor::for_listing(&base).unwrap();
    ///
    /// let html = r#"<a href="https://www.whitehouse.gov/presidential-actions/page/12/">12</a>"#;
    /// assert_eq!(extractor.max_page_number(html), 12);
    /// ```
    pub fn for_listing(base: &Url) -> Result<Self, regex::Error> {
        let origin = regex::escape(&listing_origin(base));
        let section = regex::escape(&listing_section(base));

        let page_pattern = Regex::new(&format!(r"{}/page/(\d+)/?$", section))?;
        let article_pattern = Regex::new(&format!(
            r#"{}/{}/\d{{4}}/\d{{2}}/[^/\s"'<>?#\\]+"#,
            origin, section
        ))?;

        Ok(Self {
            page_pattern,
            article_pattern,
        })
    }

    /// Parses the page number out of a single pagination href
    fn page_number(&self, href: &str) -> Option<u32> {
        self.page_pattern
            .captures(href.trim())
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl LinkExtractor for PatternLinkExtractor {
    fn max_page_number(&self, html: &str) -> u32 {
        let document = Html::parse_document(html);
        let Ok(a_selector) = Selector::parse("a[href]") else {
            return 1;
        };

        document
            .select(&a_selector)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| self.page_number(href))
            .max()
            .unwrap_or(1)
            .max(1)
    }

    fn article_urls(&self, html: &str) -> Vec<String> {
        self.article_pattern
            .find_iter(html)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
