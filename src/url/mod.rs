//! URL handling module for Actions-Harvest
//!
//! This module provides listing URL validation, pagination URL arithmetic,
//! and the URL-derived fallback titles used when an article has no heading.

mod listing;
mod title;

// Re-export main functions
pub use listing::{listing_origin, listing_section, page_url, parse_listing_url};
pub use title::{title_case, title_from_url};

/// A page of the listing, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// 1-based page number
    pub number: u32,

    /// Resolved URL of this page
    pub url: ::url::Url,
}

impl ListingPage {
    /// Resolves page `number` of the listing rooted at `base`
    pub fn new(base: &::url::Url, number: u32) -> Self {
        Self {
            number,
            url: page_url(base, number),
        }
    }
}

/// Enumerates every listing page from 1 through `total_pages`, in order
///
/// # Examples
///
/// ```
/// use actions_harvest::url::{listing_pages, parse_listing_url};
///
/// let base = parse_listing_url("https://example.gov/actions/").unwrap();
/// let urls: Vec<String> = listing_pages(&base, 3).map(|p| p.url.to_string()).collect();
/// assert_eq!(
///     urls,
///     vec![
///         "https://example.gov/actions/",
///         "https://example.gov/actions/page/2/",
///         "https://example.gov/actions/page/3/",
///     ]
/// );
/// ```
pub fn listing_pages(
    base: &::url::Url,
    total_pages: u32,
) -> impl Iterator<Item = ListingPage> + '_ {
    (1..=total_pages).map(move |number| ListingPage::new(base, number))
}
