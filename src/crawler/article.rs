//! Article page extraction
//!
//! Pulls a title and the body paragraphs out of a single article page.

use scraper::{Html, Selector};

use crate::url::title_from_url;

/// Title and body text pulled from an article page
///
/// Both fields empty is the "nothing extracted" sentinel returned for empty
/// pages. An article with only one of the two is incomplete and is not
/// recorded either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub content: String,
}

impl ExtractedArticle {
    /// The "nothing extracted" sentinel
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if neither a title nor any content was found
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// Returns true if both a title and content were found
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

/// Extracts the title and paragraph text of an article page
///
/// # Title
///
/// The trimmed text of the first `<h1>`. Without an `<h1>`, the title is
/// derived from the last path segment of `fallback_url` (hyphens become
/// spaces, words are capitalized).
///
/// # Content
///
/// The trimmed text of every `<p>` that is non-empty after trimming, in
/// document order, separated by a blank line.
///
/// An empty or whitespace-only page yields [`ExtractedArticle::empty`].
///
/// # Example
///
/// ```
/// use actions_harvest::crawler::extract_article;
///
/// let html = "<h1> Executive Order on X </h1><p>A.</p><p> </p><p>B.</p>";
/// let article = extract_article(html, "https://example.gov/actions/2025/01/x");
/// assert_eq!(article.title, "Executive Order on X");
/// assert_eq!(article.content, "A.\n\nB.");
/// ```
pub fn extract_article(html: &str, fallback_url: &str) -> ExtractedArticle {
    if html.trim().is_empty() {
        return ExtractedArticle::empty();
    }

    let document = Html::parse_document(html);

    let title = extract_heading(&document).unwrap_or_else(|| title_from_url(fallback_url));
    let content = extract_paragraphs(&document);

    ExtractedArticle { title, content }
}

/// Returns the trimmed text of the first `<h1>`, if the page has one
fn extract_heading(document: &Html) -> Option<String> {
    let h1_selector = Selector::parse("h1").ok()?;

    document
        .select(&h1_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Joins the non-empty paragraphs of the page with blank lines
fn extract_paragraphs(document: &Html) -> String {
    let Ok(p_selector) = Selector::parse("p") else {
        return String::new();
    };

    document
        .select(&p_selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
