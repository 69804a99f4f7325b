//! Crawl phase definitions for the pagination state machine
//!
//! The coordinator walks Init -> Paging(1) -> PerArticle(1) -> Paging(2) -> ...
//! -> Done. A page whose fetch fails goes straight from Paging to the next
//! Paging (or Done) without visiting PerArticle.

use std::fmt;

/// Current phase of a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    /// Resolving the listing root and the total page count
    Init,

    /// Fetching listing page N
    Paging { page: u32 },

    /// Fetching and extracting the articles listed on page N
    PerArticle { page: u32 },

    /// All pages visited
    Done,
}

impl CrawlPhase {
    /// Checks if a transition from this phase to another is valid
    ///
    /// # Valid Transitions
    ///
    /// - Init → Paging{1}, Done (empty site)
    /// - Paging{n} → PerArticle{n}, Paging{n+1}, Done
    /// - PerArticle{n} → Paging{n+1}, Done
    /// - Done → (none)
    pub fn can_transition_to(&self, next: &CrawlPhase) -> bool {
        match (self, next) {
            (Self::Init, Self::Paging { page }) => *page == 1,
            (Self::Init, Self::Done) => true,

            (Self::Paging { page }, Self::PerArticle { page: next }) => page == next,
            (Self::Paging { page }, Self::Paging { page: next }) => *next == page + 1,
            (Self::Paging { .. }, Self::Done) => true,

            (Self::PerArticle { page }, Self::Paging { page: next }) => *next == page + 1,
            (Self::PerArticle { .. }, Self::Done) => true,

            _ => false,
        }
    }

    /// Returns the phase that follows a finished page
    ///
    /// The crawl moves to the next page until `total_pages` has been visited.
    pub fn after_page(page: u32, total_pages: u32) -> Self {
        if page >= total_pages {
            Self::Done
        } else {
            Self::Paging { page: page + 1 }
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Paging { page } => write!(f, "paging({})", page),
            Self::PerArticle { page } => write!(f, "per-article({})", page),
            Self::Done => write!(f, "done"),
        }
    }
}
