//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlPhase`: the pagination state machine (init, paging, per-article, done)
//! - `ArticleState`: the outcome of visiting one article URL

mod article_state;
mod crawl_phase;

// Re-export main types
pub use article_state::ArticleState;
pub use crawl_phase::CrawlPhase;
