//! Output module for persisting harvested documents
//!
//! This module handles:
//! - Deriving filesystem-safe slugs from document titles
//! - Writing one JSON record per document plus a summary index
//! - Summarizing a finished harvest for the console

mod json;
mod slug;
pub mod stats;
mod traits;

pub use json::{JsonDirectoryOutput, INDEX_FILE};
pub use slug::{slugify, FALLBACK_SLUG};
pub use stats::{print_statistics, CrawlStatistics};
pub use traits::{OutputError, OutputHandler, OutputResult, PersistSummary};
