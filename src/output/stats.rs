//! Statistics for a finished harvest
//!
//! This module condenses a crawl report and the persist summary into the
//! figures printed at the end of a run.

use crate::crawler::CrawlReport;
use crate::output::traits::PersistSummary;
use crate::state::ArticleState;

/// Harvest statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlStatistics {
    /// Listing pages advertised by the listing root
    pub total_pages: u32,

    /// Listing pages that could not be fetched
    pub pages_failed: u32,

    /// Article URLs visited, by outcome, most frequent first
    pub articles_by_state: Vec<(ArticleState, u64)>,

    /// Documents handed to the persister
    pub documents: usize,

    /// Distinct files written (documents minus slug collisions)
    pub files_written: usize,
}

impl CrawlStatistics {
    /// Builds statistics from a crawl report and what was persisted
    pub fn new(report: &CrawlReport, summary: &PersistSummary) -> Self {
        let mut articles_by_state: Vec<_> = report
            .article_outcomes
            .iter()
            .map(|(state, count)| (*state, *count))
            .collect();
        articles_by_state.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));

        Self {
            total_pages: report.total_pages,
            pages_failed: report.pages_failed,
            articles_by_state,
            documents: summary.documents,
            files_written: summary.files_written,
        }
    }

    /// Total article URLs visited, duplicates included
    pub fn articles_seen(&self) -> u64 {
        self.articles_by_state.iter().map(|(_, count)| count).sum()
    }

    /// Percentage of distinct article URLs that produced a document
    pub fn success_rate(&self) -> f64 {
        let attempted: u64 = self
            .articles_by_state
            .iter()
            .filter(|(state, _)| *state != ArticleState::Duplicate)
            .map(|(_, count)| count)
            .sum();

        if attempted == 0 {
            return 0.0;
        }

        let collected = self
            .articles_by_state
            .iter()
            .find(|(state, _)| state.is_success())
            .map(|(_, count)| *count)
            .unwrap_or(0);

        (collected as f64 / attempted as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Listing:");
    println!("  Pages: {}", stats.total_pages);
    println!("  Pages failed: {}", stats.pages_failed);
    println!();

    println!("Articles by State ({} seen):", stats.articles_seen());
    for (state, count) in &stats.articles_by_state {
        println!("  {}: {}", state.label(), count);
    }
    println!();

    println!("Output:");
    println!("  Documents: {}", stats.documents);
    println!("  Files written: {}", stats.files_written);
    if stats.files_written < stats.documents {
        println!(
            "  Overwritten by title collisions: {}",
            stats.documents - stats.files_written
        );
    }
    println!();

    println!("Success Rate: {:.1}%", stats.success_rate());
}
