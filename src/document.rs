//! Harvested document records
//!
//! A [`Document`] is created once per successfully extracted article and is
//! never modified afterwards. [`PersistedIndex`] is derived from a whole
//! sequence of documents each time output is written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One harvested article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Human-readable title (never empty)
    pub title: String,

    /// Paragraph text joined by blank lines (never empty)
    pub content: String,

    /// When the article was fetched
    pub collected_at: DateTime<Utc>,
}

impl Document {
    /// Builds a document stamped with the current time
    ///
    /// Returns `None` when either the title or the content is empty, so an
    /// empty document can never enter a crawl result.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Option<Self> {
        Self::collected_at(title, content, Utc::now())
    }

    /// Builds a document with an explicit collection timestamp
    pub fn collected_at(
        title: impl Into<String>,
        content: impl Into<String>,
        collected_at: DateTime<Utc>,
    ) -> Option<Self> {
        let title = title.into();
        let content = content.into();

        if title.is_empty() || content.is_empty() {
            return None;
        }

        Some(Self {
            title,
            content,
            collected_at,
        })
    }
}

/// Summary index written next to the per-document files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedIndex {
    /// Number of documents in the persisted sequence
    pub total_actions: usize,

    /// Titles in crawl order, duplicates included
    pub titles: Vec<String>,

    /// When the index was written
    pub collected_at: DateTime<Utc>,
}

impl PersistedIndex {
    /// Computes the index for `documents` as of `collected_at`
    pub fn from_documents(documents: &[Document], collected_at: DateTime<Utc>) -> Self {
        Self {
            total_actions: documents.len(),
            titles: documents.iter().map(|d| d.title.clone()).collect(),
            collected_at,
        }
    }
}
