//! Output handler traits and types
//!
//! This module defines the trait interface for output handlers and
//! associated error and summary types.

use crate::document::Document;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// What a persist call wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistSummary {
    /// Directory the records were written to
    pub directory: PathBuf,

    /// Number of documents handed to the persister
    pub documents: usize,

    /// Number of distinct document files written
    pub files_written: usize,

    /// Documents whose file was overwritten by a later document with the same
    /// slug, or that were skipped because their slug is the index file name
    pub overwritten: usize,

    /// Path of the index file
    pub index_path: PathBuf,
}

/// Trait for output backends
///
/// Implementations receive the whole crawl result at once and must recompute
/// any derived index from it, never update one incrementally.
pub trait OutputHandler {
    /// Writes every document plus the index
    fn persist(&self, documents: &[Document]) -> OutputResult<PersistSummary>;
}
