//! JSON directory output
//!
//! Writes one pretty-printed JSON file per document, named after the slug of
//! its title, plus an `index.json` summarizing the whole sequence.

use crate::document::{Document, PersistedIndex};
use crate::output::slug::slugify;
use crate::output::traits::{OutputError, OutputHandler, OutputResult, PersistSummary};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name of the summary index
pub const INDEX_FILE: &str = "index.json";

/// Persists documents as JSON files in a directory
#[derive(Debug, Clone)]
pub struct JsonDirectoryOutput {
    directory: PathBuf,
}

impl JsonDirectoryOutput {
    /// Creates an output handler writing into `directory`
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Returns the path a document with `title` is written to
    pub fn document_path(&self, title: &str) -> PathBuf {
        self.directory.join(format!("{}.json", slugify(title)))
    }

    /// Returns the path of the index file
    pub fn index_path(&self) -> PathBuf {
        self.directory.join(INDEX_FILE)
    }

    fn ensure_directory(&self) -> OutputResult<()> {
        std::fs::create_dir_all(&self.directory).map_err(|source| OutputError::CreateDir {
            path: self.directory.clone(),
            source,
        })
    }
}

impl OutputHandler for JsonDirectoryOutput {
    /// Writes every document, then the index
    ///
    /// Documents whose titles share a slug overwrite each other; the one
    /// latest in `documents` wins. Existing files from earlier runs are
    /// overwritten the same way. A document whose slug is `index` is skipped,
    /// since the index would replace it; it still counts as overwritten.
    fn persist(&self, documents: &[Document]) -> OutputResult<PersistSummary> {
        self.ensure_directory()?;

        let index_path = self.index_path();
        let mut written = HashSet::new();
        let mut overwritten = 0;

        for document in documents {
            let path = self.document_path(&document.title);
            if path == index_path {
                overwritten += 1;
                tracing::warn!(
                    "'{}' would be replaced by the index at {}, not writing it",
                    document.title,
                    path.display()
                );
                continue;
            }

            write_json(&path, document)?;

            if !written.insert(path.clone()) {
                overwritten += 1;
                tracing::warn!(
                    "'{}' overwrote an earlier document at {}",
                    document.title,
                    path.display()
                );
            }
        }

        let index = PersistedIndex::from_documents(documents, Utc::now());
        write_json(&index_path, &index)?;

        tracing::info!(
            "Wrote {} documents ({} files) and index to {}",
            documents.len(),
            written.len(),
            self.directory.display()
        );

        Ok(PersistSummary {
            directory: self.directory.clone(),
            documents: documents.len(),
            files_written: written.len(),
            overwritten,
            index_path,
        })
    }
}

/// Serializes `value` as pretty JSON and writes it to `path`, replacing any existing file
fn write_json<T: Serialize>(path: &Path, value: &T) -> OutputResult<()> {
    let mut json = serde_json::to_vec_pretty(value)?;
    json.push(b'\n');

    std::fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
