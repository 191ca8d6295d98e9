//! Filesystem loading of source documents into a [`ControllerIndex`].
//!
//! Walks a directory tree, parses every `*.json` file, and folds each
//! parsed document into the index. A file that cannot be read, is not
//! valid JSON, or whose top-level value is not an object is skipped and
//! recorded; a single malformed file must never take down the whole
//! index. Only a missing or unreadable root directory is fatal.

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::index::ControllerIndex;
use crate::model::SkippedFile;

impl ControllerIndex {
    /// Build a fresh index from a data directory.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let mut index = Self::default();
        index.ingest_dir(root)?;
        Ok(index)
    }

    /// Recursively ingest every `*.json` file under `root`.
    ///
    /// Appends to the existing tables: ingesting the same tree twice
    /// duplicates position entries. Callers wanting a reload should build
    /// a fresh index via [`ControllerIndex::load`] instead.
    pub fn ingest_dir(&mut self, root: impl AsRef<Path>) -> Result<()> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(Error::DataDirNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        // Plain recursive walk: the data directory is not a source tree,
        // so gitignore/hidden-file filtering stays off.
        let walker = WalkBuilder::new(root).standard_filters(false).build();

        let mut ingested = 0usize;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match ingest_file(self, path) {
                Ok(()) => {
                    ingested += 1;
                    tracing::debug!(path = %path.display(), "ingested data file");
                }
                Err(reason) => {
                    tracing::warn!(path = %path.display(), reason = %reason, "skipping data file");
                    self.record_skip(SkippedFile {
                        path: path.to_path_buf(),
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            files = ingested,
            airports = self.airport_count(),
            codes = self.indexed_code_count(),
            skipped = self.skipped().len(),
            "data directory ingested"
        );
        Ok(())
    }
}

/// Parse one file and fold it into the index. The error is a human-readable
/// skip reason, not a fatal condition.
fn ingest_file(index: &mut ControllerIndex, path: &Path) -> std::result::Result<(), String> {
    let bytes = fs::read(path).map_err(|err| format!("read failed: {err}"))?;
    let document: Value =
        serde_json::from_slice(&bytes).map_err(|err| format!("invalid JSON: {err}"))?;
    if !document.is_object() {
        return Err("top-level value is not an object".to_string());
    }
    index.ingest_document(&document);
    Ok(())
}
