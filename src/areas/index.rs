//! Staging area (index)
//!
//! The index holds the changes staged for the next commit as an ordered list of
//! path/blob pairs. Order of insertion is preserved and the same path may be staged
//! more than once before a commit.
//!
//! A missing or unreadable index file never fails a command: it is treated as an
//! empty staging area so the repository stays usable after a partial failure.

use crate::artifacts::index::staged_entry::StagedEntry;
use anyhow::Context;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.gitLite/index`)
    path: Box<Path>,
    /// Staged entries in staging order
    entries: Vec<StagedEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the staged entries from disk
    ///
    /// # Returns
    ///
    /// `false` when the index file was missing or corrupt and an empty staging area was assumed
    pub fn rehydrate(&mut self) -> bool {
        self.entries.clear();
        self.changed = false;

        let content = match std::fs::read_to_string(self.path()) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "unable to read index file");
                return false;
            }
        };

        match serde_json::from_str::<Vec<StagedEntry>>(&content) {
            Ok(entries) => {
                tracing::debug!(entries = entries.len(), "loaded index");
                self.entries = entries;
                true
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "corrupt index file");
                false
            }
        }
    }

    pub fn add(&mut self, entry: StagedEntry) {
        self.entries.push(entry);
        self.changed = true;
    }

    /// Drop every staged entry and persist the empty staging area
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = true;
        self.write_updates()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StagedEntry] {
        &self.entries
    }

    /// Persist the full ordered list, replacing whatever was stored before
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)
            .context("Unable to serialize index entries")?;

        std::fs::write(self.path(), content).context(format!(
            "Unable to write index file {}",
            self.path.display()
        ))?;
        self.changed = false;

        Ok(())
    }
}
