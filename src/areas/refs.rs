//! HEAD reference
//!
//! HEAD is the only reference: a raw text file holding the ID of the latest commit,
//! or nothing at all before the first commit. There are no branches and no symbolic
//! references.
//!
//! An unreadable or malformed HEAD is treated as empty, like a missing index.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference file
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.gitLite`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    /// Read the commit HEAD points to, if any
    pub fn read_head(&self) -> Option<ObjectId> {
        let head_path = self.head_path();

        let content = match std::fs::read_to_string(&head_path) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(path = %head_path.display(), %error, "unable to read HEAD");
                return None;
            }
        };

        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        match ObjectId::try_parse(content.to_string()) {
            Ok(oid) => Some(oid),
            Err(error) => {
                tracing::warn!(path = %head_path.display(), %error, "corrupt HEAD, assuming no commits");
                None
            }
        }
    }

    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.write_head(oid.as_ref())
    }

    /// Create an empty HEAD unless one exists already
    pub fn create_head(&self) -> anyhow::Result<()> {
        if self.head_path().exists() {
            return Ok(());
        }

        self.write_head("")
    }

    fn write_head(&self, content: &str) -> anyhow::Result<()> {
        let head_path = self.head_path();

        std::fs::write(&head_path, content)
            .with_context(|| format!("failed to write HEAD at {:?}", head_path))
    }
}
