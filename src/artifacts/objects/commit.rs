//! Commit object
//!
//! Commits are snapshots of the staging area at one point in time. They contain:
//! - The commit message
//! - The staged changes (ordered path/blob pairs)
//! - The parent commit ID (absent for the first commit)
//! - The commit time
//!
//! ## Format
//!
//! On disk, a commit is pretty-printed JSON:
//! ```text
//! {
//!   "message": "first",
//!   "changes": [
//!     {
//!       "path": "a.txt",
//!       "hash": "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
//!     }
//!   ],
//!   "parent": null,
//!   "time": "2023-01-01T12:00:00.000Z"
//! }
//! ```
//!
//! The commit ID is the SHA-1 of the compact JSON form of the same record, so it is
//! computed before the object is written and never includes itself.

use crate::artifacts::index::staged_entry::StagedEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable, hash_content};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    message: String,
    changes: Vec<StagedEntry>,
    #[serde(default, deserialize_with = "parent_or_empty::deserialize")]
    parent: Option<ObjectId>,
    #[serde(with = "iso_time")]
    time: DateTime<Utc>,
    /// ID the commit was loaded from, when read back from the database
    #[serde(skip)]
    oid: Option<ObjectId>,
}

impl Commit {
    pub fn new(
        message: String,
        changes: Vec<StagedEntry>,
        parent: Option<ObjectId>,
        time: DateTime<Utc>,
    ) -> Self {
        Commit {
            message,
            changes,
            parent,
            time,
            oid: None,
        }
    }

    /// Remember the ID this commit was stored under
    pub fn with_oid(self, oid: ObjectId) -> Self {
        Commit {
            oid: Some(oid),
            ..self
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn changes(&self) -> &[StagedEntry] {
        &self.changes
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// First change recorded for `path`
    pub fn change_for_path(&self, path: &str) -> Option<&StagedEntry> {
        self.changes.iter().find(|change| change.path == path)
    }

    fn canonical_form(&self) -> anyhow::Result<Vec<u8>> {
        serde_json::to_vec(self).context("Unable to serialize commit")
    }
}

impl PartialEq for Commit {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.changes == other.changes
            && self.parent == other.parent
            && self.time == other.time
    }
}

impl Eq for Commit {}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = serde_json::to_vec_pretty(self).context("Unable to serialize commit")?;
        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Unable to parse commit record")
    }
}

impl Object for Commit {
    fn object_id(&self) -> anyhow::Result<ObjectId> {
        match &self.oid {
            Some(oid) => Ok(oid.clone()),
            None => hash_content(&self.canonical_form()?),
        }
    }
}

/// ISO-8601 timestamps in UTC with millisecond precision
mod iso_time {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let time = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&time)
            .map(|time| time.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Root commits may record their parent as `null` or as an empty string
mod parent_or_empty {
    use crate::artifacts::objects::object_id::ObjectId;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ObjectId>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(parent) if parent.trim().is_empty() => Ok(None),
            Some(parent) => ObjectId::try_parse(parent.trim().to_string())
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
