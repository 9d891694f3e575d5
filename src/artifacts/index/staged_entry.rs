use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A path staged with the content of the blob `hash`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct StagedEntry {
    /// Path relative to the repository root, with host separators
    pub path: String,
    pub hash: ObjectId,
}

impl std::fmt::Display for StagedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.path, self.hash)
    }
}
