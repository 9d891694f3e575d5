//! Repository error taxonomy
//!
//! Every failure the repository can report to a user has a variant here. Some of them
//! (`FileMissing`, `UnreadableFile`, `IgnoredPath`, `DuplicateObject`) are never
//! propagated as errors: the commands render them as notices and keep going.

use crate::artifacts::objects::object_id::ObjectId;
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("No parent commit found for {0}")]
    NoParent(ObjectId),

    #[error("No changes to commit.")]
    NothingToCommit,

    #[error("File not found: {0}")]
    FileMissing(String),

    #[error("Unable to read file: {0}")]
    UnreadableFile(String),

    #[error("Ignoring file: {0} (listed in .gitignore)")]
    IgnoredPath(String),

    #[error("Object with hash {0} already exists.")]
    DuplicateObject(ObjectId),

    #[error("Short object ID {prefix} is ambiguous, candidates are: {}", .candidates.join(", "))]
    AmbiguousObjectId {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("Object {0} is not a commit")]
    NotACommit(ObjectId),

    #[error("Invalid object ID: {0}")]
    InvalidObjectId(String),
}

impl RepositoryError {
    /// Process exit code reported for this failure kind
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RepositoryError::ObjectNotFound(_) => ExitCode::from(3),
            RepositoryError::NoParent(_) => ExitCode::from(4),
            RepositoryError::NothingToCommit => ExitCode::from(5),
            RepositoryError::AmbiguousObjectId { .. } => ExitCode::from(6),
            _ => ExitCode::FAILURE,
        }
    }

    /// Whether the failure is reported as a plain message on standard output
    /// rather than as an error on standard error
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            RepositoryError::NoParent(_) | RepositoryError::NothingToCommit
        )
    }
}
