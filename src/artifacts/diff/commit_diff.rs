use crate::areas::database::Database;
use crate::artifacts::diff::text_diff::{Segment, diff_chars, diff_lines};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

/// Comparison of one staged path between a commit and its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDiff {
    /// The parent commit has no change recorded for this path
    NewFile { path: String },
    /// Both commits recorded the path; the two granularities describe the same change
    Modified {
        path: String,
        old_oid: ObjectId,
        new_oid: ObjectId,
        lines: Vec<Segment>,
        chars: Vec<Segment>,
    },
}

impl FileDiff {
    pub fn path(&self) -> &str {
        match self {
            FileDiff::NewFile { path } | FileDiff::Modified { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDiff {
    pub commit: ObjectId,
    pub parent: ObjectId,
    pub files: Vec<FileDiff>,
}

impl CommitDiff {
    /// Compare every change of `commit` against the change its parent recorded for the same path
    ///
    /// When the parent staged a path more than once, the first entry is used.
    pub fn compare(database: &Database, commit: &Commit) -> anyhow::Result<Self> {
        let commit_oid = commit.object_id()?;
        let parent_oid = commit
            .parent()
            .cloned()
            .ok_or_else(|| RepositoryError::NoParent(commit_oid.clone()))?;
        let parent = database.parse_object_as_commit(&parent_oid)?;

        let files = commit
            .changes()
            .iter()
            .map(|change| match parent.change_for_path(&change.path) {
                None => Ok(FileDiff::NewFile {
                    path: change.path.clone(),
                }),
                Some(parent_change) => {
                    let old = database.parse_object_as_blob(&parent_change.hash)?.text();
                    let new = database.parse_object_as_blob(&change.hash)?.text();

                    Ok(FileDiff::Modified {
                        path: change.path.clone(),
                        old_oid: parent_change.hash.clone(),
                        new_oid: change.hash.clone(),
                        lines: diff_lines(&old, &new),
                        chars: diff_chars(&old, &new),
                    })
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(CommitDiff {
            commit: commit_oid,
            parent: parent_oid,
            files,
        })
    }
}
