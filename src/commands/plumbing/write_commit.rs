use crate::areas::repository::Repository;
use crate::artifacts::index::staged_entry::StagedEntry;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

impl Repository {
    /// Write a commit object recording `changes` on top of `parent`
    ///
    /// `parent` must name a stored object. Only the object is written: moving HEAD and
    /// clearing the staging area is left to the caller, which must do both after this
    /// returns and in that order.
    pub fn write_commit(
        &self,
        message: &str,
        changes: &[StagedEntry],
        parent: Option<ObjectId>,
    ) -> anyhow::Result<Commit> {
        if changes.is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }
        if let Some(parent) = &parent
            && !self.database().contains(parent)
        {
            return Err(RepositoryError::ObjectNotFound(parent.to_string()).into());
        }

        let commit = Commit::new(
            message.to_string(),
            changes.to_vec(),
            parent,
            self.config().commit_time(),
        );
        let commit_id = self.database().store(commit.clone())?;
        tracing::info!(oid = %commit_id, changes = changes.len(), "wrote commit");

        Ok(commit.with_oid(commit_id))
    }
}
