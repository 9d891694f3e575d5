use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use std::io::Write;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.ensure_layout().await?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        if !index.rehydrate() {
            writeln!(
                self.writer(),
                "Failed to read index file. Assuming empty staging area."
            )?;
        }

        let parent = self.refs().read_head();
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        // object first, then HEAD, then the staging area: a crash in between leaves
        // a committed but still staged change rather than a lost one
        let commit = self.write_commit(message, index.entries(), parent)?;
        let commit_id = commit.object_id()?;
        self.refs().update_head(&commit_id)?;
        index.clear()?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
