use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub async fn status(&mut self) -> anyhow::Result<()> {
        self.ensure_layout().await?;

        let index = self.index();
        let mut index = index.lock().await;

        if !index.rehydrate() {
            writeln!(
                self.writer(),
                "Failed to read index file. Assuming empty staging area."
            )?;
        }

        if index.is_empty() {
            writeln!(self.writer(), "No changes in staging area.")?;
            return Ok(());
        }

        writeln!(self.writer(), "Changes to be committed:")?;
        for entry in index.entries() {
            writeln!(self.writer(), "\t{}", entry.path.green())?;
        }

        Ok(())
    }
}
