use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        let created = self.ensure_layout().await?;

        let verb = if created {
            "Initialized empty"
        } else {
            "Reinitialized existing"
        };
        writeln!(
            self.writer(),
            "{verb} gitLite repository in {}",
            self.repository_path().display()
        )?;

        Ok(())
    }
}
