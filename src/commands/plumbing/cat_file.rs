use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn cat_file(&mut self, revision: &str) -> anyhow::Result<()> {
        let object_id = self.database().resolve(revision)?;
        let object_data = self.database().load(&object_id)?;

        self.writer().write_all(&object_data)?;

        Ok(())
    }
}
