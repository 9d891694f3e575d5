use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub async fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let object_data = self.workspace().read_file(Path::new(object_path))?;
        let object = Blob::new(object_data);

        let object_id = object.object_id()?;
        writeln!(self.writer(), "{}", object_id)?;

        if !write {
            return Ok(());
        }

        self.ensure_layout().await?;
        self.database().store(object)?;

        Ok(())
    }
}
