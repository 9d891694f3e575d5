use crate::artifacts::diff::commit_diff::CommitDiff;
use crate::artifacts::objects::MIN_PREFIX_LENGTH;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Content-addressed object database
///
/// Objects are write-once: a digest that is already present is never rewritten.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Store raw content as a blob and return its digest
    pub fn put(&self, content: Bytes) -> anyhow::Result<ObjectId> {
        self.store(Blob::new(content))
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.is_file() {
            return Err(RepositoryError::ObjectNotFound(object_id.to_string()).into());
        }

        self.read_object(object_path)
    }

    pub fn store(&self, object: impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        std::fs::create_dir_all(&self.path).context(format!(
            "Unable to create object directory {}",
            self.path.display()
        ))?;
        self.write_object(object_path, object.serialize()?)?;
        tracing::debug!(oid = %object_id, "stored object");

        Ok(object_id)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_content = self.load(object_id)?;

        Blob::deserialize(Cursor::new(object_content))
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_content = self.load(object_id)?;

        let commit = Commit::deserialize(Cursor::new(object_content)).map_err(|error| {
            tracing::debug!(oid = %object_id, %error, "object is not a commit record");
            RepositoryError::NotACommit(object_id.clone())
        })?;

        Ok(commit.with_oid(object_id.clone()))
    }

    /// Compare a commit with its parent
    pub fn commit_diff(&self, object_id: &ObjectId) -> anyhow::Result<CommitDiff> {
        let commit = self.parse_object_as_commit(object_id)?;

        CommitDiff::compare(self, &commit)
    }

    /// Resolve a full or abbreviated object ID to a stored object
    pub fn resolve(&self, revision: &str) -> anyhow::Result<ObjectId> {
        let revision = revision.trim().to_ascii_lowercase();

        if let Ok(object_id) = ObjectId::try_parse(revision.clone()) {
            return match self.contains(&object_id) {
                true => Ok(object_id),
                false => Err(RepositoryError::ObjectNotFound(revision).into()),
            };
        }

        if revision.len() < MIN_PREFIX_LENGTH || !revision.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RepositoryError::InvalidObjectId(revision).into());
        }

        let mut matches = self.find_objects_by_prefix(&revision)?;
        match matches.len() {
            0 => Err(RepositoryError::ObjectNotFound(revision).into()),
            1 => Ok(matches.remove(0)),
            _ => Err(RepositoryError::AmbiguousObjectId {
                prefix: revision,
                candidates: matches.iter().map(ObjectId::to_short_oid).collect(),
            }
            .into()),
        }
    }

    /// Find all objects whose ID starts with the given prefix, sorted
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        if !self.path.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = std::fs::read_dir(&self.path)
            .context(format!(
                "Unable to list object directory {}",
                self.path.display()
            ))?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|file_name| file_name.starts_with(prefix))
            .filter_map(|file_name| ObjectId::try_parse(file_name).ok())
            .collect::<Vec<_>>();

        matches.sort();
        Ok(matches)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
