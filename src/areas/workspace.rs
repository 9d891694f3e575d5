use crate::config::REPOSITORY_DIR;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).exists()
    }

    pub fn is_dir(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_dir()
    }

    /// List every file under `root_file_path` (the whole workspace when `None`),
    /// relative to the workspace root and in name order
    ///
    /// The repository directory is never listed.
    pub fn list_files(&self, root_file_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if !root_file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_file_path);
        }

        WalkDir::new(&root_file_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != REPOSITORY_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .map(PathBuf::from)
                    .context(format!("{:?} is outside the workspace", entry.path()))
            })
            .collect()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;

    #[test]
    fn list_files_skips_repository_directory() {
        let dir = TempDir::new().unwrap();
        dir.child("b.txt").write_str("b").unwrap();
        dir.child("a/c.txt").write_str("c").unwrap();
        dir.child(REPOSITORY_DIR).child("HEAD").write_str("").unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());

        let files = workspace.list_files(None).unwrap();

        assert_eq!(
            files,
            vec![Path::new("a").join("c.txt"), PathBuf::from("b.txt")]
        );
    }

    #[test]
    fn list_files_under_subdirectory() {
        let dir = TempDir::new().unwrap();
        dir.child("a/b/c.txt").write_str("c").unwrap();
        dir.child("d.txt").write_str("d").unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());

        let files = workspace.list_files(Some(Path::new("a"))).unwrap();

        assert_eq!(files, vec![Path::new("a").join("b").join("c.txt")]);
    }

    #[test]
    fn read_file_returns_raw_bytes() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bin"), [0xff, 0xfe, 0x00]).unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());

        let content = workspace.read_file(Path::new("bin")).unwrap();

        assert_eq!(content.to_vec(), vec![0xff, 0xfe, 0x00]);
    }
}
