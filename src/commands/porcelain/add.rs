use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::index::staged_entry::StagedEntry;
use crate::artifacts::objects::object::hash_content;
use crate::errors::RepositoryError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Argument of `add` standing for every file in the workspace
const ALL_FILES: &str = ".";

impl Repository {
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_layout().await?;
        writeln!(self.writer(), "Adding files to staging area...")?;

        let ignore_rules = self.load_ignore_rules()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        if !index.rehydrate() {
            writeln!(
                self.writer(),
                "Failed to read index file. Assuming empty staging area."
            )?;
        }

        // entries staged so far are persisted even when a later path fails
        let mut outcome = Ok(());
        for path in self.expand_paths(paths)? {
            outcome = self.stage_path(&mut index, &ignore_rules, &path);
            if outcome.is_err() {
                break;
            }
        }

        if index.is_changed() {
            index.write_updates()?;
        }
        outcome?;

        writeln!(self.writer(), "Done adding files to staging area")?;

        Ok(())
    }

    /// Store one path's content and stage it, or report why it was skipped
    fn stage_path(
        &self,
        index: &mut Index,
        ignore_rules: &IgnoreRules,
        path: &Path,
    ) -> anyhow::Result<()> {
        let display_path = path.to_string_lossy().into_owned();

        if !self.workspace().exists(path) {
            return self.report_skip(RepositoryError::FileMissing(display_path));
        }
        if ignore_rules.is_ignored(&display_path) {
            return self.report_skip(RepositoryError::IgnoredPath(display_path));
        }

        let content = match self.workspace().read_file(path) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(path = %display_path, "unable to read file: {error:#}");
                return self.report_skip(RepositoryError::UnreadableFile(display_path));
            }
        };
        let blob_id = hash_content(&content)?;

        // content already in the database is never staged again, whatever its path
        if self.database().contains(&blob_id) {
            return self.report_skip(RepositoryError::DuplicateObject(blob_id));
        }

        self.database().put(content)?;
        index.add(StagedEntry::new(display_path.clone(), blob_id.clone()));
        writeln!(
            self.writer(),
            "Added {display_path} (hash: {blob_id}) to staging area."
        )?;

        Ok(())
    }

    /// Expand `.` to every workspace file and directories to the files beneath them
    fn expand_paths(&self, paths: &[String]) -> anyhow::Result<Vec<PathBuf>> {
        if paths.iter().any(|path| path == ALL_FILES) {
            return self.workspace().list_files(None);
        }

        Ok(paths
            .iter()
            .map(|path| {
                let path = Path::new(path);
                if self.workspace().is_dir(path) {
                    self.workspace().list_files(Some(path))
                } else {
                    Ok(vec![path.to_path_buf()])
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect())
    }

    fn report_skip(&self, notice: RepositoryError) -> anyhow::Result<()> {
        tracing::debug!(%notice, "skipping path");
        writeln!(self.writer(), "{notice}")?;
        Ok(())
    }
}
