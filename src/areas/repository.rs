use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::IgnoreRules;
use crate::config::{Config, IGNORE_FILE, REPOSITORY_DIR};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle on a repository for the duration of one command
///
/// The handle is built from the on-disk layout when a command starts and dropped when
/// it ends; nothing is kept in memory between invocations.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn Write>>,
    config: Config,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn Write>, config: Config) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
        }

        let path = path.canonicalize()?;
        let repository_path = path.join(REPOSITORY_DIR);

        let index = Index::new(repository_path.join("index").into_boxed_path());
        let database = Database::new(repository_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repository_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            config,
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Create whatever part of the layout is missing
    ///
    /// # Returns
    ///
    /// `true` when the repository did not exist before
    pub async fn ensure_layout(&self) -> anyhow::Result<bool> {
        let index = self.index();
        let index = index.lock().await;
        let created = !index.path().exists();

        std::fs::create_dir_all(self.database.objects_path())
            .context("Failed to create .gitLite/objects directory")?;

        if created {
            std::fs::write(index.path(), "[]").context("Failed to create .gitLite/index file")?;
        }
        self.refs
            .create_head()
            .context("Failed to create .gitLite/HEAD file")?;

        if created {
            tracing::info!(path = %self.path.display(), "created repository layout");
        }

        Ok(created)
    }

    /// Ignore rules of the workspace, reporting when there are none to load
    pub fn load_ignore_rules(&self) -> anyhow::Result<IgnoreRules> {
        match IgnoreRules::load(&self.path.join(IGNORE_FILE)) {
            Some(rules) => Ok(rules),
            None => {
                writeln!(self.writer(), "{IGNORE_FILE} file not found or not readable")?;
                Ok(IgnoreRules::default())
            }
        }
    }
}
