use crate::areas::repository::Repository;
use crate::artifacts::core::{PagerWriter, page, use_pager};
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use chrono::SecondsFormat;
use colored::Colorize;
use minus::Pager;
use std::io::Write;

impl Repository {
    pub async fn log(&mut self) -> anyhow::Result<()> {
        self.ensure_layout().await?;

        if !use_pager(self.config().no_pager) {
            return self.write_log(&mut *self.writer());
        }

        let pager = Pager::new();
        self.write_log(&mut PagerWriter::new(pager.clone()))?;
        page(pager)
    }

    fn write_log(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        let Some(head) = self.refs().read_head() else {
            writeln!(writer, "No commits yet")?;
            return Ok(());
        };

        for commit in RevList::new(self.database(), Some(head)) {
            self.show_commit(writer, &commit?)?;
        }

        Ok(())
    }

    fn show_commit(&self, writer: &mut dyn Write, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            writer,
            "{}",
            format!("commit {}", commit.object_id()?).yellow()
        )?;
        writeln!(
            writer,
            "Date:   {}",
            commit.time().to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(writer)?;
        for message_line in commit.message().lines() {
            writeln!(writer, "    {}", message_line)?;
        }
        writeln!(writer)?;
        for change in commit.changes() {
            writeln!(writer, "    {change}")?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
