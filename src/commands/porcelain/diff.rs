use crate::areas::repository::Repository;
use crate::artifacts::diff::commit_diff::FileDiff;
use crate::artifacts::diff::text_diff::{Segment, SegmentStatus};
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub async fn diff(&mut self, revision: &str) -> anyhow::Result<()> {
        self.ensure_layout().await?;

        let commit_oid = self.database().resolve(revision)?;
        let commit_diff = self.database().commit_diff(&commit_oid)?;

        for file_diff in &commit_diff.files {
            match file_diff {
                FileDiff::NewFile { path } => {
                    writeln!(self.writer(), "{}", format!("new file: {path}").bold())?;
                }
                FileDiff::Modified {
                    path, lines, chars, ..
                } => {
                    writeln!(self.writer(), "{}", format!("Line changes in: {path}").bold())?;
                    self.print_line_segments(lines)?;

                    writeln!(
                        self.writer(),
                        "{}",
                        format!("Character changes in: {path}").bold()
                    )?;
                    self.print_char_segments(chars)?;
                }
            }
            writeln!(self.writer())?;
        }

        Ok(())
    }

    /// One output line per diffed line, prefixed like a unified diff
    fn print_line_segments(&self, segments: &[Segment]) -> anyhow::Result<()> {
        for segment in segments {
            for line in segment.text.lines() {
                let line = match segment.status {
                    SegmentStatus::Added => format!("+{line}").green(),
                    SegmentStatus::Removed => format!("-{line}").red(),
                    SegmentStatus::Unchanged => format!(" {line}").normal(),
                };
                writeln!(self.writer(), "{line}")?;
            }
        }

        Ok(())
    }

    /// The new text inline, with removals as `[-...-]` and additions as `{+...+}`
    fn print_char_segments(&self, segments: &[Segment]) -> anyhow::Result<()> {
        let rendered = segments
            .iter()
            .map(|segment| match segment.status {
                SegmentStatus::Added => format!("{{+{}+}}", segment.text).green().to_string(),
                SegmentStatus::Removed => format!("[-{}-]", segment.text).red().to_string(),
                SegmentStatus::Unchanged => segment.text.clone(),
            })
            .collect::<String>();

        write!(self.writer(), "{rendered}")?;
        if !rendered.ends_with('\n') {
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
