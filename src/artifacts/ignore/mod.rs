//! Ignore rules
//!
//! Every non-blank line of the ignore file is a regular expression, not a glob. A
//! candidate path is ignored when any expression matches anywhere in its relative path.
//! `/` in a pattern stands for the host path separator.

use regex::Regex;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    patterns: Vec<Regex>,
}

impl IgnoreRules {
    /// Load rules from an ignore file
    ///
    /// # Returns
    ///
    /// `None` when the file is missing or unreadable
    pub fn load(path: &Path) -> Option<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Some(Self::parse(&content)),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "no ignore rules loaded");
                None
            }
        }
    }

    /// Compile every non-blank line; lines that are not valid expressions are skipped
    pub fn parse(content: &str) -> Self {
        let separator = regex::escape(std::path::MAIN_SEPARATOR_STR);

        let patterns = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match Regex::new(&line.replace('/', &separator)) {
                Ok(pattern) => Some(pattern),
                Err(error) => {
                    tracing::warn!(pattern = line, %error, "skipping invalid ignore pattern");
                    None
                }
            })
            .collect();

        IgnoreRules { patterns }
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(path))
    }
}
