//! Runtime configuration
//!
//! Configuration comes from the environment, read once per invocation:
//!
//! - `NO_PAGER`: disable the pager used by `log`
//! - `GITLITE_DATE`: fixed timestamp for new commits (RFC 3339 or `%Y-%m-%d %H:%M:%S %z`)
//! - `GITLITE_LOG`: tracing filter directives (defaults to `warn`)

use anyhow::Context;
use chrono::{DateTime, Utc};

/// Name of the repository directory inside the working directory
pub const REPOSITORY_DIR: &str = ".gitLite";

/// Name of the ignore file inside the working directory
pub const IGNORE_FILE: &str = ".gitignore";

pub const NO_PAGER_ENV: &str = "NO_PAGER";
pub const DATE_ENV: &str = "GITLITE_DATE";
pub const LOG_ENV: &str = "GITLITE_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Write long output directly instead of through the pager
    pub no_pager: bool,
    /// Timestamp used for new commits instead of the current time
    pub commit_date: Option<DateTime<Utc>>,
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let no_pager = std::env::var_os(NO_PAGER_ENV).is_some();
        let commit_date = std::env::var(DATE_ENV)
            .ok()
            .map(|date| Self::parse_date(&date))
            .transpose()?;

        Ok(Config {
            no_pager,
            commit_date,
        })
    }

    /// Filter directives for the tracing subscriber
    pub fn log_filter() -> String {
        std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
    }

    /// Time to stamp a new commit with
    pub fn commit_time(&self) -> DateTime<Utc> {
        self.commit_date.unwrap_or_else(Utc::now)
    }

    fn parse_date(date: &str) -> anyhow::Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(date)
            .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
            .map(|date| date.with_timezone(&Utc))
            .with_context(|| format!("{DATE_ENV} is not a valid date: {date}"))
    }
}
