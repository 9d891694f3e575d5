//! Command implementations
//!
//! Commands are implemented as methods on the repository handle, in two groups:
//!
//! - `plumbing`: low-level commands for direct object manipulation (hash-object, cat-file)
//! - `porcelain`: user-facing commands for the version control workflow (add, commit, log, ...)

pub mod plumbing;
pub mod porcelain;
