//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose the repository areas and the plumbing into the
//! workflows a user runs from the command line.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Record the staged files as a new commit
//! - `status`: Show the staged files
//! - `log`: Show commit history
//! - `diff`: Show what a commit changed relative to its parent

pub mod add;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod status;
