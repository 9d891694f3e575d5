//! Diff algorithms and commit comparison
//!
//! - `text_diff`: line and character granularity diffs (Myers, via `similar`) coalesced
//!   into segments
//! - `commit_diff`: per-file comparison of a commit against its parent
//!
//! The diff engine produces structured, fully materialised output. Rendering it
//! (prefixes, colours) is left to the `diff` command.

pub mod commit_diff;
pub mod text_diff;
