//! Data structures and algorithms
//!
//! - `core`: shared output utilities (pager wrapper)
//! - `diff`: Myers' diff and the per-commit diff report
//! - `ignore`: regex-based ignore rules
//! - `index`: staged entries held by the staging area
//! - `log`: commit history traversal
//! - `objects`: stored object types (blob, commit) and their identifiers

pub mod core;
pub mod diff;
pub mod ignore;
pub mod index;
pub mod log;
pub mod objects;
