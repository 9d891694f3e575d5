//! gitlite - a minimal local version-control engine
//!
//! The crate is organised the same way the command-line tool is used:
//!
//! - `areas`: on-disk areas of a repository (object database, staging index, HEAD, workspace)
//! - `artifacts`: data structures and algorithms (objects, staged entries, history walking, diffing)
//! - `commands`: plumbing and porcelain commands implemented on top of the repository handle
//! - `config`: runtime configuration loaded from the environment
//! - `errors`: the repository error taxonomy

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
