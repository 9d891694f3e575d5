//! Repository areas
//!
//! The building blocks of a repository, each owning one part of the on-disk layout:
//!
//! - `database`: content-addressed object store (`.gitLite/objects`)
//! - `index`: staging area (`.gitLite/index`)
//! - `refs`: the HEAD pointer (`.gitLite/HEAD`)
//! - `repository`: handle tying the areas together for one command
//! - `workspace`: the working directory the repository tracks

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
