//! Plumbing commands (low-level object operations)
//!
//! Plumbing commands give direct access to the object database. They are the
//! building blocks the porcelain commands are written with.
//!
//! ## Commands
//!
//! - `hash-object`: Compute a file's object ID and optionally store it
//! - `cat-file`: Print the raw content of an object
//! - `write_commit`: Write a commit object for a set of staged changes

pub mod cat_file;
pub mod hash_object;
mod write_commit;
