//! Stored object types and operations
//!
//! Every object in the database is addressed by the SHA-1 digest of its content:
//!
//! - **Blob**: raw file content, stored byte for byte
//! - **Commit**: a JSON record of the staged changes, the parent commit, a message and a time
//!
//! Objects carry no type tag on disk. A digest is only ever read as a commit when it was
//! reached through HEAD or a parent link.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest prefix accepted when resolving an abbreviated object ID
pub const MIN_PREFIX_LENGTH: usize = 4;
