//! Staging area data structures
//!
//! The staging area (index) is an ordered list of staged entries, each pairing a
//! workspace path with the digest of the blob holding its content.
//!
//! ## Index File Format
//!
//! The index file is a pretty-printed JSON array of `{ "path": ..., "hash": ... }`
//! objects, in staging order. A clean staging area is stored as `[]`.

pub mod staged_entry;
