#![allow(dead_code)]

pub mod command;
pub mod file;

/// Timestamp every test commit is stamped with
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

/// How `log` renders [`COMMIT_DATE`]
pub const COMMIT_DATE_DISPLAY: &str = "2023-01-01T12:00:00.000Z";

/// sha1 of the bytes `hello`
pub const HELLO_OID: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";
