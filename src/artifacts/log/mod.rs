//! Commit history traversal
//!
//! - `rev_list`: lazy walk from a starting commit along parent links
//!
//! History is a single chain, so traversal order is simply newest to oldest.

pub mod rev_list;
