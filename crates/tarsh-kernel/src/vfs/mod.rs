//! Virtual filesystem view over an [`ArchiveIndex`](crate::archive::ArchiveIndex).
//!
//! The VFS has no backing tree. It is two pure functions over the flat entry
//! list:
//!
//! - [`resolve`]: normalize a path against the current directory
//! - [`list_children`]: derive the immediate children of a directory from
//!   entry path prefixes
//!
//! ```text
//! entries:  a/   a/b.txt   a/c/   x/y/z.txt
//!
//! /         → a, x          (x is implicit: no entry of its own)
//! /a        → b.txt, c
//! /x        → y
//! ```

mod listing;
mod path;

pub use listing::{is_implicit_dir, list_children};
pub use path::{resolve, VfsPath, SEPARATOR};
