//! Directory enumeration by prefix matching.

use std::collections::BTreeSet;

use super::path::{VfsPath, SEPARATOR};
use crate::archive::ArchiveIndex;

/// Names of the immediate children of `dir`, sorted.
///
/// Children implied by deeper entries are included even when they have no
/// entry of their own. A directory with no matching entries (including one
/// that does not exist) yields an empty set.
pub fn list_children(index: &ArchiveIndex, dir: &VfsPath) -> BTreeSet<String> {
    let mut children = BTreeSet::new();
    for entry in index.entries() {
        let Some(rest) = strip_dir_prefix(entry.path().key(), dir.key()) else {
            continue;
        };
        if let Some(first) = rest.split(SEPARATOR).next()
            && !first.is_empty()
        {
            children.insert(first.to_string());
        }
    }
    children
}

/// True if `path` has descendants but no entry of its own.
pub fn is_implicit_dir(index: &ArchiveIndex, path: &VfsPath) -> bool {
    if path.is_root() {
        return false;
    }
    let mut has_descendant = false;
    for entry in index.entries() {
        match strip_dir_prefix(entry.path().key(), path.key()) {
            Some("") => return false,
            Some(_) => has_descendant = true,
            None => {}
        }
    }
    has_descendant
}

/// Strip `dir` from `path` on a segment boundary.
///
/// `a/bc` is not under `a/b`; `a/b` itself strips to `""`.
fn strip_dir_prefix<'a>(path: &'a str, dir: &str) -> Option<&'a str> {
    if dir.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(dir)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix(SEPARATOR)
    }
}
