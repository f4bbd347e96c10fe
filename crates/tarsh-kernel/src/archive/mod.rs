//! Archive Index: the read-only entry list behind the VFS.
//!
//! An archive is a flat list of entries. There is no parent/child indexing:
//! the directory tree is synthesized from path prefixes by
//! [`crate::vfs::list_children`].
//!
//! ```text
//! tar file ──load()──▶ ArchiveIndex
//!                       ├── entries()   ordered, as stored in the archive
//!                       ├── lookup()    exact path → File / Directory / Other / NotFound
//!                       └── has_directory()
//! ```

mod tarball;

pub use tarball::{load, read_entries};

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::vfs::VfsPath;

/// Errors raised while loading an archive. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("cannot read archive {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("cannot parse archive {}: {source}", path.display())]
    Corrupt { path: PathBuf, source: io::Error },
    #[error("unsupported compression for archive {}: {format}", path.display())]
    UnsupportedCompression { path: PathBuf, format: &'static str },
}

/// Kind of archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file with readable content.
    File,
    /// Explicit directory entry.
    Directory,
    /// Anything else: symlinks, hard links, devices, fifos.
    Other,
}

/// One archive record.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    path: VfsPath,
    kind: EntryKind,
    data: Vec<u8>,
}

impl ArchiveEntry {
    /// Create an entry. `data` is only kept for files.
    pub fn new(path: VfsPath, kind: EntryKind, data: Vec<u8>) -> Self {
        let data = if kind == EntryKind::File { data } else { Vec::new() };
        Self { path, kind, data }
    }

    pub fn path(&self) -> &VfsPath {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// File content (empty for non-files).
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Result of an exact-path lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    File(&'a [u8]),
    Directory,
    Other,
    NotFound,
}

/// Immutable index over every entry of a loaded archive.
#[derive(Debug, Default)]
pub struct ArchiveIndex {
    entries: Vec<ArchiveEntry>,
    /// Last occurrence of each path, matching tar append semantics.
    by_path: HashMap<String, usize>,
}

impl ArchiveIndex {
    /// Build an index from entries in archive order.
    pub fn from_entries(entries: Vec<ArchiveEntry>) -> Self {
        let by_path = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.path.key().to_string(), i))
            .collect();
        Self { entries, by_path }
    }

    /// Start building an index in memory.
    pub fn builder() -> ArchiveBuilder {
        ArchiveBuilder::default()
    }

    /// All entries, in archive order.
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup of a normalized path. Root is always a directory.
    pub fn lookup(&self, path: &VfsPath) -> Lookup<'_> {
        if path.is_root() {
            return Lookup::Directory;
        }
        match self.by_path.get(path.key()).map(|&i| &self.entries[i]) {
            Some(entry) => match entry.kind {
                EntryKind::File => Lookup::File(&entry.data),
                EntryKind::Directory => Lookup::Directory,
                EntryKind::Other => Lookup::Other,
            },
            None => Lookup::NotFound,
        }
    }

    /// True if an explicit directory entry exists for `path`.
    ///
    /// Directories implied only by deeper entries do not count.
    pub fn has_directory(&self, path: &VfsPath) -> bool {
        self.entries
            .iter()
            .any(|e| e.is_dir() && e.path == *path)
    }
}

/// In-memory builder for [`ArchiveIndex`].
///
/// ```
/// use tarsh_kernel::archive::ArchiveIndex;
///
/// let index = ArchiveIndex::builder()
///     .dir("a/")
///     .file("a/b.txt", "hello\n")
///     .build();
/// assert_eq!(index.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ArchiveBuilder {
    entries: Vec<ArchiveEntry>,
}

impl ArchiveBuilder {
    /// Add an explicit directory entry.
    pub fn dir(mut self, name: &str) -> Self {
        self.entries
            .push(ArchiveEntry::new(VfsPath::parse(name), EntryKind::Directory, Vec::new()));
        self
    }

    /// Add a regular file.
    pub fn file(mut self, name: &str, data: impl Into<Vec<u8>>) -> Self {
        self.entries
            .push(ArchiveEntry::new(VfsPath::parse(name), EntryKind::File, data.into()));
        self
    }

    /// Add a non-file, non-directory entry (e.g. a symlink).
    pub fn other(mut self, name: &str) -> Self {
        self.entries
            .push(ArchiveEntry::new(VfsPath::parse(name), EntryKind::Other, Vec::new()));
        self
    }

    pub fn build(self) -> ArchiveIndex {
        ArchiveIndex::from_entries(self.entries)
    }
}
