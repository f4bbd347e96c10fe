//! Path normalization for the archive-backed VFS.
//!
//! Every path that is compared against an archive entry goes through
//! [`resolve`]. Entry names are normalized by the same routine when the
//! archive is loaded, so a plain string comparison is enough afterwards.

use std::fmt;

/// Path separator used inside archives and on the command line.
pub const SEPARATOR: char = '/';

/// A normalized absolute path inside the archive.
///
/// The stored form has no leading or trailing separator and no `.`/`..`
/// segments. Root is the empty key and displays as `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VfsPath(String);

impl VfsPath {
    /// The filesystem root.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Normalize `input` as an absolute path.
    pub fn parse(input: &str) -> Self {
        resolve(&Self::root(), input)
    }

    /// True if this is the root directory.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The form used to compare against archive entry paths (`""` for root).
    pub fn key(&self) -> &str {
        &self.0
    }

    /// Iterate over the path segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    /// Prompt form with the trailing-separator convention: `/` or `/a/b/`.
    pub fn display_dir(&self) -> String {
        if self.is_root() {
            SEPARATOR.to_string()
        } else {
            format!("{SEPARATOR}{}{SEPARATOR}", self.0)
        }
    }

    fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let joined: Vec<&str> = segments.into_iter().collect();
        Self(joined.join("/"))
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SEPARATOR}{}", self.0)
    }
}

/// Resolve `input` against `base` and normalize the result.
///
/// - A leading separator makes `input` absolute (resolved from root).
/// - `.` and empty segments are dropped.
/// - `..` removes the preceding segment; at root it is a no-op.
///
/// Never fails: any string yields some normalized path.
pub fn resolve(base: &VfsPath, input: &str) -> VfsPath {
    let mut stack: Vec<&str> = if input.starts_with(SEPARATOR) {
        Vec::new()
    } else {
        base.segments().collect()
    };

    for segment in input.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name),
        }
    }

    VfsPath::from_segments(stack)
}
