//! Execution context for tools.

use crate::archive::{ArchiveIndex, Lookup};
use crate::vfs::{resolve, VfsPath};

use super::error::CommandError;

/// Execution context passed to tools.
///
/// Borrows the archive for the duration of one command and carries a copy
/// of the current directory. The kernel commits `cwd` back after the tool
/// returns.
#[derive(Debug)]
pub struct ExecContext<'a> {
    /// The archive being browsed.
    pub index: &'a ArchiveIndex,
    /// Current working directory.
    pub cwd: VfsPath,
    /// Let `cd` enter directories that only exist implicitly.
    pub implicit_dirs_navigable: bool,
}

impl<'a> ExecContext<'a> {
    /// Create a context rooted at `/`.
    pub fn new(index: &'a ArchiveIndex) -> Self {
        Self {
            index,
            cwd: VfsPath::root(),
            implicit_dirs_navigable: false,
        }
    }

    /// Set the starting directory.
    pub fn with_cwd(mut self, cwd: VfsPath) -> Self {
        self.cwd = cwd;
        self
    }

    /// Allow `cd` into implicit directories.
    pub fn with_implicit_dirs(mut self, navigable: bool) -> Self {
        self.implicit_dirs_navigable = navigable;
        self
    }

    /// Resolve a command-line path against the current directory.
    pub fn resolve_path(&self, input: &str) -> VfsPath {
        resolve(&self.cwd, input)
    }

    /// Change the current working directory.
    pub fn set_cwd(&mut self, path: VfsPath) {
        self.cwd = path;
    }

    /// Resolve `arg` and return the content of the regular file it names.
    ///
    /// Errors quote `arg` as given, not the resolved path.
    pub fn read_file(&self, command: &'static str, arg: &str) -> Result<&'a [u8], CommandError> {
        let path = self.resolve_path(arg);
        match self.index.lookup(&path) {
            Lookup::File(data) => Ok(data),
            Lookup::Directory | Lookup::Other => Err(CommandError::NotAFile {
                command,
                arg: arg.to_string(),
            }),
            Lookup::NotFound => Err(CommandError::NoSuchFile {
                command,
                arg: arg.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_relative_to_cwd() {
        let index = ArchiveIndex::builder()
            .dir("docs")
            .file("docs/a.txt", "A")
            .build();
        let ctx = ExecContext::new(&index).with_cwd(VfsPath::parse("docs"));
        assert_eq!(ctx.read_file("wc", "a.txt").unwrap(), b"A");
        assert_eq!(ctx.read_file("wc", "../docs/./a.txt").unwrap(), b"A");
    }

    #[test]
    fn test_read_file_errors_quote_argument() {
        let index = ArchiveIndex::builder().dir("docs").build();
        let ctx = ExecContext::new(&index);
        assert_eq!(
            ctx.read_file("wc", "./docs").unwrap_err(),
            CommandError::NotAFile {
                command: "wc",
                arg: "./docs".into()
            }
        );
        assert_eq!(
            ctx.read_file("tac", "docs/../x").unwrap_err(),
            CommandError::NoSuchFile {
                command: "tac",
                arg: "docs/../x".into()
            }
        );
    }
}
