//! tarsh-kernel: the core of tarsh, a shell over a read-only tar archive.
//!
//! This crate provides:
//!
//! - **Archive**: loads a tar (or tar.gz) file into an immutable entry index
//! - **VFS**: path normalization and directory enumeration over the flat
//!   entry list
//! - **Tools**: the `Tool` trait, registry, and the `ls`, `cd`, `wc`, `tac`
//!   builtins
//! - **Kernel**: the session object owning the current directory
//! - **Action log**: JSON Lines record of every accepted input line
//!
//! ```
//! use tarsh_kernel::{ArchiveIndex, Kernel, KernelConfig, LineOutcome, MemoryActionLog};
//!
//! let index = ArchiveIndex::builder()
//!     .dir("a/")
//!     .file("a/b.txt", "hello\n")
//!     .build();
//! let mut kernel = Kernel::new(KernelConfig::new("amy", "box"), index, MemoryActionLog::new());
//!
//! kernel.execute_line("cd a");
//! match kernel.execute_line("ls") {
//!     LineOutcome::Executed(result) => assert_eq!(result.out, "b.txt\n"),
//!     other => panic!("{other:?}"),
//! }
//! ```

pub mod action_log;
pub mod archive;
pub mod dispatch;
pub mod kernel;
pub mod result;
pub mod tools;
pub mod vfs;

pub use action_log::{ActionLog, ActionRecord, JsonlActionLog, LogError, MemoryActionLog};
pub use archive::{ArchiveError, ArchiveIndex};
pub use dispatch::{CommandInvocation, LineOutcome};
pub use kernel::{Kernel, KernelConfig};
pub use result::ExecResult;
pub use vfs::{resolve, VfsPath};
