//! Tool system for tarsh.
//!
//! Every filesystem command is a tool implementing the same [`Tool`] trait
//! and registered by name in a [`ToolRegistry`].
//!
//! ```text
//! ToolRegistry
//! └── Builtins (ls, cd, wc, tac)
//! ```
//!
//! `exit` is not a tool: the kernel handles it before dispatch.

mod builtin;
mod context;
mod error;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use error::CommandError;
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolArgs};
