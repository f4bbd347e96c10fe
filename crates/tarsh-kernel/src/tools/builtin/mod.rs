//! Built-in tools for tarsh.
//!
//! These tools are always available and only ever read from the archive.

mod cd;
mod ls;
mod tac;
mod wc;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cd::Cd);
    registry.register(ls::Ls);
    registry.register(tac::Tac);
    registry.register(wc::Wc);
}
