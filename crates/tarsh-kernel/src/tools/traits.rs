//! Core tool traits and types.

use crate::result::ExecResult;

use super::context::ExecContext;

/// Arguments passed to a tool, in command-line order.
///
/// The command name itself is not included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Get a positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// The first positional argument. Tools ignore anything after it.
    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }
}

impl<S: Into<String>> FromIterator<S> for ToolArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A command that can be executed against the archive.
pub trait Tool {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Execute the tool with the given arguments and context.
    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult;
}
