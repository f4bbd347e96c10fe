//! Turning an input line into a command invocation.

use crate::result::ExecResult;
use crate::tools::ToolArgs;

/// A command name plus its arguments, split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub args: ToolArgs,
}

impl CommandInvocation {
    /// Split a line on whitespace. Returns `None` for a blank line.
    ///
    /// There is no quoting: `wc "a b"` passes `"a` as the argument.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let name = words.next()?.to_string();
        Some(Self {
            name,
            args: words.collect(),
        })
    }
}

/// What the kernel did with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line: nothing logged, nothing run.
    Empty,
    /// `exit` was entered. The session should end.
    Exit,
    /// A command ran (or was reported as not found).
    Executed(ExecResult),
}
