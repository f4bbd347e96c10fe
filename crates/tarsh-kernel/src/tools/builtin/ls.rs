//! ls: List directory contents.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs};
use crate::vfs::list_children;

/// Separator between names on the single output line.
const COLUMN_GAP: &str = "  ";

/// Ls tool: list the immediate children of a directory.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let target = ctx.resolve_path(args.first().unwrap_or("."));

        // No existence check: an unknown directory simply lists nothing
        let children = list_children(ctx.index, &target);
        if children.is_empty() {
            return ExecResult::success("");
        }
        let names: Vec<&str> = children.iter().map(String::as_str).collect();
        ExecResult::success(format!("{}\n", names.join(COLUMN_GAP)))
    }
}
