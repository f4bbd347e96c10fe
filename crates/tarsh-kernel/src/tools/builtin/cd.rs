//! cd: Change working directory.

use crate::result::ExecResult;
use crate::tools::{CommandError, ExecContext, Tool, ToolArgs};
use crate::vfs::{is_implicit_dir, VfsPath};

/// Cd tool: change current working directory.
///
/// Only directories with an explicit archive entry are navigable, unless
/// the context allows implicit directories. `ls` has no such restriction,
/// so a name can be listed yet refuse `cd`.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        match change_dir(args.first(), ctx) {
            Ok(()) => ExecResult::success(""),
            Err(e) => e.into(),
        }
    }
}

fn change_dir(arg: Option<&str>, ctx: &mut ExecContext<'_>) -> Result<(), CommandError> {
    let Some(arg) = arg.filter(|a| *a != "/") else {
        ctx.set_cwd(VfsPath::root());
        return Ok(());
    };

    let target = ctx.resolve_path(arg);
    let navigable = target.is_root()
        || ctx.index.has_directory(&target)
        || (ctx.implicit_dirs_navigable && is_implicit_dir(ctx.index, &target));

    if !navigable {
        return Err(CommandError::NoSuchFileOrDirectory {
            command: "cd",
            arg: arg.to_string(),
        });
    }

    tracing::debug!(from = %ctx.cwd, to = %target, "cd");
    ctx.set_cwd(target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ArchiveIndex;

    fn make_index() -> ArchiveIndex {
        ArchiveIndex::builder()
            .dir("a/")
            .file("a/b.txt", "b")
            .dir("a/c/")
            .file("implicit/inner.txt", "i")
            .other("a/link")
            .build()
    }

    fn cd(ctx: &mut ExecContext<'_>, args: &[&str]) -> ExecResult {
        Cd.execute(&args.iter().copied().collect(), ctx)
    }

    #[test]
    fn test_cd_subdir() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index);
        let result = cd(&mut ctx, &["a"]);
        assert!(result.ok());
        assert_eq!(ctx.cwd, VfsPath::parse("a"));

        assert!(cd(&mut ctx, &["c"]).ok());
        assert_eq!(ctx.cwd, VfsPath::parse("a/c"));
    }

    #[test]
    fn test_cd_no_args_goes_to_root() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index).with_cwd(VfsPath::parse("a/c"));
        assert!(cd(&mut ctx, &[]).ok());
        assert!(ctx.cwd.is_root());
    }

    #[test]
    fn test_cd_slash_goes_to_root() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index).with_cwd(VfsPath::parse("a"));
        assert!(cd(&mut ctx, &["/"]).ok());
        assert!(ctx.cwd.is_root());
    }

    #[test]
    fn test_cd_parent_at_root_stays() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index);
        assert!(cd(&mut ctx, &[".."]).ok());
        assert!(ctx.cwd.is_root());
    }

    #[test]
    fn test_cd_parent() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index).with_cwd(VfsPath::parse("a/c"));
        assert!(cd(&mut ctx, &[".."]).ok());
        assert_eq!(ctx.cwd, VfsPath::parse("a"));
    }

    #[test]
    fn test_cd_nonexistent_keeps_cwd() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index).with_cwd(VfsPath::parse("a"));
        let result = cd(&mut ctx, &["missing"]);
        assert!(!result.ok());
        assert_eq!(result.err, "cd: missing: No such file or directory");
        assert_eq!(ctx.cwd, VfsPath::parse("a"));
    }

    #[test]
    fn test_cd_file_or_link_fails() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index);
        assert!(!cd(&mut ctx, &["a/b.txt"]).ok());
        assert!(!cd(&mut ctx, &["a/link"]).ok());
        assert!(ctx.cwd.is_root());
    }

    #[test]
    fn test_cd_implicit_dir_rejected_by_default() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index);
        let result = cd(&mut ctx, &["implicit"]);
        assert_eq!(result.err, "cd: implicit: No such file or directory");
        assert!(ctx.cwd.is_root());
    }

    #[test]
    fn test_cd_implicit_dir_when_enabled() {
        let index = make_index();
        let mut ctx = ExecContext::new(&index).with_implicit_dirs(true);
        assert!(cd(&mut ctx, &["implicit"]).ok());
        assert_eq!(ctx.cwd, VfsPath::parse("implicit"));
    }
}
