//! tac: Print lines of a file in reverse order.

use crate::result::ExecResult;
use crate::tools::{CommandError, ExecContext, Tool, ToolArgs};

/// Tac tool: print a file's lines last-to-first.
pub struct Tac;

impl Tool for Tac {
    fn name(&self) -> &str {
        "tac"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(arg) = args.first() else {
            return CommandError::MissingOperand { command: "tac" }.into();
        };

        let data = match ctx.read_file("tac", arg) {
            Ok(data) => data,
            Err(e) => return e.into(),
        };

        match std::str::from_utf8(data) {
            Ok(text) => ExecResult::success(reverse_lines(text)),
            Err(_) => CommandError::CannotDecode {
                command: "tac",
                arg: arg.to_string(),
            }
            .into(),
        }
    }
}

/// Drop at most one trailing newline, then emit the lines last-to-first.
///
/// Empty input is one empty line, so it still prints a newline.
fn reverse_lines(text: &str) -> String {
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.rsplit('\n').fold(String::with_capacity(text.len() + 1), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ArchiveIndex;
    use crate::vfs::VfsPath;

    fn make_index() -> ArchiveIndex {
        ArchiveIndex::builder()
            .dir("d/")
            .file("d/nums.txt", "1\n2\n3\n")
            .file("d/noeol.txt", "1\n2\n3")
            .file("d/blank.txt", "a\n\nb\n\n")
            .file("d/bin.dat", vec![0xff, 0xfe, 0x00])
            .file("d/empty.txt", "")
            .file("d/nl.txt", "\n")
            .build()
    }

    fn tac(index: &ArchiveIndex, args: &[&str]) -> ExecResult {
        let mut ctx = ExecContext::new(index).with_cwd(VfsPath::parse("d"));
        Tac.execute(&args.iter().copied().collect(), &mut ctx)
    }

    #[test]
    fn test_tac_reverses() {
        let index = make_index();
        assert_eq!(tac(&index, &["nums.txt"]).out, "3\n2\n1\n");
        assert_eq!(tac(&index, &["noeol.txt"]).out, "3\n2\n1\n");
    }

    #[test]
    fn test_tac_strips_only_one_newline() {
        let index = make_index();
        assert_eq!(tac(&index, &["blank.txt"]).out, "\nb\n\na\n");
    }

    #[test]
    fn test_tac_empty_file_prints_one_empty_line() {
        let index = make_index();
        let empty = tac(&index, &["empty.txt"]);
        assert!(empty.ok());
        assert_eq!(empty.out, "\n");
        assert_eq!(tac(&index, &["nl.txt"]).out, "\n");
    }

    #[test]
    fn test_tac_decode_error() {
        let index = make_index();
        let result = tac(&index, &["bin.dat"]);
        assert!(!result.ok());
        assert_eq!(result.err, "tac: bin.dat: cannot decode file");
    }

    #[test]
    fn test_tac_errors() {
        let index = make_index();
        assert_eq!(tac(&index, &[]).err, "tac: missing operand");
        assert_eq!(tac(&index, &["nope"]).err, "tac: nope: No such file");
        assert_eq!(tac(&index, &[".."]).err, "tac: ..: Not a file");
    }

    #[test]
    fn test_reverse_lines_edge_cases() {
        assert_eq!(reverse_lines(""), "\n");
        assert_eq!(reverse_lines("\n\n"), "\n\n");
        assert_eq!(reverse_lines("only"), "only\n");
        assert_eq!(reverse_lines("only\n"), "only\n");
    }
}
