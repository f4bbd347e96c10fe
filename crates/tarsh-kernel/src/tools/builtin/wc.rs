//! wc: Newline, word, and byte count.

use crate::result::ExecResult;
use crate::tools::{CommandError, ExecContext, Tool, ToolArgs};

/// Wc tool: count newlines, words, and bytes of one file.
pub struct Wc;

impl Tool for Wc {
    fn name(&self) -> &str {
        "wc"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(arg) = args.first() else {
            return CommandError::MissingOperand { command: "wc" }.into();
        };

        match ctx.read_file("wc", arg) {
            Ok(data) => {
                let counts = Counts::of(data);
                ExecResult::success(format!(
                    " {} {} {} {}\n",
                    counts.lines, counts.words, counts.bytes, arg
                ))
            }
            Err(e) => e.into(),
        }
    }
}

/// Counts reported by `wc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counts {
    /// Number of `\n` bytes (a final line without newline is not counted).
    lines: usize,
    /// Whitespace-delimited tokens.
    words: usize,
    bytes: usize,
}

impl Counts {
    fn of(data: &[u8]) -> Self {
        Self {
            lines: data.iter().filter(|&&b| b == b'\n').count(),
            words: data
                .split(|&b| is_word_separator(b))
                .filter(|w| !w.is_empty())
                .count(),
            bytes: data.len(),
        }
    }
}

/// ASCII whitespace, including vertical tab which `u8::is_ascii_whitespace` omits.
fn is_word_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
