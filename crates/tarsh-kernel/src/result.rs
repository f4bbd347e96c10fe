//! ExecResult: the outcome of one command.
//!
//! Every tool returns an `ExecResult`. A zero `code` means success; user
//! errors carry code 1 and a single-line message in `err`.
//!
//! `out` is printed as-is, so every output line ends with `\n` and an empty
//! `out` prints nothing. `err` has no trailing newline; the REPL adds one.

use crate::tools::CommandError;

/// The result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output.
    pub out: String,
    /// Standard error.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// True if the command succeeded.
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

impl From<CommandError> for ExecResult {
    fn from(err: CommandError) -> Self {
        Self::failure(1, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = ExecResult::success("hello\n");
        assert!(result.ok());
        assert_eq!(result.out, "hello\n");
        assert!(result.err.is_empty());
    }

    #[test]
    fn test_from_command_error() {
        let result = ExecResult::from(CommandError::MissingOperand { command: "wc" });
        assert!(!result.ok());
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "wc: missing operand");
    }
}
