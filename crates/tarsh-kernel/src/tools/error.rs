//! User-facing command errors.
//!
//! These never abort the session: the kernel turns them into a failed
//! [`ExecResult`](crate::ExecResult) with a single-line message.

use thiserror::Error;

/// A command-level error, rendered as one line prefixed by the command name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}: command not found")]
    NotFound(String),
    #[error("{command}: missing operand")]
    MissingOperand { command: &'static str },
    #[error("{command}: {arg}: No such file")]
    NoSuchFile { command: &'static str, arg: String },
    #[error("{command}: {arg}: Not a file")]
    NotAFile { command: &'static str, arg: String },
    #[error("{command}: {arg}: No such file or directory")]
    NoSuchFileOrDirectory { command: &'static str, arg: String },
    #[error("{command}: {arg}: cannot decode file")]
    CannotDecode { command: &'static str, arg: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CommandError::NotFound("foo".into()).to_string(),
            "foo: command not found"
        );
        assert_eq!(
            CommandError::NoSuchFileOrDirectory {
                command: "cd",
                arg: "../x".into()
            }
            .to_string(),
            "cd: ../x: No such file or directory"
        );
        assert_eq!(
            CommandError::NotAFile {
                command: "tac",
                arg: "dir".into()
            }
            .to_string(),
            "tac: dir: Not a file"
        );
    }
}
