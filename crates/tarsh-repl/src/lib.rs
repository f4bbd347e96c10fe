//! tarsh REPL: interactive shell over a read-only tar archive.
//!
//! This crate handles everything around the kernel:
//! - Startup parameters (clap)
//! - Loading the archive, fatal on failure
//! - Prompt and line editing via rustyline
//! - Ctrl-C (re-prompt) and Ctrl-D (print `exit`, leave)
//! - Command history in the XDG data directory

pub mod cli;

pub use cli::Cli;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use tarsh_kernel::{archive, JsonlActionLog, Kernel, KernelConfig, LineOutcome};

/// Whether the REPL should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// REPL state: the kernel plus history settings.
pub struct Repl {
    kernel: Kernel,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Load the archive named on the command line and build a session.
    ///
    /// Fails if the archive is missing or cannot be parsed.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let index = archive::load(&cli.fs).context("Failed to load filesystem archive")?;

        let config = KernelConfig::new(&cli.username, &cli.computername)
            .with_implicit_dirs(cli.implicit_dirs);
        let log = JsonlActionLog::new(&cli.logfile);
        let kernel = Kernel::new(config, index, log);

        let history_path = if cli.no_history {
            None
        } else {
            default_history_path()
        };

        Ok(Self {
            kernel,
            history_path,
        })
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Process a single line of input, writing command output to `out` and
    /// errors to `err`.
    pub fn process_line(
        &mut self,
        line: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<Step> {
        match self.kernel.execute_line(line) {
            LineOutcome::Empty => Ok(Step::Continue),
            LineOutcome::Exit => Ok(Step::Exit),
            LineOutcome::Executed(result) => {
                out.write_all(result.out.as_bytes())?;
                if !result.err.is_empty() {
                    writeln!(err, "{}", result.err)?;
                }
                Ok(Step::Continue)
            }
        }
    }

    /// Handle one result from the line editor.
    ///
    /// Ctrl-C prints an empty line and keeps going. End of input prints
    /// `exit` and stops. Any other editor error ends the session with an
    /// error.
    pub fn handle_input(
        &mut self,
        input: Result<String, ReadlineError>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Step> {
        match input {
            Ok(line) => self
                .process_line(&line, out, err)
                .context("Failed to write output"),
            Err(ReadlineError::Interrupted) => {
                writeln!(out)?;
                Ok(Step::Continue)
            }
            Err(ReadlineError::Eof) => {
                writeln!(out, "exit")?;
                Ok(Step::Exit)
            }
            Err(e) => Err(e).context("Failed to read input"),
        }
    }

    /// Run the interactive loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut rl: Editor<(), DefaultHistory> =
            Editor::new().context("Failed to create editor")?;

        if let Some(ref path) = self.history_path
            && let Err(e) = rl.load_history(path)
        {
            // Only log if it's not a "file not found" error (expected on first run)
            let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound);
            if !is_not_found {
                tracing::warn!("Failed to load history: {}", e);
            }
        }

        let stdout = io::stdout();
        let stderr = io::stderr();

        let outcome = loop {
            let input = rl.readline(&self.kernel.prompt());

            if let Ok(line) = &input
                && !line.trim().is_empty()
                && let Err(e) = rl.add_history_entry(line.as_str())
            {
                tracing::warn!("Failed to add history entry: {}", e);
            }

            match self.handle_input(input, &mut stdout.lock(), &mut stderr.lock()) {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        self.save_history(&mut rl);
        outcome
    }

    fn save_history(&self, rl: &mut Editor<(), DefaultHistory>) {
        let Some(path) = &self.history_path else {
            return;
        };
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!("Failed to create history directory: {}", e);
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("Failed to save history: {}", e);
        }
    }
}

/// `<data dir>/tarsh/history.txt`, if a home directory can be found.
fn default_history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.data_dir().join("tarsh").join("history.txt"))
}

/// Load the archive and run an interactive session.
pub fn run(cli: &Cli) -> Result<()> {
    let mut repl = Repl::from_cli(cli)?;
    tracing::debug!(kernel = ?repl.kernel(), "session start");
    repl.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarsh_kernel::{ArchiveIndex, MemoryActionLog};

    fn make_repl() -> Repl {
        let index = ArchiveIndex::builder()
            .dir("a/")
            .file("a/empty.txt", "")
            .file("a/nl.txt", "\n")
            .file("a/lines.txt", "1\n2\n")
            .build();
        let kernel = Kernel::new(KernelConfig::new("amy", "box"), index, MemoryActionLog::new());
        Repl {
            kernel,
            history_path: None,
        }
    }

    fn feed(repl: &mut Repl, input: Result<String, ReadlineError>) -> (Result<Step>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let step = repl.handle_input(input, &mut out, &mut err);
        (
            step,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_tac_empty_file_prints_empty_line() {
        let mut repl = make_repl();
        let (_, out, err) = feed(&mut repl, Ok("tac a/empty.txt".into()));
        assert_eq!(out, "\n");
        assert!(err.is_empty());

        let (_, out, _) = feed(&mut repl, Ok("tac a/nl.txt".into()));
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_empty_listing_prints_nothing() {
        let mut repl = make_repl();
        let (_, out, _) = feed(&mut repl, Ok("ls nowhere".into()));
        assert!(out.is_empty());
        let (_, out, _) = feed(&mut repl, Ok("cd a".into()));
        assert!(out.is_empty());
    }

    #[test]
    fn test_command_output_and_errors() {
        let mut repl = make_repl();
        let (step, out, _) = feed(&mut repl, Ok("tac a/lines.txt".into()));
        assert_eq!(step.unwrap(), Step::Continue);
        assert_eq!(out, "2\n1\n");

        let (_, out, err) = feed(&mut repl, Ok("wc".into()));
        assert!(out.is_empty());
        assert_eq!(err, "wc: missing operand\n");
    }

    #[test]
    fn test_interrupt_reprompts() {
        let mut repl = make_repl();
        let (step, out, _) = feed(&mut repl, Err(ReadlineError::Interrupted));
        assert_eq!(step.unwrap(), Step::Continue);
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_end_of_input_prints_exit() {
        let mut repl = make_repl();
        let (step, out, _) = feed(&mut repl, Err(ReadlineError::Eof));
        assert_eq!(step.unwrap(), Step::Exit);
        assert_eq!(out, "exit\n");
    }

    #[test]
    fn test_editor_error_is_fatal() {
        let mut repl = make_repl();
        let input = Err(ReadlineError::Io(io::Error::other("terminal gone")));
        let (step, out, _) = feed(&mut repl, input);
        let err = step.unwrap_err();
        assert!(format!("{err:#}").contains("terminal gone"), "got {err:#}");
        assert!(out.is_empty());
    }
}
