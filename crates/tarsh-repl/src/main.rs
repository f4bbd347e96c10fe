//! tarsh CLI entry point.
//!
//! Usage:
//!   tarsh -u <user> -c <host> -f <archive.tar> -l <actions.log>

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tarsh_repl::Cli;

fn main() -> ExitCode {
    // Diagnostics go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match tarsh_repl::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
