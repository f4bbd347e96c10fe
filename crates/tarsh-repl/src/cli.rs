//! Startup parameters.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// tarsh: browse a tar archive like a filesystem.
#[derive(Debug, Clone, Parser)]
#[command(name = "tarsh", version, about)]
pub struct Cli {
    /// User name for the prompt and the action log
    #[arg(short = 'u', long, env = "TARSH_USER", value_parser = NonEmptyStringValueParser::new())]
    pub username: String,

    /// Computer name for the prompt
    #[arg(short = 'c', long, env = "TARSH_HOST", value_parser = NonEmptyStringValueParser::new())]
    pub computername: String,

    /// Path to the tar archive holding the virtual filesystem (.tar or .tar.gz)
    #[arg(short = 'f', long = "fs", env = "TARSH_FS")]
    pub fs: PathBuf,

    /// Path to the JSON Lines action log
    #[arg(short = 'l', long, env = "TARSH_LOG")]
    pub logfile: PathBuf,

    /// Allow `cd` into directories that only exist implicitly in the archive
    #[arg(long)]
    pub implicit_dirs: bool,

    /// Do not load or save readline history
    #[arg(long)]
    pub no_history: bool,
}
