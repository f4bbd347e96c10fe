//! Kernel: the session that owns the current directory.
//!
//! The kernel holds the loaded archive, the tool registry, the action log,
//! and the current working directory. One input line goes in, one
//! [`LineOutcome`] comes out:
//!
//! ```text
//! line ─trim─▶ empty? ──yes──▶ Empty
//!                │no
//!                ▼
//!          action log append
//!                ▼
//!          split on whitespace
//!                ▼
//!   exit ──▶ Exit     tool ──▶ Executed(result)     unknown ──▶ Executed(not found)
//! ```
//!
//! Nothing here touches the terminal. The REPL crate owns input, output,
//! and signals.

use crate::action_log::{ActionLog, ActionRecord};
use crate::archive::ArchiveIndex;
use crate::dispatch::{CommandInvocation, LineOutcome};
use crate::result::ExecResult;
use crate::tools::{CommandError, ExecContext, ToolRegistry};
use crate::vfs::VfsPath;

/// Configuration for a kernel session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    /// User name shown in the prompt and written to the action log.
    pub user: String,

    /// Host name shown in the prompt.
    pub host: String,

    /// Let `cd` enter directories that only exist implicitly.
    ///
    /// Off by default: `ls` shows such directories but `cd` refuses them.
    pub implicit_dirs_navigable: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            host: "localhost".to_string(),
            implicit_dirs_navigable: false,
        }
    }
}

impl KernelConfig {
    /// Create a config for the given user and host.
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            ..Self::default()
        }
    }

    /// Allow `cd` into implicit directories.
    pub fn with_implicit_dirs(mut self, navigable: bool) -> Self {
        self.implicit_dirs_navigable = navigable;
        self
    }
}

/// A tarsh session over one archive.
pub struct Kernel {
    config: KernelConfig,
    index: ArchiveIndex,
    tools: ToolRegistry,
    log: Box<dyn ActionLog>,
    cwd: VfsPath,
}

impl Kernel {
    /// Create a kernel at `/` with every builtin registered.
    pub fn new(config: KernelConfig, index: ArchiveIndex, log: impl ActionLog + 'static) -> Self {
        Self::with_tools(config, index, ToolRegistry::with_builtins(), log)
    }

    /// Create a kernel at `/` with a caller-supplied tool registry.
    pub fn with_tools(
        config: KernelConfig,
        index: ArchiveIndex,
        tools: ToolRegistry,
        log: impl ActionLog + 'static,
    ) -> Self {
        Self {
            config,
            index,
            tools,
            log: Box::new(log),
            cwd: VfsPath::root(),
        }
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn index(&self) -> &ArchiveIndex {
        &self.index
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Current working directory.
    pub fn cwd(&self) -> &VfsPath {
        &self.cwd
    }

    /// The prompt for the next line: `user@host:/dir/$ `.
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.config.user,
            self.config.host,
            self.cwd.display_dir()
        )
    }

    /// Process one input line.
    ///
    /// Non-blank lines are logged before they run, so unknown commands are
    /// logged too.
    pub fn execute_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        let Some(invocation) = CommandInvocation::parse(line) else {
            return LineOutcome::Empty;
        };

        self.record(line);
        self.dispatch(&invocation)
    }

    /// Run an already-parsed command. Does not write to the action log.
    pub fn dispatch(&mut self, invocation: &CommandInvocation) -> LineOutcome {
        tracing::debug!(
            command = %invocation.name,
            args = ?invocation.args.positional,
            cwd = %self.cwd,
            "dispatch"
        );

        if invocation.name == "exit" {
            return LineOutcome::Exit;
        }

        let Some(tool) = self.tools.get(&invocation.name) else {
            return LineOutcome::Executed(CommandError::NotFound(invocation.name.clone()).into());
        };

        let mut ctx = ExecContext::new(&self.index)
            .with_cwd(self.cwd.clone())
            .with_implicit_dirs(self.config.implicit_dirs_navigable);
        let result: ExecResult = tool.execute(&invocation.args, &mut ctx);
        self.cwd = ctx.cwd;

        if !result.ok() {
            tracing::debug!(code = result.code, err = %result.err, "command failed");
        }
        LineOutcome::Executed(result)
    }

    fn record(&self, line: &str) {
        let record = ActionRecord::now(&self.config.user, line);
        if let Err(e) = self.log.append(&record) {
            tracing::warn!("Failed to write action log: {}", e);
        }
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("config", &self.config)
            .field("entries", &self.index.len())
            .field("tools", &self.tools)
            .field("cwd", &self.cwd)
            .finish()
    }
}
