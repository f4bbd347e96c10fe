//! Action log: one JSON record per accepted input line.
//!
//! Records are appended as JSON Lines:
//!
//! ```text
//! {"timestamp":"2024-05-01T12:00:00.123456+02:00","user":"amy","action":"ls docs"}
//! ```
//!
//! The file sink opens, appends, and closes the file on every record so no
//! handle is held between commands.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from an action log sink.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot write action log {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("cannot encode action record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("action log lock poisoned")]
    Poisoned,
}

/// One logged input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Local time, ISO-8601 with offset.
    pub timestamp: String,
    pub user: String,
    /// The input line, trimmed, exactly as typed otherwise.
    pub action: String,
}

impl ActionRecord {
    /// Create a record stamped with the current local time.
    pub fn now(user: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            user: user.into(),
            action: action.into(),
        }
    }
}

/// An append-only destination for action records.
pub trait ActionLog {
    /// Append one record.
    fn append(&self, record: &ActionRecord) -> Result<(), LogError>;
}

/// Appends records to a JSON Lines file.
#[derive(Debug, Clone)]
pub struct JsonlActionLog {
    path: PathBuf,
}

impl JsonlActionLog {
    /// Log to `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> LogError {
        LogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ActionLog for JsonlActionLog {
    fn append(&self, record: &ActionRecord) -> Result<(), LogError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(&line).map_err(|e| self.io_error(e))
    }
}

/// Keeps records in memory. Clones share the same record list.
#[derive(Debug, Clone, Default)]
pub struct MemoryActionLog {
    records: Arc<RwLock<Vec<ActionRecord>>>,
}

impl MemoryActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record appended so far.
    pub fn records(&self) -> Vec<ActionRecord> {
        self.records
            .read()
            .map(|r| r.to_vec())
            .unwrap_or_default()
    }
}

impl ActionLog for MemoryActionLog {
    fn append(&self, record: &ActionRecord) -> Result<(), LogError> {
        self.records
            .write()
            .map_err(|_| LogError::Poisoned)?
            .push(record.clone());
        Ok(())
    }
}
