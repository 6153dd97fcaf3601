//! Access to the game's log directory.
//!
//! Everything the game writes lives in one directory:
//!
//! ```text
//! <root>/
//!   Status.json                      # Snapshot, rewritten in place
//!   Journal.<yymmddhhmmss>.<nn>.log  # Append-only event log, rotated
//! ```
//!
//! The game rewrites `Status.json` under a brief exclusive lock, so snapshot
//! reads go through a [`RetryPolicy`]. Journal files are only ever appended
//! to; their names order them chronologically.

mod journal;
mod retry;
mod status;

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

pub use journal::JournalFile;
pub use retry::RetryPolicy;

/// Errors that can occur while reading the log directory.
#[derive(Debug, thiserror::Error)]
pub enum LogDirError {
    #[error("could not read {} after {attempts} attempt(s): {source}", .path.display())]
    ExhaustedRetries {
        path: PathBuf,
        attempts: u32,
        #[source]
        source: io::Error,
    },

    #[error("malformed {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {0} found in journal files")]
    NotFound(&'static str),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogDirError {
    /// True for the "nothing written yet" case, which is normal at startup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = core::result::Result<T, LogDirError>;

/// What to do when a journal file can't be opened mid-scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreadableJournal {
    /// Fail the whole query with [`LogDirError::Io`].
    #[default]
    Abort,

    /// Log a warning and fall back to older journal files.
    Skip,
}

/// The game's log directory, plus the policies used when reading it.
#[derive(Debug, Clone)]
pub struct LogDir {
    root: PathBuf,
    retry: RetryPolicy,
    unreadable: UnreadableJournal,
}

impl LogDir {
    /// Creates a handle for the given directory with default policies.
    ///
    /// Nothing is read until a query runs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            retry: RetryPolicy::default(),
            unreadable: UnreadableJournal::default(),
        }
    }

    /// Sets the retry policy for snapshot reads.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the policy for journal files that can't be opened.
    #[must_use]
    pub fn with_unreadable(mut self, unreadable: UnreadableJournal) -> Self {
        self.unreadable = unreadable;
        self
    }

    /// Returns the default log directory:
    /// `~/Saved Games/Frontier Developments/Elite Dangerous`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| {
            h.join("Saved Games")
                .join("Frontier Developments")
                .join("Elite Dangerous")
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }
}
