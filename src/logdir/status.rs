//! Snapshot reads: `Status.json`.

use std::{fs, path::PathBuf, time::SystemTime};

use crate::model::Status;

use super::{LogDir, LogDirError, Result};

impl LogDir {
    /// Path of the status snapshot.
    pub fn status_path(&self) -> PathBuf {
        self.root.join("Status.json")
    }

    /// Reads and decodes the current status snapshot.
    ///
    /// Always goes to disk. Compare [`Status::timestamp`] across calls to
    /// detect a new write.
    pub fn status(&self) -> Result<Status> {
        let path = self.status_path();
        let bytes = self.retry.read_all(&path)?;
        Status::from_slice(&bytes).map_err(|source| LogDirError::Malformed { path, source })
    }

    /// Modification time of the snapshot, without reading it.
    pub fn status_modified(&self) -> Result<SystemTime> {
        let path = self.status_path();
        fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|source| LogDirError::Io { path, source })
    }
}
