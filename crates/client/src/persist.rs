//! Local JSON snapshot persistence.
//!
//! One file per collection under a snapshot directory, restored at startup
//! and rewritten after every successful change. Read and write failures
//! are non-fatal: they are logged and the in-memory default applies.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Reads and writes per-collection JSON snapshot files.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Restore a snapshot, or `None` when the file is missing or unreadable.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.path(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %err, "Snapshot read failed");
                }
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Snapshot parse failed");
                None
            }
        }
    }

    /// Rewrite a snapshot. Failures are logged and swallowed; a value that
    /// cannot be serialized leaves the existing file alone.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) {
        let path = self.path(name);
        let bytes = match serde_json::to_vec_pretty(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Snapshot serialize failed");
                return;
            }
        };
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(&path, bytes));
        if let Err(err) = result {
            tracing::warn!(path = %path.display(), error = %err, "Snapshot write failed");
        }
    }
}
