use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use hearth_core::types::ScheduleDocument;
use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};

/// File name of the backing store, hidden inside the storage directory.
pub const PERSISTENCE: &str = ".schedule_list.json";

/// In-memory schedule mapping with a lagging on-disk mirror.
///
/// The map is the single source of truth. The backing file is read exactly
/// once via [`load`](Self::load) and rewritten in full after each mutation;
/// the write happens on a spawned task the mutating caller never awaits.
/// Rapid updates may persist in any order — only the final file state after
/// all queued writes is guaranteed accurate.
pub struct ScheduleStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, ScheduleDocument>>,
}

impl ScheduleStore {
    /// Empty store bound to an explicit backing file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Empty store backed by [`PERSISTENCE`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PERSISTENCE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Populate the map from the backing file, off the caller's thread.
    ///
    /// A missing file is normal first-run state and yields an empty mapping.
    /// A file that exists but fails to parse is an error: the previous state
    /// is unknown, and silently starting empty would clobber it on the next
    /// persist.
    pub async fn load(&self) -> Result<()> {
        let path = self.path.clone();
        debug!(path = %path.display(), "loading schedules");
        let loaded = tokio::task::spawn_blocking(move || read_mapping(&path))
            .await
            .map_err(join_error)??;
        let count = loaded.len();
        *self.entries.lock().unwrap() = loaded;
        debug!(count, "schedules loaded");
        Ok(())
    }

    /// Pure read. `None` means the id has never been stored.
    pub fn get(&self, id: &str) -> Option<ScheduleDocument> {
        self.entries.lock().unwrap().get(id).cloned()
    }

    /// Number of stored schedules.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Upsert `doc` under `id` and queue a background persist.
    ///
    /// The in-memory map changes synchronously; the file write runs on a
    /// spawned task and its outcome is logged, never reported to the
    /// caller. The error return is reserved for the `item_not_found` wire
    /// contract and cannot currently occur.
    pub fn update(&self, id: &str, doc: ScheduleDocument) -> Result<()> {
        debug!(schedule_id = %id, "updating schedule");
        let snapshot = {
            let mut entries = self.entries.lock().unwrap();
            entries.insert(id.to_string(), doc);
            entries.clone()
        };
        let path = self.path.clone();
        tokio::spawn(async move {
            if let Err(e) = write_mapping(path.clone(), snapshot).await {
                warn!(path = %path.display(), error = %e, "schedule persist failed");
            }
        });
        Ok(())
    }

    /// Serialize the current map and rewrite the backing file in full.
    pub async fn persist(&self) -> Result<()> {
        let snapshot = self.entries.lock().unwrap().clone();
        write_mapping(self.path.clone(), snapshot).await
    }
}

/// Synchronous read, called from a blocking task.
fn read_mapping(path: &Path) -> Result<HashMap<String, ScheduleDocument>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(e) => return Err(ScheduleError::Io(e)),
    };
    serde_json::from_str(&raw).map_err(|e| ScheduleError::Malformed {
        path: path.display().to_string(),
        source: e,
    })
}

/// Serialize and overwrite the whole backing file on the blocking pool.
async fn write_mapping(path: PathBuf, entries: HashMap<String, ScheduleDocument>) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        let json = serde_json::to_string_pretty(&entries).map_err(ScheduleError::Serialization)?;
        std::fs::write(&path, json)?;
        debug!(path = %path.display(), count = entries.len(), "schedules persisted");
        Ok(())
    })
    .await
    .map_err(join_error)?
}

fn join_error(e: tokio::task::JoinError) -> ScheduleError {
    ScheduleError::Io(std::io::Error::other(e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
