use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Describes why a snapshot could not be saved or loaded.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the underlying storage failed.
    #[error("snapshot storage failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Keeps the latest [snapshot](crate::GameSnapshot) of a game somewhere outside of memory.
/// Implemented by the host, which knows where and how to store it.
///
/// # Errors
///
/// The implementor decides which failures are worth reporting. A
/// [GameSession](crate::GameSession) propagates them to its caller and keeps the state it
/// already holds.
#[async_trait]
pub trait SnapshotStore {
    /// Replaces the stored snapshot with `snapshot`.
    async fn save(&mut self, snapshot: &str) -> Result<(), StoreError>;

    /// # Returns
    ///
    /// The stored snapshot, or [None] if nothing has been saved yet.
    async fn load(&self) -> Result<Option<String>, StoreError>;
}

/// Keeps the latest snapshot in memory. Useful for tests and hosts that persist elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    /// The latest saved snapshot.
    snapshot: Option<String>,
    /// The number of times a snapshot was saved.
    saves: usize,
}

impl MemoryStore {
    /// # Returns
    ///
    /// An empty [MemoryStore].
    #[inline]
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// The latest saved snapshot.
    #[inline]
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// The number of times a snapshot was saved.
    #[inline]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn save(&mut self, snapshot: &str) -> Result<(), StoreError> {
        self.snapshot = Some(snapshot.to_owned());
        self.saves += 1;
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.snapshot.clone())
    }
}

/// Keeps the latest snapshot in a JSON file, replacing it on every save.
///
/// [save](SnapshotStore::save) and [load](SnapshotStore::load) call blocking [std::fs]
/// functions and never yield. Hosts running an async executor should call them from a
/// blocking-friendly thread so the event loop is not stalled.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// The file holding the snapshot.
    path: PathBuf,
}

impl FileStore {
    /// The file name [FileStore::in_dir] stores snapshots under.
    pub const DEFAULT_FILE_NAME: &'static str = "rami_state.json";

    /// # Arguments
    ///
    /// * `path`: The file holding the snapshot. Created on the first save.
    #[inline]
    pub fn new(path: impl Into<PathBuf>) -> FileStore {
        FileStore { path: path.into() }
    }

    /// # Returns
    ///
    /// A [FileStore] for [FileStore::DEFAULT_FILE_NAME] inside `dir`.
    #[inline]
    pub fn in_dir(dir: impl AsRef<Path>) -> FileStore {
        FileStore::new(dir.as_ref().join(FileStore::DEFAULT_FILE_NAME))
    }

    /// The file holding the snapshot.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    async fn save(&mut self, snapshot: &str) -> Result<(), StoreError> {
        // the snapshot file is only ever replaced whole
        let partial = self.path.with_extension("json.partial");
        fs::write(&partial, snapshot)?;
        fs::rename(&partial, &self.path)?;
        debug!(path = %self.path.display(), bytes = snapshot.len(), "saved snapshot");
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }
}
