//! Blob persistence for the user aggregate.
//!
//! The whole [`crate::UserState`] is persisted as a single JSON blob behind
//! the [`StateStore`] port. There is no incremental persistence: every
//! mutation saves a full snapshot, and a snapshot that cannot be read back
//! is replaced by defaults rather than surfaced to the user.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

/// Errors from reading or writing the persisted blob.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("profile storage error: {0}")]
    Io(#[from] io::Error),

    /// The state could not be serialized.
    #[error("profile serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Where the serialized user state lives.
///
/// Implementations only move opaque strings; interpreting the blob is the
/// [`crate::Profile`]'s job.
pub trait StateStore: Send {
    /// Read the stored blob, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored blob.
    fn save(&self, blob: &str) -> Result<(), StoreError>;
}

/// A [`StateStore`] backed by a single file on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store the blob at `path`, creating parent directories on save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// An in-memory [`StateStore`] for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
            saves: AtomicUsize::new(0),
        }
    }

    /// The currently stored blob.
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().map(|guard| guard.clone()).unwrap_or(None)
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob())
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        if let Ok(mut guard) = self.blob.lock() {
            *guard = Some(blob.to_string());
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
