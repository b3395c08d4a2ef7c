//! Save collaborators for finished archives

use parking_lot::Mutex;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use super::errors::CaptureError;
use crate::archive::ArchivePayload;

/// Type alias for a boxed save future
pub type SaveFuture<'a> = Pin<Box<dyn Future<Output = Result<PathBuf, CaptureError>> + Send + 'a>>;

/// Host-supplied capability that stores a finished archive
pub trait ArchiveSink: Send + Sync {
    /// Store `payload`, returning where it ended up
    fn save<'a>(&'a self, payload: &'a ArchivePayload) -> SaveFuture<'a>;
}

/// Writes archives into a directory under their suggested name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArchiveSink for DirectorySink {
    fn save<'a>(&'a self, payload: &'a ArchivePayload) -> SaveFuture<'a> {
        Box::pin(async move {
            tokio::fs::create_dir_all(&self.dir)
                .await
                .map_err(|source| CaptureError::Save {
                    path: self.dir.clone(),
                    source,
                })?;

            let path = self.dir.join(&payload.filename_hint);
            tokio::fs::write(&path, &payload.bytes)
                .await
                .map_err(|source| CaptureError::Save {
                    path: path.clone(),
                    source,
                })?;

            log::info!("Saved archive to {}", path.display());
            Ok(path)
        })
    }
}

/// Keeps archives in memory; for hosts that stream the bytes elsewhere
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Mutex<Vec<ArchivePayload>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every archive saved so far, oldest first
    #[must_use]
    pub fn saved(&self) -> Vec<ArchivePayload> {
        self.saved.lock().clone()
    }
}

impl ArchiveSink for MemorySink {
    fn save<'a>(&'a self, payload: &'a ArchivePayload) -> SaveFuture<'a> {
        self.saved.lock().push(payload.clone());
        let path = PathBuf::from(&payload.filename_hint);
        Box::pin(async move { Ok(path) })
    }
}
