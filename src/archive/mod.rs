//! Archive assembly
//!
//! The rewritten document and every fetched resource are collected into an
//! ordered [`Archive`] and written out as a single zip payload.

pub mod builder;
pub mod entities;

pub use builder::{ArchiveBuilder, ArchivePayload, archive_name};
pub use entities::decode_basic_entities;

/// Error raised while writing the archive payload
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Failed to write zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered archive entries keyed by path
///
/// Inserting a path that already exists replaces its bytes and keeps the
/// position of the first insertion: the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Archive {
    entries: Vec<(String, Vec<u8>)>,
}

impl Archive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite an entry
    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        let path = path.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == path) {
            Some(entry) => {
                log::debug!("Archive entry {path} overwritten by a later resource");
                entry.1 = bytes;
            }
            None => self.entries.push((path, bytes)),
        }
    }

    /// Bytes stored under `path`
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == path)
            .map(|(_, bytes)| bytes.as_slice())
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[(String, Vec<u8>)] {
        &self.entries
    }

    /// Entry paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
