//! Error types for capture jobs

use std::path::PathBuf;

use crate::archive::ArchiveError;
use crate::document::DocumentError;
use crate::fetcher::FetchError;

/// Errors that abort a capture before an archive is saved
///
/// Individual resource failures never surface here; they are logged and
/// the resource is left out of the archive.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The page URL could not be parsed
    #[error("Invalid page URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The page URL uses a scheme that cannot be captured (e.g. `chrome:`)
    #[error("Cannot capture {scheme}: pages ({url})")]
    DisallowedScheme { url: String, scheme: String },

    /// The page itself could not be fetched
    #[error("Failed to fetch page: {0}")]
    PageFetch(#[source] FetchError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// The save collaborator could not store the archive
    #[error("Failed to save archive to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for Result with `CaptureError`
pub type CaptureJobResult<T> = Result<T, CaptureError>;
