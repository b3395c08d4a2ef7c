//! Core configuration types for page captures
//!
//! This module contains the main `CaptureConfig` struct and its associated
//! types that define how pages are fetched and packaged.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::builder::CaptureConfigBuilder;

/// Compression applied to archive entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveCompression {
    /// Deflate every entry (default)
    #[default]
    Deflated,
    /// Store entries uncompressed
    Stored,
}

/// Main configuration struct for page captures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Directory the save collaborator writes archives into
    pub(crate) output_dir: PathBuf,

    /// Archive entry name of the rewritten document
    ///
    /// **INVARIANT:** Never empty and never contains a path separator
    /// (validated in builder).
    pub(crate) document_name: String,

    /// Prefix of generated archive names, followed by the capture epoch millis
    pub(crate) archive_prefix: String,

    /// Comment prepended to the rewritten document
    pub(crate) attribution_comment: String,

    pub(crate) user_agent: String,

    /// Timeout in seconds for every HTTP request, page and resources alike
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Maximum size in bytes of a single downloaded resource
    ///
    /// Larger downloads are aborted and the resource is skipped.
    ///
    /// Default: 50MB
    pub(crate) max_resource_size: usize,

    pub(crate) compression: ArchiveCompression,
}

impl CaptureConfig {
    /// Start building a configuration from defaults
    #[must_use]
    pub fn builder() -> CaptureConfigBuilder {
        CaptureConfigBuilder::default()
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfigBuilder::default().into_config()
    }
}
