//! Builder for `CaptureConfig`
//!
//! Every field has a default, so `CaptureConfig::builder().build()` is
//! always valid; `build()` only rejects values set to something unusable.

use anyhow::{Result, bail};
use std::path::PathBuf;

use super::types::{ArchiveCompression, CaptureConfig};
use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_ARCHIVE_PREFIX, DEFAULT_ATTRIBUTION_COMMENT,
    DEFAULT_DOCUMENT_NAME, DEFAULT_MAX_RESOURCE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
};

#[derive(Debug, Clone)]
pub struct CaptureConfigBuilder {
    pub(crate) output_dir: PathBuf,
    pub(crate) document_name: String,
    pub(crate) archive_prefix: String,
    pub(crate) attribution_comment: String,
    pub(crate) user_agent: String,
    pub(crate) request_timeout_secs: u64,
    pub(crate) max_resource_size: usize,
    pub(crate) compression: ArchiveCompression,
}

impl Default for CaptureConfigBuilder {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
            archive_prefix: DEFAULT_ARCHIVE_PREFIX.to_string(),
            attribution_comment: DEFAULT_ATTRIBUTION_COMMENT.to_string(),
            user_agent: CHROME_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_resource_size: DEFAULT_MAX_RESOURCE_SIZE,
            compression: ArchiveCompression::default(),
        }
    }
}

impl CaptureConfigBuilder {
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = name.into();
        self
    }

    #[must_use]
    pub fn archive_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.archive_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn attribution_comment(mut self, comment: impl Into<String>) -> Self {
        self.attribution_comment = comment.into();
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_resource_size(mut self, bytes: usize) -> Self {
        self.max_resource_size = bytes;
        self
    }

    #[must_use]
    pub fn compression(mut self, compression: ArchiveCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the document name is empty or contains a path
    /// separator, if the archive prefix is empty, or if the timeout or size
    /// limit is zero.
    pub fn build(self) -> Result<CaptureConfig> {
        if self.document_name.trim().is_empty() {
            bail!("document_name must not be empty");
        }
        if self.document_name.contains(['/', '\\']) {
            bail!(
                "document_name must be a bare file name, got '{}'",
                self.document_name
            );
        }
        if self.archive_prefix.is_empty() {
            bail!("archive_prefix must not be empty");
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        if self.max_resource_size == 0 {
            bail!("max_resource_size must be greater than zero");
        }

        Ok(self.into_config())
    }

    pub(crate) fn into_config(self) -> CaptureConfig {
        CaptureConfig {
            output_dir: self.output_dir,
            document_name: self.document_name,
            archive_prefix: self.archive_prefix,
            attribution_comment: self.attribution_comment,
            user_agent: self.user_agent,
            request_timeout_secs: self.request_timeout_secs,
            max_resource_size: self.max_resource_size,
            compression: self.compression,
        }
    }
}
