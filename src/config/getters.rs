//! Read accessors for `CaptureConfig`

use std::path::Path;
use std::time::Duration;

use super::types::{ArchiveCompression, CaptureConfig};
use crate::utils::{ASSET_DIR, RESPONSIVE_IMAGE_ATTRIBUTES};

impl CaptureConfig {
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    /// Flat asset directory inside the archive; not configurable
    #[must_use]
    pub fn asset_dir(&self) -> &'static str {
        ASSET_DIR
    }

    #[must_use]
    pub fn archive_prefix(&self) -> &str {
        &self.archive_prefix
    }

    #[must_use]
    pub fn attribution_comment(&self) -> &str {
        &self.attribution_comment
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn max_resource_size(&self) -> usize {
        self.max_resource_size
    }

    #[must_use]
    pub fn compression(&self) -> ArchiveCompression {
        self.compression
    }

    /// Responsive `<img>` attributes rewritten alongside `src` and `srcset`
    ///
    /// Fixed like `asset_dir`; not configurable.
    #[must_use]
    pub fn image_data_attributes(&self) -> &'static [&'static str] {
        &RESPONSIVE_IMAGE_ATTRIBUTES
    }
}
