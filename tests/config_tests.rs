//! Tests for the capture configuration builder

use kodegen_tools_page_ripper::{ArchiveCompression, CaptureConfig};
use std::path::Path;
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = CaptureConfig::default();

    assert_eq!(config.output_dir(), Path::new("."));
    assert_eq!(config.document_name(), "index.html");
    assert_eq!(config.asset_dir(), "assets");
    assert_eq!(config.archive_prefix(), "page_");
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.max_resource_size(), 50 * 1024 * 1024);
    assert_eq!(config.compression(), ArchiveCompression::Deflated);
    assert_eq!(
        config.image_data_attributes(),
        [
            "data-src-desktop-1x",
            "data-src-desktop-2x",
            "data-src-mobile-1x",
            "data-src-mobile-2x",
            "data-src-mobile-3x",
        ]
    );
}

#[test]
fn test_builder_overrides() {
    let config = CaptureConfig::builder()
        .output_dir("/tmp/captures")
        .document_name("page.html")
        .archive_prefix("snapshot_")
        .attribution_comment("<!-- saved -->")
        .request_timeout_secs(5)
        .max_resource_size(1024)
        .compression(ArchiveCompression::Stored)
        .build()
        .unwrap();

    assert_eq!(config.output_dir(), Path::new("/tmp/captures"));
    assert_eq!(config.document_name(), "page.html");
    assert_eq!(config.archive_prefix(), "snapshot_");
    assert_eq!(config.attribution_comment(), "<!-- saved -->");
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.max_resource_size(), 1024);
    assert_eq!(config.compression(), ArchiveCompression::Stored);
    assert_eq!(config.image_data_attributes().len(), 5);
}

#[test]
fn test_builder_rejects_invalid_values() {
    assert!(CaptureConfig::builder().document_name("").build().is_err());
    assert!(CaptureConfig::builder().document_name("a/b.html").build().is_err());
    assert!(CaptureConfig::builder().archive_prefix("").build().is_err());
    assert!(CaptureConfig::builder().request_timeout_secs(0).build().is_err());
    assert!(CaptureConfig::builder().max_resource_size(0).build().is_err());
}
