//! Shared configuration constants for the page ripper
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Flat directory that holds every captured asset inside the archive
///
/// Stylesheets reference their embedded assets by bare filename, so all
/// assets must live side by side in this one directory.
pub const ASSET_DIR: &str = "assets";

/// Archive entry name for the rewritten document
pub const DEFAULT_DOCUMENT_NAME: &str = "index.html";

/// Prefix for generated archive names (`page_{epoch_millis}.zip`)
pub const DEFAULT_ARCHIVE_PREFIX: &str = "page_";

/// Comment prepended to every captured document
pub const DEFAULT_ATTRIBUTION_COMMENT: &str =
    "<!--  This page has been captured by the KODEGEN page ripper. -->";

/// Default timeout for a single HTTP request: 30 seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default maximum size for one downloaded resource: 50MB
///
/// Landing pages routinely ship hero videos in the 10-30MB range,
/// so the limit is far above the inlining limits used for CSS and images.
pub const DEFAULT_MAX_RESOURCE_SIZE: usize = 50 * 1024 * 1024;

/// Responsive image attributes rewritten alongside `src` and `srcset`
pub const RESPONSIVE_IMAGE_ATTRIBUTES: [&str; 5] = [
    "data-src-desktop-1x",
    "data-src-desktop-2x",
    "data-src-mobile-1x",
    "data-src-mobile-2x",
    "data-src-mobile-3x",
];

/// Chrome user agent string sent with every request
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
