//! Configuration module for page captures
//!
//! This module provides the `CaptureConfig` struct and its builder
//! for configuring captures with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::CaptureConfigBuilder;
pub use types::{ArchiveCompression, CaptureConfig};
