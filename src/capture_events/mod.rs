//! Typed events between a capture job and its host
//!
//! Each host-facing signal is a [`CaptureEvent`] variant sent over an
//! unbounded tokio channel. Progress emission goes through the
//! [`ProgressReporter`] trait so the fetch stage does not depend on the
//! channel.

// Sub-modules
pub mod channel;
pub mod progress;
pub mod types;

// Re-exports for public API
pub use channel::{CaptureEventSender, capture_channel};
pub use progress::{NoOpProgress, ProgressReporter};
pub use types::CaptureEvent;
