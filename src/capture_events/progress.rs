//! Progress reporting abstraction for the fetch stage

/// Trait for reporting resource fetch progress
///
/// Implementations can send updates to channels, log to console, update UI, etc.
pub trait ProgressReporter: Send + Sync {
    /// Report the percentage of resources processed so far
    fn report_progress(&self, percent: u8);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_progress(&self, _percent: u8) {}
}
