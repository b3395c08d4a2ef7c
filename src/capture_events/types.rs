//! Event type definitions for the capture event channel

use serde::{Deserialize, Serialize};

/// Event types emitted during a capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CaptureEvent {
    /// A capture moved from idle to running
    Started {
        base_url: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// The host should reset its progress display to 0%
    ProgressReset,
    /// Percentage of resources processed, 0-100, non-decreasing within a job
    Progress { percent: u8 },
    /// The host should hide its loading indicator
    HideLoading,
    /// The archive was produced and handed to the save collaborator
    Finished {
        archive_name: String,
        entries: usize,
        skipped: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// A capture was requested while another one was running
    Rejected {
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// The capture aborted before producing an archive
    Failed {
        error: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

/// Helper functions for creating common events
impl CaptureEvent {
    /// Create a `Started` event
    #[must_use]
    pub fn started(base_url: impl Into<String>) -> Self {
        Self::Started {
            base_url: base_url.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a `Progress` event
    #[must_use]
    pub fn progress(percent: u8) -> Self {
        Self::Progress { percent }
    }

    /// Create a `Finished` event
    #[must_use]
    pub fn finished(archive_name: impl Into<String>, entries: usize, skipped: usize) -> Self {
        Self::Finished {
            archive_name: archive_name.into(),
            entries,
            skipped,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a `Rejected` event
    #[must_use]
    pub fn rejected() -> Self {
        Self::Rejected {
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a `Failed` event
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}
