//! Single-flight job state

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a capture job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    #[default]
    Idle,
    Running,
}

/// Lock-guarded job state allowing at most one running capture
#[derive(Debug, Default)]
pub(crate) struct JobSlot {
    state: Mutex<JobState>,
}

impl JobSlot {
    /// Move `Idle -> Running`, or `None` if a capture is already running
    pub(crate) fn try_start(&self) -> Option<RunningGuard<'_>> {
        let mut state = self.state.lock();
        if *state == JobState::Running {
            return None;
        }
        *state = JobState::Running;
        Some(RunningGuard { slot: self })
    }

    pub(crate) fn current(&self) -> JobState {
        *self.state.lock()
    }
}

/// Returns the slot to `Idle` when dropped, whatever the capture outcome
pub(crate) struct RunningGuard<'a> {
    slot: &'a JobSlot,
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        *self.slot.state.lock() = JobState::Idle;
    }
}
