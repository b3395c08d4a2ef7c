//! Sending half of the capture event channel

use tokio::sync::mpsc;

use super::progress::ProgressReporter;
use super::types::CaptureEvent;

/// Create a connected event sender and receiver
#[must_use]
pub fn capture_channel() -> (CaptureEventSender, mpsc::UnboundedReceiver<CaptureEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (CaptureEventSender { sender }, receiver)
}

/// Cloneable sender for [`CaptureEvent`]s
///
/// Events are best-effort: a host that dropped its receiver simply stops
/// seeing them, the capture itself carries on.
#[derive(Debug, Clone)]
pub struct CaptureEventSender {
    sender: mpsc::UnboundedSender<CaptureEvent>,
}

impl CaptureEventSender {
    /// Send an event to the host
    pub fn emit(&self, event: CaptureEvent) {
        if self.sender.send(event).is_err() {
            log::debug!("Capture event dropped: no active receiver");
        }
    }
}

impl ProgressReporter for CaptureEventSender {
    fn report_progress(&self, percent: u8) {
        self.emit(CaptureEvent::progress(percent));
    }
}
