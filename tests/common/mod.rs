//! Test utilities shared by the page ripper integration tests

use kodegen_tools_page_ripper::{
    CaptureConfig, CaptureEvent, CaptureJob, Fetch, FetchError, FetchFuture, MemorySink,
    capture_channel,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use tokio::sync::{mpsc, watch};
use zip::ZipArchive;

/// Serves canned responses; anything else is a 404
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.to_string(), body.into());
        self
    }

    /// Every URL requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    async fn respond(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requests.lock().push(url.to_string());
        self.responses.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

impl Fetch for StaticFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(self.respond(url))
    }
}

/// Holds every fetch until `open` is called
#[allow(dead_code)]
pub struct GatedFetcher {
    inner: StaticFetcher,
    gate: watch::Sender<bool>,
}

#[allow(dead_code)]
impl GatedFetcher {
    pub fn new(inner: StaticFetcher) -> Self {
        Self {
            inner,
            gate: watch::Sender::new(false),
        }
    }

    pub fn open(&self) {
        self.gate.send_replace(true);
    }
}

impl Fetch for GatedFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            let mut open = self.gate.subscribe();
            let _ = open.wait_for(|open| *open).await;
            self.inner.respond(url).await
        })
    }
}

/// Job with an in-memory sink and a connected event receiver
#[allow(dead_code)]
pub fn memory_job<F: Fetch>(
    fetcher: F,
) -> (CaptureJob<F, MemorySink>, mpsc::UnboundedReceiver<CaptureEvent>) {
    let (events, receiver) = capture_channel();
    let job = CaptureJob::new(CaptureConfig::default(), fetcher, MemorySink::new(), events);
    (job, receiver)
}

/// Drain every event currently queued
#[allow(dead_code)]
pub fn drain_events(receiver: &mut mpsc::UnboundedReceiver<CaptureEvent>) -> Vec<CaptureEvent> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

/// Entry names and contents of a zip archive, in archive order
#[allow(dead_code)]
pub fn read_zip(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).expect("zip entry");
            let name = file.name().to_string();
            let mut contents = Vec::new();
            file.read_to_end(&mut contents).expect("zip entry contents");
            (name, contents)
        })
        .collect()
}

/// Contents of one named entry
#[allow(dead_code)]
pub fn zip_entry(bytes: &[u8], name: &str) -> Option<Vec<u8>> {
    read_zip(bytes)
        .into_iter()
        .find(|(entry, _)| entry == name)
        .map(|(_, contents)| contents)
}
