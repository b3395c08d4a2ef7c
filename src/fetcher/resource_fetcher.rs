//! Sequential resource fetching with per-resource failure isolation

use super::{Fetch, fetch_bytes};
use crate::capture_events::ProgressReporter;
use crate::resources::{FetchedResource, ResourceRecord, ResourceSource};

/// Outcome of fetching a resource list
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// One entry per input record, in input order; failed fetches carry no bytes
    pub resources: Vec<FetchedResource>,
}

impl FetchReport {
    /// Number of records whose bytes were obtained
    #[must_use]
    pub fn fetched(&self) -> usize {
        self.resources.iter().filter(|r| r.is_fetched()).count()
    }

    /// Number of records skipped because their fetch failed
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.resources.len() - self.fetched()
    }
}

/// Fetches the bytes of every resource record, one at a time
///
/// Records are processed strictly in list order so that progress is
/// monotonic and reproducible. A failed fetch is logged and the record is
/// kept without bytes; it is never retried.
pub struct ResourceFetcher<'a, F: Fetch + ?Sized, P: ProgressReporter + ?Sized> {
    fetcher: &'a F,
    progress: &'a P,
}

impl<'a, F: Fetch + ?Sized, P: ProgressReporter + ?Sized> ResourceFetcher<'a, F, P> {
    pub fn new(fetcher: &'a F, progress: &'a P) -> Self {
        Self { fetcher, progress }
    }

    /// Fetch every record, reporting `round(completed / total * 100)` after each
    pub async fn fetch_all(&self, records: Vec<ResourceRecord>) -> FetchReport {
        let total = records.len();
        let mut resources = Vec::with_capacity(total);

        for (completed, record) in records.into_iter().enumerate() {
            let bytes = match &record.source {
                ResourceSource::Resolved(content) => Some(content.clone()),
                ResourceSource::Url(url) => match fetch_bytes(self.fetcher, url).await {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        log::warn!("Skipping {} {}: {e}", record.kind, record.local_path);
                        None
                    }
                },
            };
            resources.push(FetchedResource { record, bytes });

            self.progress.report_progress(percent(completed + 1, total));
        }

        FetchReport { resources }
    }
}

fn percent(completed: usize, total: usize) -> u8 {
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::{FetchError, FetchFuture};
    use crate::resources::ResourceKind;
    use parking_lot::Mutex;

    struct FlakyFetcher {
        requested: Mutex<Vec<String>>,
    }

    impl Fetch for FlakyFetcher {
        fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
            self.requested.lock().push(url.to_string());
            Box::pin(async move {
                if url.contains("missing") {
                    Err(FetchError::Status {
                        url: url.to_string(),
                        status: 404,
                    })
                } else {
                    Ok(url.as_bytes().to_vec())
                }
            })
        }
    }

    #[derive(Default)]
    struct RecordingProgress(Mutex<Vec<u8>>);

    impl ProgressReporter for RecordingProgress {
        fn report_progress(&self, percent: u8) {
            self.0.lock().push(percent);
        }
    }

    #[tokio::test]
    async fn test_failures_are_isolated_and_order_is_kept() {
        let fetcher = FlakyFetcher {
            requested: Mutex::new(Vec::new()),
        };
        let progress = RecordingProgress::default();
        let records = vec![
            ResourceRecord::remote("https://x.test/a.js", "assets/script0.js", ResourceKind::Script),
            ResourceRecord::remote("https://x.test/missing.png", "assets/image0.png", ResourceKind::Image),
            ResourceRecord::resolved(b"p{}".to_vec(), "assets/style0.css", ResourceKind::Stylesheet),
        ];

        let report = ResourceFetcher::new(&fetcher, &progress).fetch_all(records).await;

        assert_eq!(report.fetched(), 2);
        assert_eq!(report.skipped(), 1);
        assert!(report.resources[1].bytes.is_none());
        assert_eq!(report.resources[2].bytes.as_deref(), Some(&b"p{}"[..]));
        assert_eq!(
            *fetcher.requested.lock(),
            vec!["https://x.test/a.js", "https://x.test/missing.png"]
        );
        assert_eq!(*progress.0.lock(), vec![33, 67, 100]);
    }

    #[tokio::test]
    async fn test_data_urls_are_decoded_locally() {
        let fetcher = FlakyFetcher {
            requested: Mutex::new(Vec::new()),
        };
        let records = vec![ResourceRecord::remote(
            "data:image/gif;base64,R0lG",
            "assets/image0.gif",
            ResourceKind::Image,
        )];

        let report = ResourceFetcher::new(&fetcher, &crate::capture_events::NoOpProgress)
            .fetch_all(records)
            .await;

        assert_eq!(report.resources[0].bytes.as_deref(), Some(&b"GIF"[..]));
        assert!(fetcher.requested.lock().is_empty());
    }

    #[tokio::test]
    async fn test_empty_list_reports_nothing() {
        let fetcher = FlakyFetcher {
            requested: Mutex::new(Vec::new()),
        };
        let progress = RecordingProgress::default();

        let report = ResourceFetcher::new(&fetcher, &progress).fetch_all(Vec::new()).await;

        assert!(report.resources.is_empty());
        assert!(progress.0.lock().is_empty());
    }
}
