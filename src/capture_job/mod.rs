//! Capture job orchestration
//!
//! A `CaptureJob` drives one capture at a time through the pipeline:
//! rewrite the document, fetch every recorded resource, build the archive
//! and hand it to the host's `ArchiveSink`. Lifecycle and progress are
//! reported on the capture event channel.

mod errors;
mod sink;
mod state;

pub use errors::{CaptureError, CaptureJobResult};
pub use sink::{ArchiveSink, DirectorySink, MemorySink, SaveFuture};
pub use state::JobState;

use chrono::Utc;
use std::future::Future;
use std::path::PathBuf;
use url::Url;

use crate::archive::ArchiveBuilder;
use crate::capture_events::{CaptureEvent, CaptureEventSender};
use crate::config::CaptureConfig;
use crate::document::DocumentTree;
use crate::document_rewriter::DocumentRewriter;
use crate::fetcher::{Fetch, ResourceFetcher};
use crate::resources::CaptureResult;
use crate::utils::is_capturable_url;
use state::JobSlot;

/// Summary of a saved capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSummary {
    pub archive_name: String,
    /// Location reported by the sink
    pub saved_to: PathBuf,
    /// Archive entries, document included
    pub entries: usize,
    /// Resources whose fetch failed and were left out
    pub skipped: usize,
}

/// Result of a capture request that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Completed(CaptureSummary),
    /// Another capture was already running; nothing was done
    Rejected,
}

/// Single-flight capture orchestrator
pub struct CaptureJob<F: Fetch, S: ArchiveSink> {
    config: CaptureConfig,
    fetcher: F,
    sink: S,
    events: CaptureEventSender,
    slot: JobSlot,
}

impl<F: Fetch, S: ArchiveSink> CaptureJob<F, S> {
    pub fn new(config: CaptureConfig, fetcher: F, sink: S, events: CaptureEventSender) -> Self {
        Self {
            config,
            fetcher,
            sink,
            events,
            slot: JobSlot::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> JobState {
        self.slot.current()
    }

    #[must_use]
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fetch the page at `url` and capture it
    ///
    /// # Errors
    ///
    /// Returns `CaptureError` if the URL is invalid or not http(s), the page
    /// cannot be fetched, or the archive cannot be built or saved.
    pub async fn capture_url(&self, url: &str) -> CaptureJobResult<CaptureOutcome> {
        self.run(url, async {
            let html = self.fetch_page(url).await?;
            let rewriter = DocumentRewriter::new(&self.fetcher, &self.config);
            Ok::<_, CaptureError>(rewriter.rewrite_html(&html, url).await?)
        })
        .await
    }

    /// Capture already-loaded HTML as if served from `base_url`
    ///
    /// # Errors
    ///
    /// Returns `CaptureError` if the document cannot be serialized or the
    /// archive cannot be built or saved.
    pub async fn capture_html(&self, html: &str, base_url: &str) -> CaptureJobResult<CaptureOutcome> {
        self.run(base_url, async {
            let rewriter = DocumentRewriter::new(&self.fetcher, &self.config);
            Ok::<_, CaptureError>(rewriter.rewrite_html(html, base_url).await?)
        })
        .await
    }

    /// Capture a host-provided document tree, rewriting it in place
    ///
    /// # Errors
    ///
    /// Returns `CaptureError` if the tree rejects a query or cannot be
    /// serialized, or the archive cannot be built or saved.
    pub async fn capture_document<D: DocumentTree>(
        &self,
        document: &D,
        base_url: &str,
    ) -> CaptureJobResult<CaptureOutcome> {
        self.run(base_url, async {
            let rewriter = DocumentRewriter::new(&self.fetcher, &self.config);
            Ok::<_, CaptureError>(rewriter.rewrite_document(document, base_url).await?)
        })
        .await
    }

    async fn run<W>(&self, base_url: &str, work: W) -> CaptureJobResult<CaptureOutcome>
    where
        W: Future<Output = CaptureJobResult<CaptureResult>>,
    {
        let Some(running) = self.slot.try_start() else {
            log::info!("Capture already in progress, ignoring request for {base_url}");
            self.events.emit(CaptureEvent::rejected());
            return Ok(CaptureOutcome::Rejected);
        };

        log::info!("Starting capture of {base_url}");
        self.events.emit(CaptureEvent::started(base_url));
        self.events.emit(CaptureEvent::ProgressReset);

        let result = match work.await {
            Ok(captured) => self.package(captured).await,
            Err(e) => Err(e),
        };
        drop(running);

        match result {
            Ok(summary) => {
                log::info!(
                    "Captured {base_url} into {} ({} entries, {} skipped)",
                    summary.archive_name,
                    summary.entries,
                    summary.skipped
                );
                self.events.emit(CaptureEvent::HideLoading);
                self.events.emit(CaptureEvent::finished(
                    summary.archive_name.clone(),
                    summary.entries,
                    summary.skipped,
                ));
                Ok(CaptureOutcome::Completed(summary))
            }
            Err(e) => {
                log::error!("Capture of {base_url} failed: {e}");
                self.events.emit(CaptureEvent::failed(e.to_string()));
                self.events.emit(CaptureEvent::HideLoading);
                Err(e)
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> CaptureJobResult<String> {
        let parsed = Url::parse(url).map_err(|e| CaptureError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !is_capturable_url(url) {
            return Err(CaptureError::DisallowedScheme {
                url: url.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }

        let bytes = self.fetcher.fetch(url).await.map_err(CaptureError::PageFetch)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn package(&self, captured: CaptureResult) -> CaptureJobResult<CaptureSummary> {
        let captured_at = Utc::now();
        let CaptureResult { document, resources } = captured;

        let report = ResourceFetcher::new(&self.fetcher, &self.events)
            .fetch_all(resources)
            .await;
        let skipped = report.skipped();

        let payload = ArchiveBuilder::new(&self.config).build(&document, &report.resources, captured_at)?;
        let saved_to = self.sink.save(&payload).await?;

        Ok(CaptureSummary {
            archive_name: payload.filename_hint,
            saved_to,
            entries: payload.entries,
            skipped,
        })
    }
}
