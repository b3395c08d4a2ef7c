pub mod archive;
pub mod asset_namer;
pub mod capture_events;
pub mod capture_job;
pub mod config;
pub mod css_extractor;
pub mod document;
pub mod document_rewriter;
pub mod fetcher;
pub mod resources;
pub mod utils;

pub use archive::{Archive, ArchiveBuilder, ArchiveError, ArchivePayload};
pub use asset_namer::AssetSlot;
pub use capture_events::{CaptureEvent, CaptureEventSender, ProgressReporter, capture_channel};
pub use capture_job::{
    ArchiveSink, CaptureError, CaptureJob, CaptureJobResult, CaptureOutcome, CaptureSummary,
    DirectorySink, JobState, MemorySink,
};
pub use config::{ArchiveCompression, CaptureConfig, CaptureConfigBuilder};
pub use css_extractor::{CssAssetExtractor, CssExtraction};
pub use document::{DocumentElement, DocumentError, DocumentTree, HtmlDocument, HtmlElement};
pub use document_rewriter::DocumentRewriter;
pub use fetcher::{Fetch, FetchError, FetchFuture, HttpFetcher, ResourceFetcher, fetch_bytes};
pub use resources::{CaptureResult, FetchedResource, ResourceKind, ResourceRecord, ResourceSource};
