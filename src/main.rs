// Page Ripper CLI
//
// Captures one page and its assets into a zip archive written to disk.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use kodegen_tools_page_ripper::{
    ArchiveCompression, CaptureConfig, CaptureEvent, CaptureJob, CaptureOutcome, DirectorySink,
    HttpFetcher, capture_channel,
};

#[derive(Debug, Parser)]
#[command(name = "kodegen-page-ripper", version, about = "Capture a web page and its assets into a zip archive")]
struct Args {
    /// Page URL; also the base for resolving relative references
    url: String,

    /// Use this HTML file instead of fetching the page
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// Directory the archive is written to
    #[arg(long, short = 'o', env = "PAGE_RIPPER_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Per-request timeout
    #[arg(long, default_value_t = kodegen_tools_page_ripper::utils::DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Largest accepted response body, in bytes
    #[arg(long, default_value_t = kodegen_tools_page_ripper::utils::DEFAULT_MAX_RESOURCE_SIZE)]
    max_resource_bytes: usize,

    /// Store entries without compression
    #[arg(long)]
    store: bool,

    /// Print events as JSON lines
    #[arg(long)]
    json_events: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = CaptureConfig::builder()
        .output_dir(&args.output_dir)
        .request_timeout_secs(args.timeout_secs)
        .max_resource_size(args.max_resource_bytes)
        .compression(if args.store {
            ArchiveCompression::Stored
        } else {
            ArchiveCompression::Deflated
        })
        .build()?;

    let html = match &args.html_file {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => None,
    };

    let fetcher = HttpFetcher::new(&config)?;
    let sink = DirectorySink::new(config.output_dir());
    let (events, mut receiver) = capture_channel();
    let job = CaptureJob::new(config, fetcher, sink, events);

    let url = args.url;
    let json = args.json_events;

    let capture = async move {
        let outcome = match &html {
            Some(html) => job.capture_html(html, &url).await,
            None => job.capture_url(&url).await,
        };
        // Closes the event channel so the printer below finishes.
        drop(job);
        outcome
    };

    let printer = async move {
        while let Some(event) = receiver.recv().await {
            print_event(&event, json);
        }
    };

    let (outcome, ()) = tokio::join!(capture, printer);

    match outcome? {
        CaptureOutcome::Completed(summary) => {
            println!("{}", summary.saved_to.display());
            Ok(())
        }
        CaptureOutcome::Rejected => anyhow::bail!("A capture is already in progress"),
    }
}

fn print_event(event: &CaptureEvent, json: bool) {
    if json {
        match serde_json::to_string(event) {
            Ok(line) => eprintln!("{line}"),
            Err(e) => log::warn!("Failed to serialize event: {e}"),
        }
        return;
    }

    match event {
        CaptureEvent::Started { base_url, .. } => eprintln!("Capturing {base_url}"),
        CaptureEvent::ProgressReset => eprintln!("Progress: 0%"),
        CaptureEvent::Progress { percent } => eprintln!("Progress: {percent}%"),
        CaptureEvent::HideLoading => {}
        CaptureEvent::Finished {
            archive_name,
            entries,
            skipped,
            ..
        } => eprintln!("Finished {archive_name}: {entries} entries, {skipped} skipped"),
        CaptureEvent::Rejected { .. } => eprintln!("Capture already in progress"),
        CaptureEvent::Failed { error, .. } => eprintln!("Capture failed: {error}"),
    }
}
