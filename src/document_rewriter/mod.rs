//! Document rewriting
//!
//! A single pass over the document rewrites every resource reference to its
//! local archive path, one sub-scan per kind in a fixed order: stylesheets,
//! images, scripts, videos. Stylesheet bodies are then fetched together and
//! handed to the [`CssAssetExtractor`]; their records are appended once all
//! of them have completed, in stylesheet order.
//!
//! For a fixed document and base URL the output is fully deterministic.

pub mod srcset;

use futures::future::join_all;

use crate::asset_namer::AssetSlot;
use crate::config::CaptureConfig;
use crate::css_extractor::CssAssetExtractor;
use crate::document::{DocumentElement, DocumentError, DocumentTree, HtmlDocument};
use crate::fetcher::{Fetch, fetch_bytes};
use crate::resources::{CaptureResult, ResourceRecord};
use crate::utils::resolve_or_raw;

const STYLESHEET_SELECTOR: &str = "link[rel=\"stylesheet\"]";
const IMAGE_SELECTOR: &str = "img";
const SCRIPT_SELECTOR: &str = "script[src]";
const VIDEO_SELECTOR: &str = "video";
const VIDEO_SOURCE_SELECTOR: &str = "source";

/// Stylesheet whose body still has to be fetched and rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingStylesheet {
    pub url: String,
    pub local_path: String,
}

/// Result of the synchronous tree pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentScan {
    /// Serialized document with every reference rewritten
    pub document: String,
    /// Records for images, scripts and videos, in scan order
    pub resources: Vec<ResourceRecord>,
    /// Stylesheets in document order
    pub stylesheets: Vec<PendingStylesheet>,
}

impl DocumentScan {
    /// Resolve `reference`, name it with `slot`, record it and return the local path
    fn capture<S>(&mut self, base_url: &str, reference: &str, slot: S) -> String
    where
        S: FnOnce(&str) -> AssetSlot<'_>,
    {
        let url = resolve_or_raw(base_url, reference);
        let slot = slot(&url);
        let local_path = slot.local_path();
        let kind = slot.kind();
        self.resources
            .push(ResourceRecord::remote(url, local_path.clone(), kind));
        local_path
    }
}

/// Rewrites resource references in a document to local archive paths
pub struct DocumentRewriter<'a, F: Fetch + ?Sized> {
    fetcher: &'a F,
    image_data_attributes: &'static [&'static str],
    css: CssAssetExtractor,
}

impl<'a, F: Fetch + ?Sized> DocumentRewriter<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a CaptureConfig) -> Self {
        Self {
            fetcher,
            image_data_attributes: config.image_data_attributes(),
            css: CssAssetExtractor::new(),
        }
    }

    /// Parse raw HTML and rewrite it
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` if the rewritten tree cannot be serialized.
    pub async fn rewrite_html(&self, html: &str, base_url: &str) -> Result<CaptureResult, DocumentError> {
        // Parse, scan and serialize before any await; the tree is dropped here.
        let scan = {
            let document = HtmlDocument::parse(html);
            self.scan(&document, base_url)?
        };
        Ok(self.complete(scan).await)
    }

    /// Rewrite a host-provided document tree in place
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` if a selector is rejected by the tree or the
    /// tree cannot be serialized.
    pub async fn rewrite_document<D: DocumentTree>(
        &self,
        document: &D,
        base_url: &str,
    ) -> Result<CaptureResult, DocumentError> {
        let scan = self.scan(document, base_url)?;
        Ok(self.complete(scan).await)
    }

    /// Rewrite every reference in `document` and serialize it
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` if a selector is rejected by the tree or the
    /// tree cannot be serialized.
    pub fn scan<D: DocumentTree>(&self, document: &D, base_url: &str) -> Result<DocumentScan, DocumentError> {
        let mut scan = DocumentScan::default();

        self.scan_stylesheets(document, base_url, &mut scan)?;
        self.scan_images(document, base_url, &mut scan)?;
        self.scan_scripts(document, base_url, &mut scan)?;
        self.scan_videos(document, base_url, &mut scan)?;

        scan.document = document.serialize()?;

        log::debug!(
            "Scanned document at {base_url}: {} resources, {} stylesheets",
            scan.resources.len(),
            scan.stylesheets.len()
        );
        Ok(scan)
    }

    fn scan_stylesheets<D: DocumentTree>(
        &self,
        document: &D,
        base_url: &str,
        scan: &mut DocumentScan,
    ) -> Result<(), DocumentError> {
        for (index, link) in document.select(STYLESHEET_SELECTOR)?.into_iter().enumerate() {
            let Some(href) = non_empty(link.attr("href")) else {
                continue;
            };

            let url = resolve_or_raw(base_url, &href);
            let local_path = AssetSlot::Stylesheet { index }.local_path();
            link.set_attr("href", &local_path);
            scan.stylesheets.push(PendingStylesheet { url, local_path });
        }
        Ok(())
    }

    fn scan_images<D: DocumentTree>(
        &self,
        document: &D,
        base_url: &str,
        scan: &mut DocumentScan,
    ) -> Result<(), DocumentError> {
        for (index, img) in document.select(IMAGE_SELECTOR)?.into_iter().enumerate() {
            if let Some(src) = non_empty(img.attr("src")) {
                let local_path =
                    scan.capture(base_url, &src, |source| AssetSlot::Image { index, source });
                img.set_attr("src", &local_path);
            }

            if let Some(srcset) = non_empty(img.attr("srcset")) {
                let rewritten = srcset::rewrite_srcset(&srcset, |candidate| {
                    scan.capture(base_url, candidate, |source| AssetSlot::Image { index, source })
                });
                img.set_attr("srcset", &rewritten);
            }

            for attr in self.image_data_attributes {
                if let Some(value) = non_empty(img.attr(attr)) {
                    let local_path =
                        scan.capture(base_url, &value, |source| AssetSlot::Image { index, source });
                    img.set_attr(attr, &local_path);
                }
            }
        }
        Ok(())
    }

    fn scan_scripts<D: DocumentTree>(
        &self,
        document: &D,
        base_url: &str,
        scan: &mut DocumentScan,
    ) -> Result<(), DocumentError> {
        for (index, script) in document.select(SCRIPT_SELECTOR)?.into_iter().enumerate() {
            if let Some(src) = non_empty(script.attr("src")) {
                let local_path = scan.capture(base_url, &src, |_| AssetSlot::Script { index });
                script.set_attr("src", &local_path);
            }
        }
        Ok(())
    }

    fn scan_videos<D: DocumentTree>(
        &self,
        document: &D,
        base_url: &str,
        scan: &mut DocumentScan,
    ) -> Result<(), DocumentError> {
        for (video_index, video) in document.select(VIDEO_SELECTOR)?.into_iter().enumerate() {
            for (source_index, source_el) in
                video.select(VIDEO_SOURCE_SELECTOR)?.into_iter().enumerate()
            {
                if let Some(src) = non_empty(source_el.attr("src")) {
                    let local_path = scan.capture(base_url, &src, |source| AssetSlot::VideoSource {
                        video: video_index,
                        source_index,
                        source,
                    });
                    source_el.set_attr("src", &local_path);
                }
            }

            if let Some(src) = non_empty(video.attr("src")) {
                let local_path = scan.capture(base_url, &src, |source| AssetSlot::Video {
                    index: video_index,
                    source,
                });
                video.set_attr("src", &local_path);
            }

            if let Some(poster) = non_empty(video.attr("poster")) {
                let local_path = scan.capture(base_url, &poster, |source| AssetSlot::VideoPoster {
                    index: video_index,
                    source,
                });
                video.set_attr("poster", &local_path);
            }
        }
        Ok(())
    }

    /// Fetch and rewrite stylesheets, appending their records after the scan's
    async fn complete(&self, scan: DocumentScan) -> CaptureResult {
        let mut resources = scan.resources;
        resources.extend(self.resolve_stylesheets(&scan.stylesheets).await);

        log::debug!(
            "Capture resources: {:?}",
            resources.iter().map(|r| r.local_path.as_str()).collect::<Vec<_>>()
        );
        CaptureResult {
            document: scan.document,
            resources,
        }
    }

    /// Fetch every stylesheet body at once and rewrite each one
    ///
    /// A stylesheet whose body cannot be fetched contributes no records.
    async fn resolve_stylesheets(&self, stylesheets: &[PendingStylesheet]) -> Vec<ResourceRecord> {
        // Issue every stylesheet fetch before awaiting any of them.
        let bodies = join_all(
            stylesheets
                .iter()
                .map(|sheet| fetch_bytes(self.fetcher, &sheet.url)),
        )
        .await;

        let mut records = Vec::new();
        for (sheet, body) in stylesheets.iter().zip(bodies) {
            match body {
                Ok(bytes) => {
                    let css = String::from_utf8_lossy(&bytes);
                    let extraction = self.css.extract(&css, &sheet.url, &sheet.local_path);
                    records.extend(extraction.into_records());
                }
                Err(e) => {
                    log::error!("Failed to fetch CSS {} for {}: {e}", sheet.url, sheet.local_path);
                }
            }
        }
        records
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
