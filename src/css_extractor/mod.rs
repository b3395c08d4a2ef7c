//! Stylesheet rewriting
//!
//! Every `url(...)` reference in a stylesheet is resolved against the
//! stylesheet's own URL (`data:` references are kept verbatim), recorded as
//! a CSS asset, and rewritten to a bare filename. The rewritten stylesheet body then becomes a resource whose
//! bytes are already known, so it is never fetched a second time.

pub mod tokenizer;

use crate::asset_namer::AssetSlot;
use crate::resources::{ResourceKind, ResourceRecord};
use crate::utils::{is_data_url, resolve_or_raw};

pub use tokenizer::{CssUrlToken, CssUrlTokenizer};

/// Output of rewriting one stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssExtraction {
    /// Stylesheet text with every captured reference replaced by a bare filename
    pub css: String,
    /// One record per captured `url(...)` occurrence, in encounter order
    pub assets: Vec<ResourceRecord>,
    /// The rewritten stylesheet itself, stored under the caller's path
    pub stylesheet: ResourceRecord,
}

impl CssExtraction {
    /// Asset records followed by the stylesheet record
    #[must_use]
    pub fn into_records(self) -> Vec<ResourceRecord> {
        let mut records = self.assets;
        records.push(self.stylesheet);
        records
    }
}

/// Rewrites stylesheet text and collects the assets it embeds
#[derive(Debug, Clone, Copy, Default)]
pub struct CssAssetExtractor {
    tokenizer: CssUrlTokenizer,
}

impl CssAssetExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: CssUrlTokenizer::new(),
        }
    }

    /// Rewrite `css`, fetched from `css_url`, to be stored at `stylesheet_path`
    ///
    /// `data:` references are extracted like any other asset; their file
    /// names come from the stylesheet name and the MIME subtype.
    #[must_use]
    pub fn extract(&self, css: &str, css_url: &str, stylesheet_path: &str) -> CssExtraction {
        let tokens = self.tokenizer.tokens(css);
        log::debug!("Found {} url() references in {css_url}", tokens.len());

        let mut rewritten = String::with_capacity(css.len());
        let mut assets = Vec::with_capacity(tokens.len());
        let mut cursor = 0;
        let mut inline_count = 0;
        let stem = stylesheet_stem(stylesheet_path);

        for token in tokens {
            let inline = is_data_url(token.reference);
            let asset_url = if inline {
                token.reference.to_string()
            } else {
                resolve_or_raw(css_url, token.reference)
            };
            let slot = if inline {
                let index = inline_count;
                inline_count += 1;
                AssetSlot::CssInlineAsset {
                    stylesheet: stem,
                    index,
                    source: &asset_url,
                }
            } else {
                AssetSlot::CssAsset { source: &asset_url }
            };
            let file_name = slot.file_name();

            rewritten.push_str(&css[cursor..token.span.start]);
            rewritten.push_str("url('");
            rewritten.push_str(&file_name);
            rewritten.push_str("')");
            cursor = token.span.end;

            log::debug!("CSS asset {} -> {}", truncate_source(&asset_url), slot.local_path());
            assets.push(ResourceRecord::remote(
                asset_url.as_str(),
                slot.local_path(),
                slot.kind(),
            ));
        }
        rewritten.push_str(&css[cursor..]);

        let stylesheet = ResourceRecord::resolved(
            rewritten.clone().into_bytes(),
            stylesheet_path,
            ResourceKind::Stylesheet,
        );

        CssExtraction {
            css: rewritten,
            assets,
            stylesheet,
        }
    }
}

/// File stem of the stylesheet's archive path (`assets/style0.css` gives `style0`)
fn stylesheet_stem(stylesheet_path: &str) -> &str {
    let file_name = stylesheet_path.rsplit('/').next().unwrap_or(stylesheet_path);
    file_name.strip_suffix(".css").unwrap_or(file_name)
}

fn truncate_source(source: &str) -> &str {
    const MAX: usize = 80;
    match source.char_indices().nth(MAX) {
        Some((idx, _)) => &source[..idx],
        None => source,
    }
}
