//! URL helpers shared by the document and CSS scanners.
//!
//! Naming rules only ever look at the final path segment of a resolved URL,
//! so everything here works on strings and falls back to plain string
//! splitting when a reference cannot be parsed as a URL.

use anyhow::{Context, Result};
use url::Url;

/// Extension used when a source URL has no dot in its final path segment
const FALLBACK_EXTENSION: &str = "bin";

/// Basename used when a source URL ends with a slash
const FALLBACK_BASENAME: &str = "asset";

/// Resolve a potentially relative URL against a base URL
pub fn resolve_url(base_url: &str, url: &str) -> Result<String> {
    let base = Url::parse(base_url).context("Invalid base URL")?;
    let resolved = base.join(url).context("Failed to resolve URL")?;
    Ok(resolved.to_string())
}

/// Resolve a reference, keeping the raw reference when resolution fails
///
/// Unresolvable references are not treated as errors: the raw string flows
/// through naming and fetching, where it usually produces a broken local
/// reference and a skipped download.
#[must_use]
pub fn resolve_or_raw(base_url: &str, url: &str) -> String {
    match resolve_url(base_url, url) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::warn!("Failed to resolve '{url}' against '{base_url}': {e:#}");
            url.to_string()
        }
    }
}

/// Check whether a URL uses the `data:` scheme
#[must_use]
pub fn is_data_url(url: &str) -> bool {
    url.get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

/// Check if a URL can be captured as a top-level page
#[must_use]
pub fn is_capturable_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// File extension of a source URL: the text after the last dot of its final
/// path segment, query string excluded
///
/// `data:` URLs take their extension from the MIME subtype
/// (`data:image/svg+xml;...` gives `svg`).
#[must_use]
pub fn extension_of(url: &str) -> String {
    if is_data_url(url) {
        return data_url_extension(url);
    }

    let segment = last_path_segment(url);
    match segment.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_string(),
        _ => FALLBACK_EXTENSION.to_string(),
    }
}

/// Bare filename of a source URL: its final path segment, query string excluded
#[must_use]
pub fn basename_of(url: &str) -> String {
    let segment = last_path_segment(url);
    if segment.is_empty() {
        FALLBACK_BASENAME.to_string()
    } else {
        segment
    }
}

fn last_path_segment(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => parsed
            .path_segments()
            .and_then(|segments| segments.last())
            .map(str::to_string)
            .unwrap_or_default(),
        _ => {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            path.rsplit('/').next().unwrap_or_default().to_string()
        }
    }
}

fn data_url_extension(url: &str) -> String {
    let meta = url[5..].split(',').next().unwrap_or_default();
    let mime = meta.split(';').next().unwrap_or_default();
    let subtype = mime
        .split_once('/')
        .map(|(_, subtype)| subtype.split('+').next().unwrap_or_default())
        .unwrap_or_default()
        .trim();

    if subtype.is_empty() {
        FALLBACK_EXTENSION.to_string()
    } else {
        subtype.to_ascii_lowercase()
    }
}
