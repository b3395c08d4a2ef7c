//! Byte fetching
//!
//! The host supplies a [`Fetch`] capability; [`HttpFetcher`] is the
//! reqwest-backed default. `data:` URLs never reach the capability and are
//! decoded locally by [`fetch_bytes`].

pub mod data_url;
pub mod http;
pub mod resource_fetcher;

pub use data_url::decode_data_url;
pub use http::HttpFetcher;
pub use resource_fetcher::{FetchReport, ResourceFetcher};

use std::future::Future;
use std::pin::Pin;

use crate::utils::is_data_url;

/// Type alias for a boxed fetch future
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, FetchError>> + Send + 'a>>;

/// Error information for a failed fetch
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Connection, timeout or body read failure
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// The body exceeded the configured size limit
    #[error("{url} is too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { url: String, size: u64, limit: usize },

    /// A `data:` URL could not be decoded
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Host-supplied capability: `fetch(url) -> bytes | error`
pub trait Fetch: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

impl<T: Fetch + ?Sized> Fetch for std::sync::Arc<T> {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        (**self).fetch(url)
    }
}

/// Fetch `url` through `fetcher`, decoding `data:` URLs locally
pub async fn fetch_bytes<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Result<Vec<u8>, FetchError> {
    if is_data_url(url) {
        return decode_data_url(url);
    }
    fetcher.fetch(url).await
}
