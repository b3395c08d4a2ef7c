//! reqwest-backed [`Fetch`] implementation
//!
//! Downloads are streamed with a size check before and during the transfer,
//! so an oversized hero video is abandoned early instead of buffered whole.

use futures::StreamExt;
use reqwest::Client;

use super::{Fetch, FetchError, FetchFuture};
use crate::config::CaptureConfig;

/// HTTP client used for the page and every resource
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_size: usize,
}

impl HttpFetcher {
    /// Build a fetcher from the capture configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the underlying client cannot be built.
    pub fn new(config: &CaptureConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            max_size: config.max_resource_size(),
        })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header("Accept", "*/*")
            .send()
            .await
            .map_err(transport)?;

        // Check status
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        // Get expected size and enforce limit BEFORE downloading
        let expected_size = response.content_length().unwrap_or(0);
        if expected_size > self.max_size as u64 {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                size: expected_size,
                limit: self.max_size,
            });
        }

        let mut buffer = if expected_size > 0 {
            Vec::with_capacity(expected_size as usize)
        } else {
            Vec::new()
        };

        // Stream response with size checking (second line of defense)
        let mut stream = response.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(transport)?;

            let new_total = buffer.len() + chunk.len();
            if new_total > self.max_size {
                return Err(FetchError::TooLarge {
                    url: url.to_string(),
                    size: new_total as u64,
                    limit: self.max_size,
                });
            }

            buffer.extend_from_slice(&chunk);
        }

        log::debug!("Fetched {} bytes from {url}", buffer.len());
        Ok(buffer)
    }
}

impl Fetch for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(self.download(url))
    }
}
