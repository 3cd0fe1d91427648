//! Plain HTTP content fetcher for image payloads.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use url::Url;

use crate::api::source::{ContentFetcher, FetchedContent};
use crate::error::{Error, Result};
use crate::output::create_download_bar;

/// Minimum payload size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Fetches URLs with a single GET each. No retries, no timeout.
pub struct HttpFetcher {
    client: Client,
    show_progress: bool,
}

impl HttpFetcher {
    /// Create a new fetcher.
    pub fn new(user_agent: &str, show_progress: bool) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            show_progress,
        })
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedContent> {
        let url = Url::parse(url)?;

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Ok(FetchedContent {
                status,
                bytes: Vec::new(),
            });
        }

        let content_length = response.content_length();
        let progress = match content_length {
            Some(len) if self.show_progress && len > PROGRESS_THRESHOLD => {
                Some(create_download_bar(len))
            }
            _ => None,
        };

        let capacity = content_length.unwrap_or(0).min(PROGRESS_THRESHOLD) as usize;
        let mut bytes = Vec::with_capacity(capacity);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            bytes.extend_from_slice(&chunk);

            if let Some(ref pb) = progress {
                pb.set_position(bytes.len() as u64);
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(FetchedContent { status, bytes })
    }
}
