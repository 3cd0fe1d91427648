//! In-memory test doubles for the network capabilities.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{BlogSource, ContentFetcher, FetchedContent};
use crate::blog::Post;
use crate::error::{Error, Result};

/// Serves canned responses; unknown URLs fail like a network error.
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, FetchedContent>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, status: u16, bytes: &[u8]) -> Self {
        self.responses.insert(
            url.to_string(),
            FetchedContent {
                status,
                bytes: bytes.to_vec(),
            },
        );
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedContent> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Download(format!("connection refused: {}", url)))
    }
}

/// Blog listing for a single account.
pub struct FakeBlogSource {
    pub account: String,
    pub posts: Vec<Post>,
}

#[async_trait]
impl BlogSource for FakeBlogSource {
    async fn fetch_blog(&self, account: &str, limit: u32) -> Result<Vec<Post>> {
        if account != self.account {
            return Err(Error::AccountNotFound(account.to_string()));
        }

        Ok(self.posts.iter().take(limit as usize).cloned().collect())
    }
}
