//! Capabilities the export pipeline needs from the outside world.

use async_trait::async_trait;

use crate::blog::Post;
use crate::error::Result;

/// Something that can list an account's blog, most recent entry first.
#[async_trait]
pub trait BlogSource: Send + Sync {
    async fn fetch_blog(&self, account: &str, limit: u32) -> Result<Vec<Post>>;
}

/// Raw response to a content request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContent {
    pub status: u16,
    pub bytes: Vec<u8>,
}

impl FetchedContent {
    /// Only an exact 200 counts as a usable payload.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Something that can GET arbitrary URLs.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedContent>;
}
