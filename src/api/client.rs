//! Hive/Steemit JSON-RPC client.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::source::BlogSource;
use crate::api::types::*;
use crate::blog::Post;
use crate::error::{Error, Result};

/// Condenser API client for a single node.
pub struct HiveApi {
    client: Client,
    node_url: String,
    next_id: AtomicU64,
}

impl HiveApi {
    /// Create a new client for the given node.
    pub fn new(node_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            node_url: node_url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Make a JSON-RPC call and unwrap the envelope.
    async fn call<P, T>(&self, method: &str, params: P) -> Result<T>
    where
        P: Serialize + Send,
        T: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(method, params, id);

        tracing::debug!("POST {} {}", self.node_url, method);

        let response = self
            .client
            .post(&self.node_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Api(format!(
                "HTTP {} from {}: {}",
                status,
                self.node_url,
                snippet(&text, 200)
            )));
        }

        let rpc: RpcResponse<T> = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse {} response: {} - Response: {}",
                method,
                e,
                snippet(&text, 500)
            ))
        })?;

        if let Some(error) = rpc.error {
            return Err(Error::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        rpc.result
            .ok_or_else(|| Error::Api(format!("Empty result for {}", method)))
    }

    /// Get account information by name.
    pub async fn get_account(&self, name: &str) -> Result<AccountInfo> {
        let accounts: Vec<AccountInfo> = self
            .call("condenser_api.get_accounts", (vec![name],))
            .await?;

        accounts
            .into_iter()
            .find(|a| a.name == name)
            .ok_or_else(|| Error::AccountNotFound(name.to_string()))
    }

    /// Get the most recent blog entries of an account, newest first.
    pub async fn get_blog(&self, name: &str, limit: u32) -> Result<Vec<BlogEntry>> {
        // start_entry_id 0 means "from the newest entry"
        let entries: Vec<BlogEntry> = self
            .call("condenser_api.get_blog", (name, 0u32, limit))
            .await?;

        tracing::debug!("Blog listing for {}: {} entries", name, entries.len());
        Ok(entries)
    }
}

/// First `max` characters of a response body, for error messages.
fn snippet(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl BlogSource for HiveApi {
    async fn fetch_blog(&self, account: &str, limit: u32) -> Result<Vec<Post>> {
        let info = self.get_account(account).await?;
        tracing::debug!(
            "Account {} has {} posts",
            info.name,
            info.post_count.unwrap_or(0)
        );

        // Newer entries come first; keep that order
        let entries = self.get_blog(account, limit).await?;
        Ok(entries
            .into_iter()
            .map(|entry| Post::from_comment(entry.comment))
            .collect())
    }
}
