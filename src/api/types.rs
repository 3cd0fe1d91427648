//! JSON-RPC request and response type definitions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: P,
    pub id: u64,
}

impl<'a, P> RpcRequest<'a, P> {
    pub fn new(method: &'a str, params: P, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope. Exactly one of `result` or `error` is set.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

/// Error object returned by the node.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Account record from `condenser_api.get_accounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub name: String,
    #[serde(default)]
    pub post_count: Option<u64>,
}

/// One entry of an account's blog listing (own posts and reblogs).
#[derive(Debug, Clone, Deserialize)]
pub struct BlogEntry {
    /// Account whose blog lists this entry.
    pub blog: String,
    #[serde(default)]
    pub entry_id: u64,
    pub comment: Comment,
    /// Set for reblogs.
    #[serde(default)]
    pub reblogged_on: Option<String>,
}

/// A post as returned by the condenser API.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub author: String,
    pub permlink: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// UTC timestamp without offset, e.g. `2024-03-05T12:34:56`.
    pub created: NaiveDateTime,
    /// JSON document encoded as a string.
    #[serde(default)]
    pub json_metadata: String,
}

/// Decoded `json_metadata` of a post.
///
/// Apps disagree on the shape of these fields; anything other than a list
/// reads as empty and non-string items are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMetadata {
    #[serde(default, deserialize_with = "string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub image: Vec<String>,
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = RpcRequest::new("condenser_api.get_blog", ("alice", 0, 500), 1);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["method"], "condenser_api.get_blog");
        assert_eq!(json["params"], serde_json::json!(["alice", 0, 500]));
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_error_response() {
        let text = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid parameters"},"id":1}"#;
        let response: RpcResponse<Vec<BlogEntry>> = serde_json::from_str(text).unwrap();
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[test]
    fn test_blog_entry_parsing() {
        let text = r##"{
            "blog": "alice",
            "entry_id": 42,
            "comment": {
                "author": "alice",
                "permlink": "my-post",
                "title": "My Post",
                "body": "Hello",
                "created": "2024-03-05T12:34:56",
                "json_metadata": "{\"tags\":[\"hive\"],\"image\":[\"https://x/a.png\"]}"
            },
            "reblogged_on": "1970-01-01T00:00:00"
        }"##;
        let entry: BlogEntry = serde_json::from_str(text).unwrap();
        assert_eq!(entry.entry_id, 42);
        assert_eq!(entry.comment.permlink, "my-post");
        assert_eq!(
            entry.comment.created.to_string(),
            "2024-03-05 12:34:56"
        );
    }
}
