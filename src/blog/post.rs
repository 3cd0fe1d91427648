//! Post representation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::api::types::{Comment, PostMetadata};

/// Tag used by the Actifit fitness app.
pub const ACTIFIT_TAG: &str = "actifit";

/// A blog post ready for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub author: String,
    pub title: String,
    pub permlink: String,
    /// Raw Markdown body.
    pub body: String,
    pub created: DateTime<Utc>,
    pub tags: Vec<String>,
    /// Image URLs listed in the post metadata, in order.
    pub images: Vec<String>,
}

impl Post {
    /// Build a post from an API comment, decoding its JSON metadata.
    ///
    /// Missing or unreadable metadata means no tags and no images. Reblogs
    /// from other apps carry all sorts of metadata, so this never fails.
    pub fn from_comment(comment: Comment) -> Self {
        let metadata = parse_metadata(&comment.permlink, &comment.json_metadata);

        Self {
            author: comment.author,
            title: comment.title,
            permlink: comment.permlink,
            body: comment.body,
            created: comment.created.and_utc(),
            tags: metadata.tags,
            images: metadata.image,
        }
    }

    /// Check whether the post carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// UTC calendar date the post was created on.
    pub fn created_date(&self) -> NaiveDate {
        self.created.date_naive()
    }
}

fn parse_metadata(permlink: &str, raw: &str) -> PostMetadata {
    if raw.trim().is_empty() {
        return PostMetadata::default();
    }

    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::debug!("Ignoring unreadable metadata of {}: {}", permlink, e);
        PostMetadata::default()
    })
}
