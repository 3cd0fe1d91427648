//! Markdown document rendering and writing.

use std::path::{Path, PathBuf};

use crate::blog::Post;
use crate::config::Platform;
use crate::error::Result;
use crate::fs::document_filename;

/// Characters removed from titles so the front-matter stays parseable.
const TITLE_STRIPPED_CHARS: [char; 5] = [':', '\'', '#', '(', ')'];

/// A rendered post, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub content: String,
}

/// Remove the characters a simple YAML reader would choke on.
pub fn clean_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !TITLE_STRIPPED_CHARS.contains(c))
        .collect()
}

/// Build the front-matter block, delimiters included.
pub fn front_matter(post: &Post, platform: Platform) -> String {
    let mut header = String::from("---\n");
    header.push_str(&format!("title: {}\n", clean_title(&post.title)));
    header.push_str(&format!(
        "date: {}\n",
        post.created.format("%Y-%m-%d %H:%M:%S%:z")
    ));
    header.push_str(&format!("permlink: /{}/{}\n", platform.name(), post.permlink));
    header.push_str("type: posts\n");
    header.push_str(&format!("categories: [\"{}\"]\n", platform.display_name()));
    header.push_str(&format!("author: {}\n", post.author));
    header.push_str("---\n");
    header
}

/// Build the attribution footer linking back to the original post.
pub fn footer(post: &Post, platform: Platform, label: &str) -> String {
    let link = platform.post_url(&post.author, &post.permlink);
    format!(
        "---\n<br />**{} {}: [{}]({})** <br />\n----",
        label,
        platform.display_name(),
        link,
        link
    )
}

/// Render a post with an already rewritten body.
pub fn render_document(
    post: &Post,
    body: &str,
    platform: Platform,
    label: &str,
) -> Result<Document> {
    let filename = document_filename(post.created_date(), &post.permlink)?;

    let mut content = front_matter(post, platform);
    content.push_str(body);
    content.push_str(&footer(post, platform, label));

    Ok(Document { filename, content })
}

/// Write a document into `dir`, replacing any previous export of the same post.
pub async fn write_document(dir: &Path, document: &Document) -> Result<PathBuf> {
    let path = dir.join(&document.filename);
    tokio::fs::write(&path, document.content.as_bytes()).await?;
    Ok(path)
}
