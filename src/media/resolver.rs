//! Image URL discovery in post metadata and Markdown bodies.

use std::sync::LazyLock;

use regex::Regex;

use crate::blog::Post;

/// Inline Markdown image: `![alt](url)`.
static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("valid image regex"));

/// Extract every inline image URL from a Markdown body, in order.
pub fn extract_markdown_images(body: &str) -> Vec<String> {
    MARKDOWN_IMAGE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Collect the image URLs of a post: metadata images first, then inline
/// images from the body.
///
/// Duplicates are kept. A URL listed in the metadata and used twice in the
/// body appears three times, and each occurrence is downloaded.
pub fn resolve_images(metadata_images: &[String], body: &str) -> Vec<String> {
    let mut urls = metadata_images.to_vec();
    urls.extend(extract_markdown_images(body));
    urls
}

/// Collect the image URLs of a post, logging what was found where.
pub fn resolve_post_images(post: &Post) -> Vec<String> {
    let urls = resolve_images(&post.images, &post.body);

    let (metadata, inline) = urls.split_at(post.images.len());
    if !metadata.is_empty() {
        tracing::info!("Images found in metadata: {:?}", metadata);
    }
    if !inline.is_empty() {
        tracing::info!("Images found in body: {:?}", inline);
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_markdown_images() {
        let body = "Intro ![first](https://x/a.png) text ![](https://x/b.jpg)\n\
                    [not an image](https://x/c.png) ![third](https://x/d.gif)";
        assert_eq!(
            extract_markdown_images(body),
            vec!["https://x/a.png", "https://x/b.jpg", "https://x/d.gif"]
        );
    }

    #[test]
    fn test_extract_is_non_greedy() {
        let body = "![a](u1) and ![b](u2)";
        assert_eq!(extract_markdown_images(body), vec!["u1", "u2"]);
    }

    #[test]
    fn test_extract_does_not_cross_lines() {
        let body = "![broken\nalt](https://x/a.png)";
        assert!(extract_markdown_images(body).is_empty());
    }

    #[test]
    fn test_resolve_keeps_duplicates() {
        let metadata = vec!["urlA".to_string()];
        assert_eq!(resolve_images(&metadata, "![x](urlA)"), vec!["urlA", "urlA"]);

        assert_eq!(
            resolve_images(&metadata, "![x](urlA) ![y](urlA)"),
            vec!["urlA", "urlA", "urlA"]
        );
    }

    #[test]
    fn test_resolve_metadata_first() {
        let metadata = vec!["meta1".to_string(), "meta2".to_string()];
        assert_eq!(
            resolve_images(&metadata, "![x](body1)"),
            vec!["meta1", "meta2", "body1"]
        );
        assert_eq!(resolve_images(&[], "no images"), Vec::<String>::new());
    }
}
