//! Export of a single post.

use std::path::PathBuf;

use crate::api::ContentFetcher;
use crate::blog::Post;
use crate::config::Config;
use crate::download::image::download_images;
use crate::download::state::ExportState;
use crate::error::Result;
use crate::media::resolve_post_images;
use crate::render::{render_document, rewrite_body, write_document};

/// Download a post's images, point its body at the local copies and write
/// the Markdown document. Returns the document path.
pub async fn export_post(
    fetcher: &dyn ContentFetcher,
    config: &Config,
    state: &mut ExportState,
    post: &Post,
) -> Result<PathBuf> {
    let output_dir = config.output_directory();

    let urls = resolve_post_images(post);
    let images = download_images(fetcher, &urls, &output_dir, state).await;
    let body = rewrite_body(&post.body, &images);

    let document = render_document(
        post,
        &body,
        config.platform,
        &config.options.footer_label,
    )?;
    let path = write_document(&output_dir, &document).await?;

    state.increment_written();
    tracing::info!("Post saved: {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::testing::FakeFetcher;
    use chrono::{TimeZone, Utc};

    fn config(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.options.output_directory = Some(dir.to_path_buf());
        config.options.show_progress = false;
        config
    }

    fn post(body: &str, images: &[&str]) -> Post {
        Post {
            author: "alice".to_string(),
            title: "Weekend (part 2)".to_string(),
            permlink: "my-post".to_string(),
            body: body.to_string(),
            created: Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap(),
            tags: Vec::new(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_export_post_rewrites_images() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::new()
            .with("https://x/a.png", 200, b"a")
            .with("https://x/b.jpg", 404, b"");
        let mut state = ExportState::default();
        let post = post(
            "![a](https://x/a.png)\n![b](https://x/b.jpg)\n",
            &["https://x/a.png"],
        );

        let path = export_post(&fetcher, &config(dir.path()), &mut state, &post)
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("2024-03-05_my-post.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\ntitle: Weekend part 2\n"));
        assert!(!content.contains("https://x/a.png"));
        assert!(content.contains("![b](https://x/b.jpg)"));

        // Metadata copy plus the inline copy of a.png; b.jpg failed
        assert_eq!(fetcher.requests().len(), 3);
        assert_eq!(state.images_downloaded, 2);
        assert_eq!(state.images_failed, 1);
        assert_eq!(state.posts_written, 1);

        let png_files = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
            .count();
        assert_eq!(png_files, 2);
    }

    #[tokio::test]
    async fn test_export_post_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::new();
        let mut state = ExportState::default();
        let post = post("No images here.\n", &[]);
        let config = config(dir.path());

        let first = export_post(&fetcher, &config, &mut state, &post).await.unwrap();
        let first_content = std::fs::read(&first).unwrap();
        let second = export_post(&fetcher, &config, &mut state, &post).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), first_content);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_export_post_rejects_bad_permlink() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = post("", &[]);
        bad.permlink = "../escape".to_string();

        let result = export_post(
            &FakeFetcher::new(),
            &config(dir.path()),
            &mut ExportState::default(),
            &bad,
        )
        .await;
        assert!(result.is_err());
    }
}
