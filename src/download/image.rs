//! Image downloading.

use std::path::Path;

use url::Url;

use crate::api::ContentFetcher;
use crate::download::state::ExportState;
use crate::error::Result;
use crate::fs::image_filename;

/// An image saved next to the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedImage {
    /// URL as it appears in the post.
    pub url: String,
    /// Generated local filename inside the output directory.
    pub filename: String,
}

/// Download a single image into `dir`.
///
/// Any failure is logged and reported as `None`; it never aborts the export.
pub async fn download_image(
    fetcher: &dyn ContentFetcher,
    url: &str,
    dir: &Path,
) -> Option<DownloadedImage> {
    match try_download(fetcher, url, dir).await {
        Ok(Some(filename)) => {
            tracing::info!("Image saved as: {}", dir.join(&filename).display());
            Some(DownloadedImage {
                url: url.to_string(),
                filename,
            })
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Failed to process image {}: {}", url, e);
            None
        }
    }
}

async fn try_download(
    fetcher: &dyn ContentFetcher,
    url: &str,
    dir: &Path,
) -> Result<Option<String>> {
    let parsed = Url::parse(url)?;
    let content = fetcher.fetch(url).await?;

    if !content.is_ok() {
        tracing::warn!(
            "Failed to download image: {} (status code: {})",
            url,
            content.status
        );
        return Ok(None);
    }

    let filename = image_filename(&parsed)?;
    tokio::fs::write(dir.join(&filename), &content.bytes).await?;

    Ok(Some(filename))
}

/// Download images one after another, in order, skipping failures.
pub async fn download_images(
    fetcher: &dyn ContentFetcher,
    urls: &[String],
    dir: &Path,
    state: &mut ExportState,
) -> Vec<DownloadedImage> {
    let mut downloaded = Vec::with_capacity(urls.len());

    for url in urls {
        match download_image(fetcher, url, dir).await {
            Some(image) => {
                state.increment_downloaded();
                downloaded.push(image);
            }
            None => state.increment_failed(),
        }
    }

    downloaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::testing::FakeFetcher;

    #[tokio::test]
    async fn test_download_success() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::new().with("https://x/a/photo.png", 200, b"png-bytes");

        let image = download_image(&fetcher, "https://x/a/photo.png", dir.path())
            .await
            .unwrap();

        assert_eq!(image.url, "https://x/a/photo.png");
        assert!(image.filename.ends_with(".png"));
        let saved = std::fs::read(dir.path().join(&image.filename)).unwrap();
        assert_eq!(saved, b"png-bytes");
    }

    #[tokio::test]
    async fn test_download_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::new().with("https://x/p/abc", 200, b"data");

        let image = download_image(&fetcher, "https://x/p/abc", dir.path())
            .await
            .unwrap();
        assert!(!image.filename.contains('.'));
    }

    #[tokio::test]
    async fn test_non_200_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::new()
            .with("https://x/missing.png", 404, b"")
            .with("https://x/moved.png", 301, b"");

        for url in ["https://x/missing.png", "https://x/moved.png"] {
            assert!(download_image(&fetcher, url, dir.path()).await.is_none());
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_errors_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::new();

        // Network error, then a relative URL
        for url in ["https://x/unknown.png", "images/local.png"] {
            assert!(download_image(&fetcher, url, dir.path()).await.is_none());
        }
        assert_eq!(fetcher.requests(), vec!["https://x/unknown.png"]);

        // Unwritable directory
        let gone = dir.path().join("gone");
        let fetcher = FakeFetcher::new().with("https://x/a.png", 200, b"data");
        assert!(download_image(&fetcher, "https://x/a.png", &gone).await.is_none());
    }

    #[tokio::test]
    async fn test_download_images_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::new()
            .with("https://x/a.png", 200, b"a")
            .with("https://x/b.png", 500, b"")
            .with("https://x/c.jpg", 200, b"c");
        let urls: Vec<String> = [
            "https://x/a.png",
            "https://x/b.png",
            "https://x/c.jpg",
            "https://x/a.png",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let mut state = ExportState::default();

        let images = download_images(&fetcher, &urls, dir.path(), &mut state).await;

        let fetched: Vec<&str> = images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(
            fetched,
            vec!["https://x/a.png", "https://x/c.jpg", "https://x/a.png"]
        );
        assert_ne!(images[0].filename, images[2].filename);
        assert_eq!(state.images_downloaded, 3);
        assert_eq!(state.images_failed, 1);
        assert_eq!(fetcher.requests(), urls);
    }
}
