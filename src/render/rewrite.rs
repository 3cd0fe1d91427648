//! Replacement of remote image URLs with local filenames.

use crate::download::DownloadedImage;

/// Replace every occurrence of each downloaded image's URL in `body` with
/// its local filename, in download order.
///
/// URLs that failed to download are not in `images` and stay untouched.
pub fn rewrite_body(body: &str, images: &[DownloadedImage]) -> String {
    images.iter().fold(body.to_string(), |content, image| {
        content.replace(&image.url, &image.filename)
    })
}
