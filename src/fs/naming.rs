//! Filename generation and manipulation.

use chrono::NaiveDate;
use url::Url;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Also reject if it contains path separators (should be sanitized, not allowed)
    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Sanitize remaining problematic characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Extract the file extension (without dot) from a URL's path.
///
/// Only the last path segment is considered and leading dots are ignored,
/// so `/img/.hidden` has no extension. Query strings and fragments never
/// contribute.
pub fn extension_from_url(url: &Url) -> Option<String> {
    let segment = url.path().rsplit('/').next()?;
    let stem = segment.trim_start_matches('.');
    let dot = stem.rfind('.')?;
    let ext = &stem[dot + 1..];

    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}

/// Generate a unique local filename for an image URL: a random token plus
/// the URL's extension, if any.
pub fn image_filename(url: &Url) -> Result<String> {
    let token = Uuid::new_v4();
    let name = match extension_from_url(url) {
        Some(ext) => format!("{}.{}", token, ext),
        None => token.to_string(),
    };

    sanitize_filename(&name)
}

/// Filename of the Markdown document for a post: `<YYYY-MM-DD>_<permlink>.md`.
pub fn document_filename(created: NaiveDate, permlink: &str) -> Result<String> {
    sanitize_filename(&format!("{}_{}.md", created.format("%Y-%m-%d"), permlink))
}
