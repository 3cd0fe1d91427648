//! Export run statistics.

/// Counters for a single export run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportState {
    /// Entries returned by the blog listing.
    pub posts_listed: u64,
    /// Entries kept by the selector.
    pub posts_selected: u64,
    /// Markdown documents written.
    pub posts_written: u64,
    pub images_downloaded: u64,
    pub images_failed: u64,
}

impl ExportState {
    /// Increment written post count.
    pub fn increment_written(&mut self) {
        self.posts_written += 1;
    }

    /// Increment downloaded image count.
    pub fn increment_downloaded(&mut self) {
        self.images_downloaded += 1;
    }

    /// Increment failed image count.
    pub fn increment_failed(&mut self) {
        self.images_failed += 1;
    }

    /// Get total image attempts.
    pub fn total_images(&self) -> u64 {
        self.images_downloaded + self.images_failed
    }
}
