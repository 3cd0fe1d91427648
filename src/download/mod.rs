//! Download module for the export pipeline.
//!
//! This module provides:
//! - Export run statistics
//! - Whole-blog export
//! - Single post export
//! - Image downloading

pub mod blog;
pub mod image;
pub mod post;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use blog::export_blog;
pub use image::{download_image, download_images, DownloadedImage};
pub use post::export_post;
pub use state::ExportState;
