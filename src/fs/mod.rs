//! Filesystem module.
//!
//! Provides filename generation and sanitization for exported documents
//! and downloaded images.

pub mod naming;

pub use naming::{document_filename, extension_from_url, image_filename, sanitize_filename};
