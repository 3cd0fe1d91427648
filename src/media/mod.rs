//! Media module for image discovery.

pub mod resolver;

pub use resolver::{extract_markdown_images, resolve_images, resolve_post_images};
