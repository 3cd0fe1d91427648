//! Render module: body rewriting and document output.

pub mod document;
pub mod rewrite;

pub use document::{clean_title, footer, front_matter, render_document, write_document, Document};
pub use rewrite::rewrite_body;
