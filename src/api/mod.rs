//! Network access module.
//!
//! This module provides:
//! - JSON-RPC client for the Hive and Steemit condenser API
//! - HTTP fetcher for image payloads
//! - The `BlogSource` and `ContentFetcher` capabilities
//! - API response types

pub mod client;
pub mod fetcher;
pub mod source;
pub mod types;

pub use client::HiveApi;
pub use fetcher::HttpFetcher;
pub use source::{BlogSource, ContentFetcher, FetchedContent};
pub use types::*;
