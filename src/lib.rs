//! hive-posts-to-md - export Hive and Steemit blog posts to Markdown
//!
//! This library fetches an account's blog, selects posts by date and tag,
//! downloads their images next to the output and writes one Markdown file
//! with a front-matter header per post.
//!
//! # Features
//!
//! - Hive and Steemit condenser API support
//! - Yesterday / today / all / last-post selection
//! - Optional exclusion of Actifit posts
//! - Image download with body rewriting to local files
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use hive_posts_to_md::{export_blog, Config, HiveApi, HttpFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.selection.author = "alice".to_string();
//!
//!     let api = HiveApi::new(config.node_url(), &config.options.user_agent)?;
//!     let fetcher = HttpFetcher::new(&config.options.user_agent, false)?;
//!     let state = export_blog(&api, &fetcher, &config, Utc::now().date_naive()).await?;
//!
//!     println!("{} posts written", state.posts_written);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod blog;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod render;

// Re-exports for convenience
pub use api::{BlogSource, ContentFetcher, HiveApi, HttpFetcher};
pub use blog::{select_posts, Post};
pub use config::{Config, DatePolicy, Platform, Selection};
pub use download::{export_blog, export_post, DownloadedImage, ExportState};
pub use error::{Error, Result};
