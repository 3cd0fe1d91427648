//! Configuration module for hive-posts-to-md.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Platform and post selection settings
//! - Configuration validation

pub mod loader;
pub mod platform;
pub mod selection;
pub mod validation;

pub use loader::{Config, NodesConfig, OptionsConfig, MAX_BLOG_LIMIT};
pub use platform::Platform;
pub use selection::{DatePolicy, Selection};
pub use validation::{validate_account_name, validate_config};
