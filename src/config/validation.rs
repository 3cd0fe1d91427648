//! Configuration validation logic.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::loader::{Config, MAX_BLOG_LIMIT};
use crate::error::{Error, Result};

/// Minimum account name length.
const MIN_ACCOUNT_LENGTH: usize = 3;

/// Maximum account name length.
const MAX_ACCOUNT_LENGTH: usize = 16;

/// One dot-separated segment of an account name.
static ACCOUNT_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]+[a-z0-9]$").expect("valid account regex"));

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_account_name(&config.selection.author)?;
    validate_output_directory(&config.output_directory())?;
    validate_node_url(config.node_url())?;
    validate_blog_limit(config.options.blog_limit)?;

    Ok(())
}

/// Validate an account name against the chain's naming rules.
pub fn validate_account_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::MissingConfig("author".to_string()));
    }

    // Remove leading @ if present
    let clean = name.trim_start_matches('@');

    if clean.len() < MIN_ACCOUNT_LENGTH || clean.len() > MAX_ACCOUNT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "author".to_string(),
            message: format!(
                "Account '{}' must be between {} and {} characters",
                name, MIN_ACCOUNT_LENGTH, MAX_ACCOUNT_LENGTH
            ),
        });
    }

    for segment in clean.split('.') {
        if !ACCOUNT_SEGMENT.is_match(segment) || segment.contains("--") {
            return Err(Error::ConfigValidation {
                field: "author".to_string(),
                message: format!(
                    "Account '{}' is not a valid name. Use lowercase letters, digits, hyphens and dots.",
                    name
                ),
            });
        }
    }

    Ok(())
}

/// Validate that the output directory exists and is a directory.
pub fn validate_output_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::ConfigValidation {
            field: "path".to_string(),
            message: format!("Output directory does not exist: {}", path.display()),
        });
    }

    if !path.is_dir() {
        return Err(Error::ConfigValidation {
            field: "path".to_string(),
            message: format!("Output path is not a directory: {}", path.display()),
        });
    }

    Ok(())
}

/// Validate the API node URL.
pub fn validate_node_url(node: &str) -> Result<()> {
    if node.is_empty() {
        return Err(Error::MissingConfig("node URL".to_string()));
    }

    let url = Url::parse(node).map_err(|e| Error::ConfigValidation {
        field: "node".to_string(),
        message: format!("Invalid node URL '{}': {}", node, e),
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "node".to_string(),
            message: format!("Node URL must use http or https: {}", node),
        });
    }

    Ok(())
}

/// Validate the number of blog entries requested.
pub fn validate_blog_limit(limit: u32) -> Result<()> {
    if limit == 0 || limit > MAX_BLOG_LIMIT {
        return Err(Error::ConfigValidation {
            field: "blog_limit".to_string(),
            message: format!("Limit must be between 1 and {} (got {})", MAX_BLOG_LIMIT, limit),
        });
    }

    Ok(())
}
