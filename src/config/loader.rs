//! Configuration structures and loading logic.

use crate::config::platform::Platform;
use crate::config::selection::Selection;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of entries the blog API returns per request.
pub const MAX_BLOG_LIMIT: u32 = 500;

/// Name of the configuration file inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
///
/// Everything a run needs travels in this value: the platform, the node
/// to talk to, where files go, and which posts to pick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Platform to export from.
    #[serde(default)]
    pub platform: Platform,

    #[serde(default)]
    pub nodes: NodesConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    /// Post selection, filled from the command line.
    #[serde(skip)]
    pub selection: Selection,
}

/// API node configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodesConfig {
    /// Hive API node URL.
    #[serde(default = "default_hive_node")]
    pub hive: String,

    /// Steemit API node URL.
    #[serde(default = "default_steemit_node")]
    pub steemit: String,
}

impl Default for NodesConfig {
    fn default() -> Self {
        Self {
            hive: default_hive_node(),
            steemit: default_steemit_node(),
        }
    }
}

/// Export options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory where Markdown files and images are written.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Number of most recent blog entries to request.
    #[serde(default = "default_blog_limit")]
    pub blog_limit: u32,

    /// User agent sent with every HTTP request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to show spinners and progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Text preceding the platform name in the footer attribution.
    #[serde(default = "default_footer_label")]
    pub footer_label: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            blog_limit: default_blog_limit(),
            user_agent: default_user_agent(),
            show_progress: true,
            footer_label: default_footer_label(),
        }
    }
}

fn default_hive_node() -> String {
    Platform::Hive.default_node().to_string()
}

fn default_steemit_node() -> String {
    Platform::Steemit.default_node().to_string()
}

fn default_blog_limit() -> u32 {
    MAX_BLOG_LIMIT
}

fn default_user_agent() -> String {
    concat!("hive-posts-to-md/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_footer_label() -> String {
    "Postado originalmente na rede".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Default location of the configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hive-posts-to-md")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// API node for the selected platform.
    pub fn node_url(&self) -> &str {
        match self.platform {
            Platform::Hive => &self.nodes.hive,
            Platform::Steemit => &self.nodes.steemit,
        }
    }

    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.options
            .output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
