//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DatePolicy, Platform, Selection};

/// Hive/Steemit blog exporter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "hive-posts-to-md",
    version,
    about = "Export Hive or Steemit blog posts to Markdown files",
    long_about = "Fetches the blog of an account, downloads the images of each selected post \
                  and writes one Markdown file with a front-matter header per post.\n\n\
                  By default only posts created yesterday (UTC) are exported."
)]
pub struct Args {
    /// Account whose posts are exported.
    pub author: String,

    /// Directory where Markdown files and images are written. Must exist.
    pub path: PathBuf,

    /// Only consider the most recent post.
    #[arg(long)]
    pub last: bool,

    /// Include posts tagged 'actifit'.
    #[arg(long)]
    pub actifit: bool,

    /// Export all posts, ignoring the date filter.
    #[arg(long)]
    pub all: bool,

    /// Export only posts created today (UTC).
    #[arg(long)]
    pub today: bool,

    /// Use the Steemit network instead of Hive.
    #[arg(long)]
    pub steemit: bool,

    /// API node URL, overriding the platform default.
    #[arg(long, env = "HIVE_POSTS_NODE")]
    pub node: Option<String>,

    /// Number of most recent blog entries to fetch (1-500).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hide spinners and progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if self.steemit {
            config.platform = Platform::Steemit;
        }

        // A node given on the command line applies to the chosen platform
        if let Some(node) = self.node {
            match config.platform {
                Platform::Hive => config.nodes.hive = node,
                Platform::Steemit => config.nodes.steemit = node,
            }
        }

        config.options.output_directory = Some(self.path);

        if let Some(limit) = self.limit {
            config.options.blog_limit = limit;
        }

        if self.quiet {
            config.options.show_progress = false;
        }

        config.selection = Selection {
            author: self.author.trim_start_matches('@').to_string(),
            include_actifit: self.actifit,
            last_only: self.last,
            date_policy: DatePolicy::from_flags(self.all, self.today),
        };
    }
}
