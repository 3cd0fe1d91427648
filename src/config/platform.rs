//! Blockchain platform definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default Hive API node.
pub const HIVE_NODE: &str = "https://api.hive.blog";

/// Default Steemit API node.
pub const STEEMIT_NODE: &str = "https://api.steemit.com";

/// Supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Hive network (default).
    #[default]
    Hive,
    /// Steemit network.
    Steemit,
}

impl Platform {
    /// Lowercase platform name, used in permlink prefixes and blog hosts.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Hive => "hive",
            Platform::Steemit => "steemit",
        }
    }

    /// Capitalized platform name, used in categories and footers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Hive => "Hive",
            Platform::Steemit => "Steemit",
        }
    }

    /// Default API node for this platform.
    pub fn default_node(&self) -> &'static str {
        match self {
            Platform::Hive => HIVE_NODE,
            Platform::Steemit => STEEMIT_NODE,
        }
    }

    /// Public URL of a post on the platform's blog front-end.
    pub fn post_url(&self, author: &str, permlink: &str) -> String {
        format!("https://{}.blog/@{}/{}", self.name(), author, permlink)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hive" => Ok(Platform::Hive),
            "steemit" | "steem" => Ok(Platform::Steemit),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url() {
        assert_eq!(
            Platform::Hive.post_url("alice", "my-post"),
            "https://hive.blog/@alice/my-post"
        );
        assert_eq!(
            Platform::Steemit.post_url("bob", "hello"),
            "https://steemit.blog/@bob/hello"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("HIVE".parse::<Platform>().unwrap(), Platform::Hive);
        assert_eq!("steemit".parse::<Platform>().unwrap(), Platform::Steemit);
        assert!("blurt".parse::<Platform>().is_err());
    }
}
