//! Post selection parameters.

use std::fmt;

/// Which creation dates are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePolicy {
    /// Posts created yesterday (UTC), the default.
    #[default]
    Yesterday,
    /// Posts created today (UTC).
    Today,
    /// No date filter.
    All,
}

impl DatePolicy {
    /// Resolve the `--all` and `--today` flags. `--all` wins.
    pub fn from_flags(all: bool, today: bool) -> Self {
        if all {
            DatePolicy::All
        } else if today {
            DatePolicy::Today
        } else {
            DatePolicy::Yesterday
        }
    }
}

impl fmt::Display for DatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePolicy::Yesterday => write!(f, "yesterday"),
            DatePolicy::Today => write!(f, "today"),
            DatePolicy::All => write!(f, "all"),
        }
    }
}

/// Parameters for choosing which blog entries to export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Account whose own posts are exported.
    pub author: String,

    /// Keep posts tagged `actifit`.
    pub include_actifit: bool,

    /// Only consider the most recent blog entry.
    pub last_only: bool,

    pub date_policy: DatePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_policy_from_flags() {
        assert_eq!(DatePolicy::from_flags(false, false), DatePolicy::Yesterday);
        assert_eq!(DatePolicy::from_flags(false, true), DatePolicy::Today);
        assert_eq!(DatePolicy::from_flags(true, false), DatePolicy::All);
        assert_eq!(DatePolicy::from_flags(true, true), DatePolicy::All);
    }
}
