//! Issue priority
//!
//! Selects which cadence and escalation table applies to an issue.

use serde::{Deserialize, Serialize};

/// Priority of a flagged issue
///
/// Priorities usually come from outside (issue trackers, hand-written files)
/// and may be missing or misspelled, so parsing never fails: anything that is
/// not recognized becomes [`Priority::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Release blocker - earliest and steepest escalation
    High,
    /// Tracked for the release but not blocking
    Normal,
    /// Unknown or untracked - Monday-only cadence, first-line manager only
    #[default]
    Default,
}

impl Priority {
    /// All priorities, most urgent first
    pub const ALL: [Self; 3] = [Self::High, Self::Normal, Self::Default];

    /// Normalize a free-form priority label
    ///
    /// `"high"` and `"normal"` (any case, surrounding whitespace ignored) map
    /// to their variants; everything else maps to [`Priority::Default`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "normal" => Self::Normal,
            _ => Self::Default,
        }
    }

    /// Derive the priority from a release tracking flag
    ///
    /// A `blocking` flag makes the issue high priority; any other tracking
    /// value is normal.
    #[must_use]
    pub fn from_tracking(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("blocking") {
            Self::High
        } else {
            Self::Normal
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Normal => write!(f, "normal"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}
