//! Escalation levels
//!
//! Which rung of the management chain receives a reminder.

use serde::{Deserialize, Serialize};

/// Organizational contact that a reminder escalates to
///
/// Variants are ordered by severity, so `Manager < SecondLineManager <
/// Director < Vp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationLevel {
    /// Direct (first-line) manager
    Manager,
    /// Manager's manager
    SecondLineManager,
    /// Nearest director above the person
    Director,
    /// Nearest VP above the person
    Vp,
}

impl std::fmt::Display for EscalationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manager => write!(f, "manager"),
            Self::SecondLineManager => write!(f, "second_line_manager"),
            Self::Director => write!(f, "director"),
            Self::Vp => write!(f, "vp"),
        }
    }
}
