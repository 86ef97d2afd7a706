//! Escalation policy - who hears about it?
//!
//! The closer the release, the higher up the management chain a reminder
//! goes. These thresholds intentionally differ from the cadence bands.

use crate::core::error::ResolutionError;
use crate::core::models::{EscalationLevel, Priority};
use crate::core::ports::Directory;

/// Pick the escalation level for `priority` at `days` until release
///
/// | priority | manager | 2nd-line | director | VP  |
/// |----------|---------|----------|----------|-----|
/// | high     | >= 20   | 15..20   | 5..15    | < 5 |
/// | normal   | >= 15   | 10..15   | 3..10    | < 3 |
///
/// [`Priority::Default`] always stays with the direct manager.
#[must_use]
pub const fn escalation_level(priority: Priority, days: i64) -> EscalationLevel {
    let [manager_from, second_from, director_from] = match priority {
        Priority::High => [20, 15, 5],
        Priority::Normal => [15, 10, 3],
        Priority::Default => return EscalationLevel::Manager,
    };

    if days >= manager_from {
        EscalationLevel::Manager
    } else if days >= second_from {
        EscalationLevel::SecondLineManager
    } else if days >= director_from {
        EscalationLevel::Director
    } else {
        EscalationLevel::Vp
    }
}

/// Resolve the email of the contact a reminder about `person` escalates to
pub fn resolve_escalation_contact<D: Directory + ?Sized>(
    directory: &D,
    person: &str,
    priority: Priority,
    days: i64,
) -> Result<String, ResolutionError> {
    match escalation_level(priority, days) {
        EscalationLevel::Manager => directory.nth_line_manager(person, 1),
        EscalationLevel::SecondLineManager => directory.nth_line_manager(person, 2),
        EscalationLevel::Director => directory.director_email(person),
        EscalationLevel::Vp => directory.vp_email(person),
    }
}
