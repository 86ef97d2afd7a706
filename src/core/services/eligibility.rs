//! Eligibility filter - allow/deny lists over the org hierarchy
//!
//! Lists hold org-unit emails (managers). A person matches a list entry when
//! they report, transitively, to that manager.

use crate::core::ports::Directory;

/// Allow/deny lists used to scope a run to part of the organization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Eligibility {
    allow: Vec<String>,
    deny: Vec<String>,
}

impl Eligibility {
    /// Build from allow and deny lists
    #[must_use]
    pub const fn new(allow: Vec<String>, deny: Vec<String>) -> Self {
        Self { allow, deny }
    }

    /// Allow-list entries
    #[must_use]
    pub fn allow(&self) -> &[String] {
        &self.allow
    }

    /// Deny-list entries
    #[must_use]
    pub fn deny(&self) -> &[String] {
        &self.deny
    }

    /// Whether `person` is in scope for this run
    pub fn admits<D: Directory + ?Sized>(&self, directory: &D, person: &str) -> bool {
        is_in_scope(directory, person, &self.allow, &self.deny)
    }
}

/// Whether `person` is in scope given allow and deny lists
///
/// - both empty: everyone is in scope
/// - deny only: in scope unless under a deny entry
/// - allow only: in scope when under an allow entry
/// - both: under an allow entry and not under a deny entry (deny wins)
pub fn is_in_scope<D: Directory + ?Sized>(
    directory: &D,
    person: &str,
    allow: &[String],
    deny: &[String],
) -> bool {
    let allowed = allow.is_empty() || is_under_any(directory, person, allow);
    allowed && (deny.is_empty() || !is_under_any(directory, person, deny))
}

fn is_under_any<D: Directory + ?Sized>(directory: &D, person: &str, units: &[String]) -> bool {
    units.iter().any(|unit| directory.is_under(person, unit))
}
