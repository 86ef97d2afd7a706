//! Organizational directory port
//!
//! Defines the interface for looking people up in the org chart.

use crate::core::error::ResolutionError;

/// Organizational directory
///
/// Implementations resolve people to their management chain and answer
/// hierarchy membership questions. Emails passed in may be aliases;
/// implementations are expected to accept them.
#[cfg_attr(test, mockall::automock)]
pub trait Directory: Send + Sync {
    /// Whether the email belongs to a known organization member
    fn is_org_member(&self, email: &str) -> bool;

    /// Canonical org email for a member (aliases map to the primary address)
    fn canonical_email(&self, email: &str) -> String;

    /// Whether `email` reports, transitively, to `org_unit`
    fn is_under(&self, email: &str, org_unit: &str) -> bool;

    /// The `n`-th manager up the chain (1 = direct manager)
    fn nth_line_manager(&self, email: &str, n: usize) -> Result<String, ResolutionError>;

    /// The nearest director above the person
    fn director_email(&self, email: &str) -> Result<String, ResolutionError>;

    /// The nearest VP above the person
    fn vp_email(&self, email: &str) -> Result<String, ResolutionError>;
}
