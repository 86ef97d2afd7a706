//! Business logic services
//!
//! Pure policy and orchestration logic. External systems are reached only
//! through the traits in [`crate::core::ports`].
//!
//! - [`cadence`] - Is today a nag day for this priority?
//! - [`escalation`] - Who does a reminder escalate to?
//! - [`eligibility`] - Allow/deny list scoping
//! - [`aggregator`] - Group reminders by escalation target
//! - [`delivery`] - Envelope, copy list and mailer hand-off
//! - [`run`] - One full nag pass

pub mod aggregator;
pub mod cadence;
pub mod delivery;
pub mod eligibility;
pub mod escalation;
pub mod run;

pub use aggregator::ReminderAggregator;
pub use cadence::should_nag_today;
pub use delivery::{DEFAULT_FROM, DeliverySettings, send_all};
pub use eligibility::{Eligibility, is_in_scope};
pub use escalation::{escalation_level, resolve_escalation_contact};
pub use run::{Candidate, NagPolicy, NagRun, RunReport};
