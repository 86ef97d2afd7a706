//! Domain models for relnag
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Priority`] - Which cadence/escalation table applies
//! - [`EscalationLevel`] - Manager, second-line manager, director or VP
//! - [`ReminderItem`] - Opaque payload about one flagged issue
//! - [`ReminderBatch`] - Items grouped by escalation target and person
//! - [`PreparedMessage`] / [`OutgoingMail`] - Render and delivery payloads

mod batch;
mod escalation;
mod mail;
mod priority;
mod reminder;

pub use batch::{PersonItems, ReminderBatch};
pub use escalation::EscalationLevel;
pub use mail::{OutgoingMail, PreparedMessage};
pub use priority::Priority;
pub use reminder::ReminderItem;
