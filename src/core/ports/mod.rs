//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the escalation engine and
//! the systems it talks to (org directory, release calendar, mail, templates).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete implementations,
//! so tests can substitute deterministic fakes.

mod calendar;
mod directory;
mod mailer;
mod renderer;

pub use calendar::ReleaseCalendar;
pub use directory::Directory;
pub use mailer::Mailer;
pub use renderer::{EnvelopeContext, NagContext, TemplateRenderer};

#[cfg(test)]
pub use directory::MockDirectory;
