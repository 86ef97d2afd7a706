//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `phonebook/` - JSON org chart ([`Directory`](crate::core::ports::Directory))
//! - `calendar/` - Configured release schedule
//! - `smtp/` - lettre mailer with dry-run
//! - `templates/` - askama-compiled HTML templates
//! - `issues/` - JSON issue file loader for the CLI

pub mod calendar;
pub mod issues;
pub mod phonebook;
pub mod smtp;
pub mod templates;

pub use calendar::ScheduleCalendar;
pub use issues::{load_issues, parse_issues};
pub use phonebook::JsonDirectory;
pub use smtp::SmtpMailer;
pub use templates::CompiledTemplates;
