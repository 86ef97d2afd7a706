//! Core domain logic for relnag
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Priority, EscalationLevel, ReminderBatch)
//! - `services/` - Cadence, escalation, eligibility, aggregation, delivery
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Typed errors for resolution, templates and delivery

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
