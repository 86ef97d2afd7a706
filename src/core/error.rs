//! Error types for the escalation engine

use chrono::NaiveDate;
use thiserror::Error;

/// The directory could not resolve an escalation contact
///
/// Callers skip the person for this run instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// Person is not in the directory at all
    #[error("unknown person: {0}")]
    UnknownPerson(String),

    /// Management chain ends before the requested level
    #[error("{email} has no manager at level {level}")]
    NoManager {
        /// Person whose chain was walked
        email: String,
        /// Requested level (1 = direct manager)
        level: usize,
    },

    /// No director above the person
    #[error("no director above {0}")]
    NoDirector(String),

    /// No VP above the person
    #[error("no VP above {0}")]
    NoVp(String),
}

/// A message could not be delivered
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// An address failed to parse
    #[error("invalid address {address}: {reason}")]
    InvalidAddress {
        /// The offending address
        address: String,
        /// Parser message
        reason: String,
    },

    /// The message could not be assembled
    #[error("failed to build message: {0}")]
    Build(String),

    /// Transport rejected or failed to deliver the message
    #[error("transport failure: {0}")]
    Transport(String),

    /// Delivery requested but no transport is configured
    #[error("no mail transport configured")]
    NotConfigured,

    /// A login name is configured but its password variable is not set
    #[error("SMTP password variable {0} is not set")]
    MissingPassword(String),
}

/// Template lookup or rendering failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No template registered under this name
    #[error("template not found: {0}")]
    NotFound(String),

    /// The template failed to render
    #[error("failed to render {name}: {reason}")]
    Render {
        /// Template name
        name: String,
        /// Renderer message
        reason: String,
    },
}

/// The release calendar could not produce a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Every known release is before the reference date
    #[error("no release scheduled on or after {0}")]
    NoUpcomingRelease(NaiveDate),
}

/// Errors that abort a whole run
#[derive(Debug, Error)]
pub enum NagError {
    /// Release date lookup failed
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Template configuration defect
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Delivery failed
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
