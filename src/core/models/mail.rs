//! Message models
//!
//! What the aggregator hands to delivery, and what delivery hands to a mailer.

use serde::Serialize;

/// One rendered message per escalation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedMessage {
    /// Escalation target the batch is grouped under (cc'd on delivery)
    pub target: String,
    /// People the reminders are about, sorted ascending
    pub recipients: Vec<String>,
    /// Body rendered from the nag template
    pub body: String,
}

/// A fully addressed message ready for a mailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    /// Sender address
    pub from: String,
    /// Recipients, sorted ascending
    pub to: Vec<String>,
    /// Copy list, sorted ascending
    pub cc: Vec<String>,
    /// Subject line
    pub subject: String,
    /// HTML body (envelope already applied)
    pub body_html: String,
}
