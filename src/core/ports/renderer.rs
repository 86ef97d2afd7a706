//! Template rendering port
//!
//! Nag templates are chosen by name from configuration; the envelope that
//! wraps every message is fixed.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::error::TemplateError;
use crate::core::models::ReminderItem;

/// Data handed to a nag template
#[derive(Debug, Clone, Serialize)]
pub struct NagContext {
    /// Reference date of the run
    pub date: NaiveDate,
    /// Policy-specific extra values
    pub extra: BTreeMap<String, String>,
    /// Items for one escalation target, in recipient order
    pub data: Vec<ReminderItem>,
}

/// Data handed to the common envelope template
#[derive(Debug, Clone, Serialize)]
pub struct EnvelopeContext {
    /// Pre-rendered inner HTML
    pub message: String,
    /// Optional link to the query that produced the items
    pub query_url: Option<String>,
    /// Whether the inner message contains a table (enables table styling)
    pub has_table: bool,
}

/// Renders message bodies
pub trait TemplateRenderer: Send + Sync {
    /// Render the nag template registered under `name`
    fn render_nag(&self, name: &str, context: &NagContext) -> Result<String, TemplateError>;

    /// Wrap an inner message in the common envelope
    fn render_envelope(&self, context: &EnvelopeContext) -> Result<String, TemplateError>;
}
