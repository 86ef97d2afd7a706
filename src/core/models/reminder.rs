//! Reminder payloads
//!
//! A reminder item is whatever an upstream tool wants shown about a flagged
//! issue. The engine never looks inside it; it only groups and forwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One flagged issue that needs attention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderItem {
    /// Issue identifier (e.g. a bug number)
    pub id: String,

    /// One-line description
    pub summary: String,

    /// Link to the issue, if the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Free-form extra columns (component, status, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl ReminderItem {
    /// Create an item with no link and no extra fields
    #[must_use]
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            url: None,
            fields: BTreeMap::new(),
        }
    }

    /// Attach a link
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach an extra field
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up an extra field, empty when absent
    #[must_use]
    pub fn field(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }
}
