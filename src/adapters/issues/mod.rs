//! Issue file loader
//!
//! Reads the flagged issues for a run from a JSON array:
//!
//! ```json
//! [
//!   {"id": "1001", "summary": "Crash on startup", "assignee": "dev@example.com", "tracking": "blocking"},
//!   {"id": "1002", "summary": "Typo", "assignee": "dev@example.com", "priority": "normal",
//!    "url": "https://issues.example.com/1002", "fields": {"component": "UI"}}
//! ]
//! ```
//!
//! An explicit `priority` label wins; otherwise the release `tracking` flag
//! decides; an issue with neither gets the default priority.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::models::{Priority, ReminderItem};
use crate::core::services::Candidate;

/// One issue record as stored in the file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueRecord {
    /// Issue identifier
    pub id: String,
    /// One-line description
    pub summary: String,
    /// Person the issue is assigned to
    pub assignee: String,
    /// Link to the issue
    #[serde(default)]
    pub url: Option<String>,
    /// Explicit priority label
    #[serde(default)]
    pub priority: Option<String>,
    /// Release tracking flag (`blocking`, `+`, ...)
    #[serde(default)]
    pub tracking: Option<String>,
    /// Extra columns for templates
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl IssueRecord {
    /// Resolve the effective priority
    #[must_use]
    pub fn priority(&self) -> Priority {
        match (&self.priority, &self.tracking) {
            (Some(label), _) => Priority::from_label(label),
            (None, Some(flag)) => Priority::from_tracking(flag),
            (None, None) => Priority::Default,
        }
    }
}

impl From<IssueRecord> for Candidate {
    fn from(record: IssueRecord) -> Self {
        let priority = record.priority();
        Self {
            assignee: record.assignee,
            priority,
            item: ReminderItem {
                id: record.id,
                summary: record.summary,
                url: record.url,
                fields: record.fields,
            },
        }
    }
}

/// Parse candidates from JSON text
pub fn parse_issues(content: &str) -> anyhow::Result<Vec<Candidate>> {
    let records: Vec<IssueRecord> = serde_json::from_str(content).context("invalid issue JSON")?;
    Ok(records.into_iter().map(Candidate::from).collect())
}

/// Load candidates from an issue file
pub fn load_issues(path: &Path) -> anyhow::Result<Vec<Candidate>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read issues from {}", path.display()))?;
    parse_issues(&content)
}
