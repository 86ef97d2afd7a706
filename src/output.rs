//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;

use crate::core::models::{EscalationLevel, Priority};
use crate::core::services::RunReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a nag run
#[derive(Debug, Serialize)]
pub struct RunOutput {
    /// Whether messages were only rendered, not transmitted
    pub dry_run: bool,
    /// Whether the config disabled sending
    pub send_enabled: bool,
    /// Run counters and prepared messages
    #[serde(flatten)]
    pub report: RunReport,
}

/// Result of a policy inspection
#[derive(Debug, Serialize)]
pub struct PolicyOutput {
    /// Priority the policy was evaluated for
    pub priority: Priority,
    /// Days until release
    pub days_until_release: i64,
    /// Reference date
    pub date: NaiveDate,
    /// Weekday the cadence was evaluated for
    pub weekday: String,
    /// Whether reminders go out on that weekday
    pub nag_today: bool,
    /// Weekdays on which reminders go out at this distance
    pub nag_days: Vec<String>,
    /// Who reminders escalate to
    pub escalation: EscalationLevel,
}

impl RunOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let r = &self.report;
        if let (Some(date), Some(release)) = (r.date, r.release_date) {
            println!("{date}: {} day(s) until the {release} release", r.days_until_release);
        }
        println!("Considered {} issue(s):", r.considered);
        println!("  queued:           {}", r.queued);
        println!("  not a nag day:    {}", r.skipped_cadence);
        println!("  out of scope:     {}", r.out_of_scope);
        println!("  not a member:     {}", r.not_member);
        println!("  unresolved:       {}", r.unresolved);
        println!();

        if !self.send_enabled {
            println!("{}", "Sending is disabled in config.".yellow());
            return;
        }
        if r.prepared.is_empty() {
            println!("No messages to send.");
            return;
        }

        println!("Prepared {} message(s):", r.prepared.len());
        for m in &r.prepared {
            println!("  [{}] {}", m.target.bold(), m.recipients.join(", "));
        }
        println!();

        if self.dry_run {
            println!("{} {} message(s) rendered, nothing sent.", "DRY RUN:".yellow(), r.sent);
        } else {
            println!("Sent {} message(s).", r.sent);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl PolicyOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Date:        {}", self.date);
        println!("Weekday:     {}", self.weekday);
        println!("Priority:    {}", self.priority);
        println!("Days left:   {}", self.days_until_release);
        println!("Nag days:    {}", self.nag_days.join(", "));
        println!("Escalation:  {}", self.escalation);
        if self.nag_today {
            println!("{} {}", "Nag on".green(), self.weekday);
        } else {
            println!("{} {}", "No nag on".dimmed(), self.weekday);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
