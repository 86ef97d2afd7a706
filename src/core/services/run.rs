//! Run pipeline - one nag pass over a snapshot of flagged issues
//!
//! Order of operations is fixed: every candidate is filtered and aggregated
//! before anything is rendered, and nothing is delivered until every
//! message and envelope has rendered. Aborting mid-run therefore has no side
//! effects. With sending disabled the run stops after aggregation.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use serde::Serialize;

use super::aggregator::ReminderAggregator;
use super::cadence::should_nag_today;
use super::delivery::{DeliverySettings, send_all};
use super::eligibility::Eligibility;
use crate::core::error::NagError;
use crate::core::models::{PreparedMessage, Priority, ReminderItem};
use crate::core::ports::{Directory, Mailer, ReleaseCalendar, TemplateRenderer};

/// A flagged issue and the person it should be chased with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Person responsible for the issue
    pub assignee: String,
    /// Priority of the issue
    pub priority: Priority,
    /// Payload shown in the reminder
    pub item: ReminderItem,
}

/// Per-policy rendering and scoping settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NagPolicy {
    /// Nag template name; `None` disables message generation
    pub template: Option<String>,
    /// Extra values passed to the template
    pub extra: BTreeMap<String, String>,
    /// Allow/deny lists
    pub eligibility: Eligibility,
}

/// Outcome of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Reference date of the run
    pub date: Option<NaiveDate>,
    /// Next release date
    pub release_date: Option<NaiveDate>,
    /// Days from `date` until `release_date`
    pub days_until_release: i64,
    /// Candidates looked at
    pub considered: usize,
    /// Not a nag day for the candidate's priority
    pub skipped_cadence: usize,
    /// Filtered out by allow/deny lists
    pub out_of_scope: usize,
    /// Assignee is not an organization member
    pub not_member: usize,
    /// Escalation contact could not be resolved
    pub unresolved: usize,
    /// Items recorded in the batch
    pub queued: usize,
    /// Messages rendered
    pub prepared: Vec<PreparedMessage>,
    /// Messages handed to the mailer
    pub sent: usize,
}

/// Everything a run needs from the outside
#[derive(Clone, Copy)]
pub struct NagRun<'a> {
    /// Org directory
    pub directory: &'a dyn Directory,
    /// Release calendar
    pub calendar: &'a dyn ReleaseCalendar,
    /// Template renderer
    pub renderer: &'a dyn TemplateRenderer,
    /// Mail transport
    pub mailer: &'a dyn Mailer,
    /// Rendering and scoping settings
    pub policy: &'a NagPolicy,
    /// Sender and copy-list defaults
    pub settings: &'a DeliverySettings,
    /// Reference date for all day counts
    pub today: NaiveDate,
}

impl std::fmt::Debug for NagRun<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NagRun")
            .field("policy", self.policy)
            .field("settings", self.settings)
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}

impl NagRun<'_> {
    /// Process `candidates` and deliver the resulting messages
    pub fn execute(
        &self,
        candidates: &[Candidate],
        title: &str,
        dryrun: bool,
    ) -> Result<RunReport, NagError> {
        let release = self.calendar.next_release_date(self.today)?;
        let days = (release - self.today).num_days();
        let weekday = self.today.weekday();
        info!("{} day(s) until the {release} release ({weekday})", days);

        let mut report = RunReport {
            date: Some(self.today),
            release_date: Some(release),
            days_until_release: days,
            ..RunReport::default()
        };

        let mut aggregator = ReminderAggregator::new(self.directory, days);
        for candidate in candidates {
            report.considered += 1;

            if !should_nag_today(candidate.priority, days, weekday) {
                debug!("{}: not a nag day for {} priority", candidate.item.id, candidate.priority);
                report.skipped_cadence += 1;
                continue;
            }

            if !self.policy.eligibility.admits(self.directory, &candidate.assignee) {
                debug!("{}: {} is out of scope", candidate.item.id, candidate.assignee);
                report.out_of_scope += 1;
                continue;
            }

            match aggregator.add(&candidate.assignee, candidate.item.clone(), candidate.priority) {
                Ok(true) => report.queued += 1,
                Ok(false) => report.not_member += 1,
                Err(e) => {
                    warn!("{}: skipping {}: {e}", candidate.item.id, candidate.assignee);
                    report.unresolved += 1;
                },
            }
        }

        if !self.settings.send {
            info!("sending disabled, {} item(s) not rendered", report.queued);
            return Ok(report);
        }

        report.prepared = aggregator.prepare_batches(
            self.renderer,
            self.policy.template.as_deref(),
            self.today,
            &self.policy.extra,
        )?;

        report.sent =
            send_all(&report.prepared, self.settings, self.renderer, self.mailer, title, dryrun)?;

        Ok(report)
    }
}
