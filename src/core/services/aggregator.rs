//! Reminder aggregator
//!
//! Collects reminder items for one run under each person's escalation
//! target, then renders one message body per target.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;

use super::escalation::resolve_escalation_contact;
use crate::core::error::{ResolutionError, TemplateError};
use crate::core::models::{Priority, PreparedMessage, ReminderBatch, ReminderItem};
use crate::core::ports::{Directory, NagContext, TemplateRenderer};

/// Accumulates reminders for a single run
///
/// A fresh aggregator is created per run; nothing is persisted.
#[derive(Debug)]
pub struct ReminderAggregator<'a, D: Directory + ?Sized> {
    directory: &'a D,
    days: i64,
    batch: ReminderBatch,
}

impl<'a, D: Directory + ?Sized> ReminderAggregator<'a, D> {
    /// Create an empty aggregator for a run `days` before the release
    #[must_use]
    pub fn new(directory: &'a D, days: i64) -> Self {
        Self {
            directory,
            days,
            batch: ReminderBatch::new(),
        }
    }

    /// Reminders recorded so far
    #[must_use]
    pub const fn batch(&self) -> &ReminderBatch {
        &self.batch
    }

    /// Record a reminder about `person`
    ///
    /// Returns `Ok(false)` without touching the batch when `person` is not an
    /// organization member (external contributors are never escalated).
    /// A contact that cannot be resolved is returned as an error, also
    /// leaving the batch untouched.
    pub fn add(
        &mut self,
        person: &str,
        item: ReminderItem,
        priority: Priority,
    ) -> Result<bool, ResolutionError> {
        if !self.directory.is_org_member(person) {
            debug!("{person} is not an org member, skipping");
            return Ok(false);
        }

        let target = resolve_escalation_contact(self.directory, person, priority, self.days)?;
        let person = self.directory.canonical_email(person);

        debug!("queued {} for {person} under {target}", item.id);
        self.batch.push(&target, &person, item);
        Ok(true)
    }

    /// Render one message per escalation target
    ///
    /// Produces nothing when no template is configured or nothing was
    /// recorded. Recipients are sorted by email and their items concatenated
    /// in that order.
    pub fn prepare_batches<R: TemplateRenderer + ?Sized>(
        &self,
        renderer: &R,
        template: Option<&str>,
        date: NaiveDate,
        extra: &BTreeMap<String, String>,
    ) -> Result<Vec<PreparedMessage>, TemplateError> {
        let Some(template) = template.filter(|t| !t.is_empty()) else {
            return Ok(Vec::new());
        };
        if self.batch.is_empty() {
            return Ok(Vec::new());
        }

        let mut messages = Vec::new();
        for (target, persons) in self.batch.iter() {
            // BTreeMap keys are already in ascending order
            let recipients: Vec<String> = persons.keys().cloned().collect();
            let data: Vec<ReminderItem> = persons.values().flatten().cloned().collect();

            let context = NagContext {
                date,
                extra: extra.clone(),
                data,
            };
            let body = renderer.render_nag(template, &context)?;

            messages.push(PreparedMessage {
                target: target.clone(),
                recipients,
                body,
            });
        }

        Ok(messages)
    }
}
