//! Reminder batch
//!
//! Pending reminders for one run, grouped first by escalation target and then
//! by the person the reminder is about.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ReminderItem;

/// Items owed by each person, keyed by person email
pub type PersonItems = BTreeMap<String, Vec<ReminderItem>>;

/// Two-level map: escalation target -> person -> items
///
/// Persons iterate in lexicographic email order. Items for a person keep the
/// order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReminderBatch {
    targets: BTreeMap<String, PersonItems>,
}

impl ReminderBatch {
    /// Create an empty batch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the item list for `(target, person)`, creating both levels on first use
    pub fn entry(&mut self, target: &str, person: &str) -> &mut Vec<ReminderItem> {
        self.targets
            .entry(target.to_string())
            .or_default()
            .entry(person.to_string())
            .or_default()
    }

    /// Append an item under `(target, person)`
    pub fn push(&mut self, target: &str, person: &str, item: ReminderItem) {
        self.entry(target, person).push(item);
    }

    /// Items recorded for `(target, person)`
    #[must_use]
    pub fn items(&self, target: &str, person: &str) -> Option<&[ReminderItem]> {
        self.targets.get(target)?.get(person).map(Vec::as_slice)
    }

    /// Persons grouped under a target
    #[must_use]
    pub fn persons(&self, target: &str) -> Option<&PersonItems> {
        self.targets.get(target)
    }

    /// Iterate over `(target, persons)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PersonItems)> {
        self.targets.iter()
    }

    /// Escalation targets present in the batch
    pub fn targets(&self) -> impl Iterator<Item = &String> {
        self.targets.keys()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Total number of items across all targets
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.targets.values().flat_map(BTreeMap::values).map(Vec::len).sum()
    }
}
