//! Release calendar backed by a configured schedule

use chrono::NaiveDate;

use crate::core::error::CalendarError;
use crate::core::ports::ReleaseCalendar;

/// A fixed list of release dates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleCalendar {
    releases: Vec<NaiveDate>,
}

impl ScheduleCalendar {
    /// Build from release dates in any order
    #[must_use]
    pub fn new(mut releases: Vec<NaiveDate>) -> Self {
        releases.sort_unstable();
        releases.dedup();
        Self { releases }
    }

    /// Known release dates, ascending
    #[must_use]
    pub fn releases(&self) -> &[NaiveDate] {
        &self.releases
    }
}

impl ReleaseCalendar for ScheduleCalendar {
    fn next_release_date(&self, reference: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.releases
            .iter()
            .copied()
            .find(|date| *date >= reference)
            .ok_or(CalendarError::NoUpcomingRelease(reference))
    }
}
