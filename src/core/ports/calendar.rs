//! Release calendar port

use chrono::NaiveDate;

use crate::core::error::CalendarError;

/// Source of upcoming release dates
pub trait ReleaseCalendar: Send + Sync {
    /// Date of the next release on or after `reference`
    fn next_release_date(&self, reference: NaiveDate) -> Result<NaiveDate, CalendarError>;

    /// Whole days from `today` until the next release
    ///
    /// Negative when the computed release is already behind `today`.
    fn days_until_release(&self, today: NaiveDate) -> Result<i64, CalendarError> {
        let release = self.next_release_date(today)?;
        Ok((release - today).num_days())
    }
}
