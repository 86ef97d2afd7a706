//! Cadence policy - is today a nag day?
//!
//! Reminders get more frequent as the release approaches: weekly on
//! Thursdays while the release is far away, twice a week (Monday and
//! Thursday) in the middle band, and daily at the end. High priority issues
//! enter each band earlier than normal ones.

use chrono::Weekday;

use crate::core::models::Priority;

/// Days-until-release at or above which high priority nags only on Thursday
const HIGH_WEEKLY_FROM: i64 = 20;
/// Days-until-release below which high priority nags every day
const HIGH_DAILY_BELOW: i64 = 5;
/// Days-until-release at or above which normal priority nags only on Thursday
const NORMAL_WEEKLY_FROM: i64 = 15;
/// Days-until-release below which normal priority nags every day
const NORMAL_DAILY_BELOW: i64 = 3;

/// Decide whether reminders for `priority` go out on `weekday`
///
/// `days` is the number of days until the next release and may be negative
/// once the release date has passed; negative values fall in the daily band.
/// Unrecognized priorities ([`Priority::Default`]) nag on Mondays only.
#[must_use]
pub fn should_nag_today(priority: Priority, days: i64, weekday: Weekday) -> bool {
    let (weekly_from, daily_below) = match priority {
        Priority::High => (HIGH_WEEKLY_FROM, HIGH_DAILY_BELOW),
        Priority::Normal => (NORMAL_WEEKLY_FROM, NORMAL_DAILY_BELOW),
        // Not reachable from tracking-derived priorities; kept for explicit labels.
        Priority::Default => return weekday == Weekday::Mon,
    };

    if days >= weekly_from {
        weekday == Weekday::Thu
    } else if days >= daily_below {
        matches!(weekday, Weekday::Mon | Weekday::Thu)
    } else {
        true
    }
}
