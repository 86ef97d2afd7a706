//! Inspect cadence and escalation for a priority

use std::path::Path;

use chrono::{Datelike, Local, NaiveDate, Weekday};

use relnag::config::Config;
use relnag::core::models::Priority;
use relnag::core::ports::ReleaseCalendar;
use relnag::core::services::{escalation_level, should_nag_today};
use relnag::output::{OutputMode, PolicyOutput};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Show whether reminders go out and who they escalate to
///
/// With `--days`, no calendar is needed. Otherwise the days until release
/// are computed from the configured schedule.
pub fn policy(
    config_path: &Path,
    priority: Priority,
    days: Option<i64>,
    date: Option<NaiveDate>,
    weekday: Option<Weekday>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let today = date.unwrap_or_else(|| Local::now().date_naive());

    let days = match days {
        Some(days) => days,
        None => Config::load(config_path)?.calendar().days_until_release(today)?,
    };
    let weekday = weekday.unwrap_or_else(|| today.weekday());

    let output = PolicyOutput {
        priority,
        days_until_release: days,
        date: today,
        weekday: weekday.to_string(),
        nag_today: should_nag_today(priority, days, weekday),
        nag_days: WEEK
            .into_iter()
            .filter(|w| should_nag_today(priority, days, *w))
            .map(|w| w.to_string())
            .collect(),
        escalation: escalation_level(priority, days),
    };
    output.render(mode);

    Ok(())
}
