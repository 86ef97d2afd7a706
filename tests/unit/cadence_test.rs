//! Parameterized tests for the cadence policy
//!
//! These tests use test-case to walk each priority through its bands.

use chrono::Weekday;
use relnag::core::models::Priority;
use relnag::core::services::should_nag_today;
use test_case::test_case;

// =============================================================================
// High priority
// =============================================================================

#[test_case(30, Weekday::Thu, true ; "far out thursday")]
#[test_case(30, Weekday::Mon, false ; "far out monday")]
#[test_case(20, Weekday::Thu, true ; "weekly band lower edge thursday")]
#[test_case(20, Weekday::Mon, false ; "weekly band lower edge monday")]
#[test_case(19, Weekday::Mon, true ; "twice weekly band monday")]
#[test_case(12, Weekday::Wed, false ; "twice weekly band wednesday")]
#[test_case(12, Weekday::Thu, true ; "twice weekly band thursday")]
#[test_case(5, Weekday::Tue, false ; "twice weekly band lower edge tuesday")]
#[test_case(4, Weekday::Tue, true ; "daily band tuesday")]
#[test_case(0, Weekday::Sun, true ; "release day sunday")]
#[test_case(-2, Weekday::Tue, true ; "release passed")]
fn test_high_priority(days: i64, weekday: Weekday, expected: bool) {
    assert_eq!(should_nag_today(Priority::High, days, weekday), expected);
}

// =============================================================================
// Normal priority
// =============================================================================

#[test_case(15, Weekday::Thu, true ; "weekly band lower edge thursday")]
#[test_case(15, Weekday::Mon, false ; "weekly band lower edge monday")]
#[test_case(14, Weekday::Mon, true ; "twice weekly band monday")]
#[test_case(14, Weekday::Fri, false ; "twice weekly band friday")]
#[test_case(3, Weekday::Sat, false ; "twice weekly band lower edge saturday")]
#[test_case(2, Weekday::Sat, true ; "daily band saturday")]
#[test_case(-10, Weekday::Wed, true ; "long past release")]
fn test_normal_priority(days: i64, weekday: Weekday, expected: bool) {
    assert_eq!(should_nag_today(Priority::Normal, days, weekday), expected);
}

// =============================================================================
// Default priority
// =============================================================================

#[test_case(40, Weekday::Mon, true ; "far out monday")]
#[test_case(40, Weekday::Thu, false ; "far out thursday")]
#[test_case(1, Weekday::Mon, true ; "close monday")]
#[test_case(1, Weekday::Tue, false ; "close tuesday")]
fn test_default_priority(days: i64, weekday: Weekday, expected: bool) {
    assert_eq!(should_nag_today(Priority::Default, days, weekday), expected);
}

#[test]
fn test_high_priority_enters_bands_before_normal() {
    // 17 days out: high is twice weekly, normal still weekly
    assert!(should_nag_today(Priority::High, 17, Weekday::Mon));
    assert!(!should_nag_today(Priority::Normal, 17, Weekday::Mon));

    // 4 days out: high is daily, normal still twice weekly
    assert!(should_nag_today(Priority::High, 4, Weekday::Wed));
    assert!(!should_nag_today(Priority::Normal, 4, Weekday::Wed));
}
