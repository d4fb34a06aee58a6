// SPDX-License-Identifier: MIT

//!
//! Timeline statistics (days passed, days remaining, progress)
//!
//! These functions assume `start <= end`.  Validation happens when a
//! [`crate::DateRange`] is built, not here.
//!

use crate::date::next_day;
use crate::days_between;
use chrono::NaiveDate;
use log::trace;
use serde::{Deserialize, Serialize};

/// Where "today" sits relative to a timeline's range
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimelinePhase {
    /// Today is before the first day
    NotStarted,

    /// Today is one of the range's days (including the last one)
    InProgress,

    /// Today is after the last day
    Finished,
}

impl TimelinePhase {
    /// Where `today` sits relative to `start..=end`
    pub fn of(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if today < start {
            TimelinePhase::NotStarted
        } else if today > end {
            TimelinePhase::Finished
        } else {
            TimelinePhase::InProgress
        }
    }
}

/// The number of days from `start` up to and including `today`, capped at
/// the length of the range.  Zero before the range starts.
pub fn days_passed(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> i64 {
    if today < start {
        0
    } else if today > end {
        days_between(start, end)
    } else {
        days_between(start, today)
    }
}

/// The number of days after `today` up to and including `end`.  Today itself
/// is never counted as remaining once the range has started.
pub fn days_remaining(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> i64 {
    if today < start {
        return days_between(start, end);
    }
    if today >= end {
        return 0;
    }
    let tomorrow = next_day(today);
    if tomorrow > end {
        0
    } else {
        days_between(tomorrow, end)
    }
}

/// `round(100 * days_passed / total_days)`, clamped to 0..=100.  Zero for a
/// degenerate range.
pub fn progress_percentage(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> u8 {
    let total_days = days_between(start, end);
    if total_days <= 0 {
        return 0;
    }
    let passed = days_passed(start, end, today);
    let percentage = (100.0 * passed as f64 / total_days as f64).round();
    percentage.clamp(0.0, 100.0) as u8
}

/// Convert a day count to the unsigned type used in [`TimelineStats`]
fn to_count(days: i64) -> u32 {
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// The day statistics for a date range as seen from a given day.  Never
/// stored; recalculate whenever "today" changes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStats {
    /// Days up to and including today (0 before the start)
    pub days_passed: u32,

    /// Days after today up to and including the end
    pub days_remaining: u32,

    /// Days in the whole range
    pub total_days: u32,

    /// Share of the range that has passed, 0 to 100
    pub progress_percentage: u8,

    /// Where today sits relative to the range
    pub phase: TimelinePhase,
}

impl TimelineStats {
    /// Calculate the stats for `start..=end` as seen from `today`
    pub fn calculate(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        let stats = Self {
            days_passed: to_count(days_passed(start, end, today)),
            days_remaining: to_count(days_remaining(start, end, today)),
            total_days: to_count(days_between(start, end)),
            progress_percentage: progress_percentage(start, end, today),
            phase: TimelinePhase::of(start, end, today),
        };
        trace!("stats for {start}..={end} on {today}: {stats:?}");
        stats
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{end_of_month, end_of_year, start_of_month, start_of_year};
    use chrono::Days;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn before_during_after() {
        let start = day(2025, 1, 1);
        let end = day(2025, 1, 10);

        let before = TimelineStats::calculate(start, end, day(2024, 12, 25));
        assert_eq!(before.days_passed, 0);
        assert_eq!(before.days_remaining, 10);
        assert_eq!(before.total_days, 10);
        assert_eq!(before.progress_percentage, 0);
        assert_eq!(before.phase, TimelinePhase::NotStarted);

        let first_day = TimelineStats::calculate(start, end, start);
        assert_eq!(first_day.days_passed, 1);
        assert_eq!(first_day.days_remaining, 9);
        assert_eq!(first_day.progress_percentage, 10);
        assert_eq!(first_day.phase, TimelinePhase::InProgress);

        let last_day = TimelineStats::calculate(start, end, end);
        assert_eq!(last_day.days_passed, 10);
        assert_eq!(last_day.days_remaining, 0);
        assert_eq!(last_day.progress_percentage, 100);
        assert_eq!(last_day.phase, TimelinePhase::InProgress);

        let after = TimelineStats::calculate(start, end, day(2025, 3, 1));
        assert_eq!(after.days_passed, 10);
        assert_eq!(after.days_remaining, 0);
        assert_eq!(after.progress_percentage, 100);
        assert_eq!(after.phase, TimelinePhase::Finished);
    }

    #[test]
    fn single_day_range() {
        let today = day(2025, 6, 15);
        let stats = TimelineStats::calculate(today, today, today);
        assert_eq!(stats.total_days, 1);
        assert_eq!(stats.days_passed, 1);
        assert_eq!(stats.days_remaining, 0);
        assert_eq!(stats.progress_percentage, 100);

        let day_before = TimelineStats::calculate(today, today, day(2025, 6, 14));
        assert_eq!(day_before.days_remaining, 1);
        assert_eq!(day_before.progress_percentage, 0);
    }

    #[test]
    fn degenerate_range_does_not_panic() {
        let start = day(2025, 6, 15);
        let end = day(2025, 6, 1);
        assert_eq!(progress_percentage(start, end, start), 0);
        let stats = TimelineStats::calculate(start, end, start);
        assert_eq!(stats.total_days, 0);
    }

    #[test]
    fn rounding() {
        // 1 of 3 days = 33.3%, 2 of 3 days = 66.7%
        let start = day(2025, 1, 1);
        let end = day(2025, 1, 3);
        assert_eq!(progress_percentage(start, end, start), 33);
        assert_eq!(progress_percentage(start, end, day(2025, 1, 2)), 67);

        // 1 of 8 days = 12.5% rounds up
        assert_eq!(progress_percentage(start, day(2025, 1, 8), start), 13);
    }

    #[test]
    fn year_totals() {
        let today = day(2024, 7, 1);
        let leap = TimelineStats::calculate(
            start_of_year(2024).unwrap(),
            end_of_year(2024).unwrap(),
            today,
        );
        assert_eq!(leap.total_days, 366);
        let common = TimelineStats::calculate(
            start_of_year(2025).unwrap(),
            end_of_year(2025).unwrap(),
            today,
        );
        assert_eq!(common.total_days, 365);

        // 1st July is the 183rd day of a leap year
        assert_eq!(leap.days_passed, 183);
        assert_eq!(leap.days_remaining, 183);
    }

    #[test]
    fn february_totals() {
        let today = day(2024, 2, 29);
        let stats = TimelineStats::calculate(
            start_of_month(2024, 2).unwrap(),
            end_of_month(2024, 2).unwrap(),
            today,
        );
        assert_eq!(stats.total_days, 29);
        assert_eq!(stats.days_passed, 29);
        assert_eq!(stats.days_remaining, 0);
    }

    #[test]
    fn passed_and_remaining_never_double_count() {
        let ranges = [
            (day(2024, 1, 1), day(2024, 12, 31)),
            (day(2025, 2, 1), day(2025, 2, 28)),
            (day(2025, 3, 3), day(2025, 3, 9)),
            (day(2025, 5, 5), day(2025, 5, 5)),
        ];
        for (start, end) in ranges {
            let total = days_between(start, end);
            let mut previous_percentage = 0;
            let mut today = start - Days::new(40);
            while today <= end + Days::new(40) {
                let passed = days_passed(start, end, today);
                let remaining = days_remaining(start, end, today);
                assert!(passed >= 0 && remaining >= 0);
                assert!(passed + remaining <= total, "{start}..={end} on {today}");
                if start <= today && today <= end {
                    assert_eq!(passed + remaining, total, "{start}..={end} on {today}");
                }

                let percentage = progress_percentage(start, end, today);
                assert!(percentage <= 100);
                assert!(percentage >= previous_percentage);
                previous_percentage = percentage;

                today = next_day(today);
            }
        }
    }

    #[test]
    fn serializes_camel_case() {
        let stats = TimelineStats::calculate(day(2025, 1, 1), day(2025, 1, 4), day(2025, 1, 2));
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["daysPassed"], 2);
        assert_eq!(json["daysRemaining"], 2);
        assert_eq!(json["totalDays"], 4);
        assert_eq!(json["progressPercentage"], 50);
        assert_eq!(json["phase"], "in_progress");
    }
}
