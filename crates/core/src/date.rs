// SPDX-License-Identifier: MIT

//!
//! Calendar day arithmetic and boundaries
//!
//! All functions here work on [`NaiveDate`]s, i.e. local wall-clock calendar
//! days.  Instants are floored to their local day with [`day_of`] before any
//! counting is done.
//!

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, TimeZone};
use log::trace;
use thiserror::Error;

/// The minimum year a timeline can be built for
pub const MIN_YEAR: i32 = 1;

/// The maximum year a timeline can be built for
pub const MAX_YEAR: i32 = 9999;

/// Errors that can arise when building or parsing calendar days
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(u32),

    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i32),

    /// The text is not an ISO-8601 date or date-time
    #[error("`{0}` is not an ISO-8601 date or date-time")]
    Unparseable(String),
}

/// Floor an instant to the calendar day it falls on in its own timezone
pub fn day_of<Tz: TimeZone>(datetime: &DateTime<Tz>) -> NaiveDate {
    datetime.date_naive()
}

/// Parse an ISO-8601 date (`2025-01-31`), naive date-time
/// (`2025-01-31T18:30:00` or `2025-01-31 18:30:00`) or RFC 3339 timestamp (`2025-01-31T18:30:00Z`)
/// into the calendar day it falls on in `tz`.
///
/// Naive date-times are taken as wall-clock time already, so only
/// timestamps carrying an offset are converted.  The time of day is always
/// discarded.
pub fn parse_day_in<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<NaiveDate, DateError> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Ok(day_of(&datetime.with_timezone(tz)));
    }
    Err(DateError::Unparseable(text.to_string()))
}

/// [`parse_day_in`] using the host's local timezone
pub fn parse_local_day(text: &str) -> Result<NaiveDate, DateError> {
    parse_day_in(text, &Local)
}

/// Inclusive number of calendar days from `a` to `b`.
///
/// `a == b` is 1 day, consecutive days are 2.  The difference is taken
/// between day ordinals, so the result is unaffected by daylight-saving
/// transitions.  If `a` is after `b` the result is zero or negative.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    i64::from(b.num_days_from_ce()) - i64::from(a.num_days_from_ce()) + 1
}

/// The day after `day`
pub(crate) fn next_day(day: NaiveDate) -> NaiveDate {
    day + Days::new(1)
}

fn validate_year(year: i32) -> Result<i32, DateError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(DateError::InvalidYear(year))
    }
}

/// Check that `day` falls in a year a timeline can be built for
pub(crate) fn validate_day(day: NaiveDate) -> Result<NaiveDate, DateError> {
    validate_year(day.year())?;
    Ok(day)
}

fn validate_month(month: u32) -> Result<u32, DateError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(DateError::InvalidMonth(month))
    }
}

/// 1st January of `year`
pub fn start_of_year(year: i32) -> Result<NaiveDate, DateError> {
    start_of_month(year, 1)
}

/// 31st December of `year`
pub fn end_of_year(year: i32) -> Result<NaiveDate, DateError> {
    end_of_month(year, 12)
}

/// The 1st of `month` (1 to 12) in `year`
pub fn start_of_month(year: i32, month: u32) -> Result<NaiveDate, DateError> {
    let year = validate_year(year)?;
    let month = validate_month(month)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(DateError::InvalidYear(year))
}

/// The last day of `month` (1 to 12) in `year`
pub fn end_of_month(year: i32, month: u32) -> Result<NaiveDate, DateError> {
    let start = start_of_month(year, month)?;
    start
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .ok_or(DateError::InvalidYear(year))
}

/// How many days back the Monday of the ISO week is, given a weekday number
/// counted from Sunday (Sunday = 0, Monday = 1, ..., Saturday = 6).
///
/// Sunday is the last day of an ISO week, so it maps to 6.
pub fn days_since_monday(days_from_sunday: u32) -> u32 {
    match days_from_sunday % 7 {
        0 => 6,
        day => day - 1,
    }
}

/// The Monday of the ISO week containing `today`
pub fn start_of_iso_week(today: NaiveDate) -> Result<NaiveDate, DateError> {
    let today = validate_day(today)?;
    let back = days_since_monday(today.weekday().num_days_from_sunday());
    trace!("start_of_iso_week {today}: {back} days back");
    today
        .checked_sub_days(Days::new(u64::from(back)))
        .ok_or(DateError::InvalidYear(today.year()))
}

/// The Sunday of the ISO week containing `today`
pub fn end_of_iso_week(today: NaiveDate) -> Result<NaiveDate, DateError> {
    start_of_iso_week(today)?
        .checked_add_days(Days::new(6))
        .ok_or(DateError::InvalidYear(today.year()))
}
