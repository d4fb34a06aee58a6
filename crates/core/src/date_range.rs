// SPDX-License-Identifier: MIT

//!
//! Validated date ranges
//!

use crate::{TimelineStats, days_between};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`DateRange`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// The range would end before it starts
    #[error("Start `{start}` is after end `{end}`")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

/// An inclusive range of calendar days.  The start is never after the end,
/// and a range that starts and ends on the same day is one day long.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a new [`DateRange`] if `start <= end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            Err(DateRangeError::StartAfterEnd { start, end })
        } else {
            Ok(Self { start, end })
        }
    }

    /// The first day of the range
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the range
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive number of days in the range (always at least 1)
    pub fn total_days(&self) -> i64 {
        days_between(self.start, self.end)
    }

    /// Whether `day` falls within the range
    pub fn contains(&self, day: NaiveDate) -> bool {
        (self.start..=self.end).contains(&day)
    }

    /// Calculate the range's stats as seen from `today`
    pub fn stats(&self, today: NaiveDate) -> TimelineStats {
        TimelineStats::calculate(self.start, self.end, today)
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDateRange::deserialize(deserializer)?;
        DateRange::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
