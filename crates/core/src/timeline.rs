// SPDX-License-Identifier: MIT

//!
//! The timeline record and its classification
//!

use crate::{
    DateError, DateRange, DateRangeError, HasIdAndName, Name, TimelineId,
    TimelineStats, end_of_iso_week, end_of_month, end_of_year, start_of_iso_week,
    start_of_month, start_of_year,
};
use crate::date::validate_day;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can arise when building a timeline's date range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("Invalid date: {0}")]
    Date(#[from] DateError),

    #[error("Invalid date range: {0}")]
    Range(#[from] DateRangeError),
}

/// How a timeline's range is chosen
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineKind {
    /// A whole calendar year
    Year { year: i32 },

    /// A whole calendar month (1 to 12)
    Month { year: i32, month: u32 },

    /// The ISO week (Monday to Sunday) containing today
    CurrentWeek,

    /// Any range chosen by the user
    Custom { start: NaiveDate, end: NaiveDate },
}

impl TimelineKind {
    /// Build the canonical range for this kind.  `today` is only used by
    /// [`TimelineKind::CurrentWeek`].
    pub fn date_range(&self, today: NaiveDate) -> Result<DateRange, TimelineError> {
        let (start, end) = match *self {
            TimelineKind::Year { year } => (start_of_year(year)?, end_of_year(year)?),
            TimelineKind::Month { year, month } => {
                (start_of_month(year, month)?, end_of_month(year, month)?)
            }
            TimelineKind::CurrentWeek => (start_of_iso_week(today)?, end_of_iso_week(today)?),
            TimelineKind::Custom { start, end } => (validate_day(start)?, validate_day(end)?),
        };
        Ok(DateRange::new(start, end)?)
    }
}

/// A named date range that progress is tracked against
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    /// The timeline's ID
    id: TimelineId,

    /// The timeline's name
    name: Name,

    /// How the timeline's range is chosen
    kind: TimelineKind,
}

impl Timeline {
    /// Create a new timeline with a fresh ID.  The kind is checked by building
    /// its range for `today`.
    pub fn new(name: Name, kind: TimelineKind, today: NaiveDate) -> Result<Self, TimelineError> {
        kind.date_range(today)?;
        Ok(Self {
            id: TimelineId::new(),
            name,
            kind,
        })
    }

    /// Get the timeline's kind
    pub fn kind(&self) -> TimelineKind {
        self.kind
    }

    /// Build the timeline's range as seen from `today`
    pub fn date_range(&self, today: NaiveDate) -> Result<DateRange, TimelineError> {
        let range = self.kind.date_range(today)?;
        debug!(
            "timeline {} ({}) covers {}..={}",
            self.name,
            self.id,
            range.start(),
            range.end()
        );
        Ok(range)
    }

    /// Calculate the timeline's stats as seen from `today`
    pub fn stats(&self, today: NaiveDate) -> Result<TimelineStats, TimelineError> {
        Ok(self.date_range(today)?.stats(today))
    }
}

impl HasIdAndName for Timeline {
    fn id(&self) -> TimelineId {
        self.id
    }
    fn set_id(&mut self, id: TimelineId) {
        self.id = id
    }
    fn name(&self) -> &Name {
        &self.name
    }
    fn set_name(&mut self, name: Name) {
        self.name = name
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::TimelinePhase;
    use chrono::Datelike;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn name(name: &str) -> Name {
        Name::from(name).unwrap()
    }

    #[test]
    fn canonical_ranges() {
        let today = day(2026, 10, 16);

        let year = TimelineKind::Year { year: 2024 }.date_range(today).unwrap();
        assert_eq!((year.start(), year.end()), (day(2024, 1, 1), day(2024, 12, 31)));

        let month = TimelineKind::Month { year: 2026, month: 2 }.date_range(today).unwrap();
        assert_eq!((month.start(), month.end()), (day(2026, 2, 1), day(2026, 2, 28)));

        let week = TimelineKind::CurrentWeek.date_range(today).unwrap();
        assert_eq!((week.start(), week.end()), (day(2026, 10, 12), day(2026, 10, 18)));
        assert_eq!(week.total_days(), 7);

        let custom = TimelineKind::Custom { start: day(2026, 1, 1), end: day(2026, 1, 1) }
            .date_range(today)
            .unwrap();
        assert_eq!(custom.total_days(), 1);
    }

    #[test]
    fn invalid_kinds_are_rejected() {
        let today = day(2026, 10, 16);
        assert_eq!(
            TimelineKind::Month { year: 2026, month: 13 }.date_range(today),
            Err(TimelineError::Date(DateError::InvalidMonth(13)))
        );
        assert_eq!(
            TimelineKind::Year { year: -4 }.date_range(today),
            Err(TimelineError::Date(DateError::InvalidYear(-4)))
        );
        let backwards = TimelineKind::Custom { start: day(2026, 2, 1), end: day(2026, 1, 1) };
        assert!(matches!(backwards.date_range(today), Err(TimelineError::Range(_))));
        assert!(Timeline::new(name("Backwards"), backwards, today).is_err());

        // Days outside the supported years
        let ancient = TimelineKind::Custom { start: NaiveDate::MIN, end: day(2026, 1, 1) };
        assert_eq!(
            ancient.date_range(today),
            Err(TimelineError::Date(DateError::InvalidYear(NaiveDate::MIN.year())))
        );
        assert_eq!(
            TimelineKind::CurrentWeek.date_range(NaiveDate::MAX),
            Err(TimelineError::Date(DateError::InvalidYear(NaiveDate::MAX.year())))
        );
    }

    #[test]
    fn stats() {
        let today = day(2026, 10, 16);
        let timeline =
            Timeline::new(name("2026"), TimelineKind::Year { year: 2026 }, today).unwrap();
        let stats = timeline.stats(today).unwrap();
        assert_eq!(stats.total_days, 365);
        assert_eq!(stats.days_passed, 289);
        assert_eq!(stats.days_remaining, 76);
        assert_eq!(stats.progress_percentage, 79);
        assert_eq!(stats.phase, TimelinePhase::InProgress);
    }

    #[test]
    fn id_and_name() {
        let today = day(2026, 10, 16);
        let mut timeline = Timeline::new(name("Week"), TimelineKind::CurrentWeek, today).unwrap();
        let id = TimelineId::new();
        timeline.set_id(id);
        timeline.set_name(name("This week"));
        assert_eq!(timeline.id(), id);
        assert_eq!(timeline.name().as_str(), "This week");
    }

    #[test]
    fn json() {
        let json = r#"[
            {
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "name": "Leap year",
                "kind": { "type": "year", "year": 2024 }
            },
            {
                "id": "550e8400-e29b-41d4-a716-446655440001",
                "name": "Holiday",
                "kind": { "type": "custom", "start": "2026-08-01", "end": "2026-08-14" }
            },
            {
                "id": "550e8400-e29b-41d4-a716-446655440002",
                "name": "This week",
                "kind": { "type": "current_week" }
            }
        ]"#;
        let timelines: Vec<Timeline> = serde_json::from_str(json).unwrap();
        assert_eq!(timelines.len(), 3);
        assert_eq!(timelines[0].kind(), TimelineKind::Year { year: 2024 });
        assert_eq!(timelines[1].stats(day(2026, 8, 7)).unwrap().days_passed, 7);
        assert_eq!(timelines[2].kind(), TimelineKind::CurrentWeek);

        // Names must not be blank
        let blank = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","name":" ","kind":{"type":"current_week"}}"#;
        assert!(serde_json::from_str::<Timeline>(blank).is_err());
    }
}
