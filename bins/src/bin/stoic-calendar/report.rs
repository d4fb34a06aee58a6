// SPDX-License-Identifier: MIT

//!
//! What the command line prints
//!

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use stoic_calendar_core::{DateRange, HasIdAndName, Name, Timeline, TimelineId, TimelineStats};
use stoic_calendar_renderer::{DotPosition, GridLayout, Offset};

/// A date range's stats as seen from a given day
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub today: NaiveDate,
    pub stats: TimelineStats,
}

impl StatsReport {
    pub fn new(range: &DateRange, today: NaiveDate) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
            today,
            stats: range.stats(today),
        }
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} to {} (today {})", self.start, self.end, self.today)?;
        writeln!(f, "Days passed:    {}", self.stats.days_passed)?;
        writeln!(f, "Days remaining: {}", self.stats.days_remaining)?;
        writeln!(f, "Total days:     {}", self.stats.total_days)?;
        write!(f, "Progress:       {}%", self.stats.progress_percentage)
    }
}

/// A stored timeline's stats
#[derive(Debug, Clone, Serialize)]
pub struct TimelineReport {
    pub id: TimelineId,
    pub name: Name,
    #[serde(flatten)]
    pub report: StatsReport,
}

impl TimelineReport {
    pub fn new(timeline: &Timeline, range: &DateRange, today: NaiveDate) -> Self {
        Self {
            id: timeline.id(),
            name: timeline.name().to_owned(),
            report: StatsReport::new(range, today),
        }
    }
}

impl fmt::Display for TimelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.report.stats;
        write!(
            f,
            "{}: {} to {}, {}/{} days, {}%",
            self.name,
            self.report.start,
            self.report.end,
            stats.days_passed,
            stats.total_days,
            stats.progress_percentage
        )
    }
}

/// A grid layout, where to put it in its container and (optionally) where
/// every dot goes
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub layout: GridLayout,
    pub offset: Offset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<DotPosition>>,
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = &self.layout;
        writeln!(f, "Columns x rows: {} x {}", layout.columns, layout.rows)?;
        writeln!(f, "Dot size:       {}", layout.dot_size)?;
        writeln!(f, "Spacing:        {} x {}", layout.spacing_x, layout.spacing_y)?;
        writeln!(f, "Grid size:      {} x {}", layout.grid_width, layout.grid_height)?;
        write!(f, "Offset:         {} x {}", self.offset.x, self.offset.y)?;
        if let Some(positions) = &self.positions {
            for position in positions {
                write!(f, "\n{}: {}, {}", position.index, position.x, position.y)?;
            }
        }
        Ok(())
    }
}
