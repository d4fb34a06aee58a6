// SPDX-License-Identifier: MIT

//!
//! Dot states
//!

use serde::Serialize;
use stoic_calendar_core::{TimelinePhase, TimelineStats};

/// How a single dot (one day) should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DotState {
    /// A day that has already gone
    Passed,

    /// Today, while the timeline is in progress
    Today,

    /// A day still to come
    Remaining,
}

/// The state of dot `index` (0 is the first day) for a timeline with the
/// given stats
pub fn dot_state(index: u32, stats: &TimelineStats) -> DotState {
    if index >= stats.days_passed {
        DotState::Remaining
    } else if index + 1 == stats.days_passed && stats.phase == TimelinePhase::InProgress {
        DotState::Today
    } else {
        DotState::Passed
    }
}

/// The state of every dot of a timeline, in day order
pub fn dot_states(stats: &TimelineStats) -> Vec<DotState> {
    (0..stats.total_days)
        .map(|index| dot_state(index, stats))
        .collect()
}
