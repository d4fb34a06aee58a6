// SPDX-License-Identifier: MIT

//!
//! The `stoic-calendar-renderer` engine
//!

mod columns;
mod consts;
mod dots;
mod grid_layout;
mod helpers;
mod layout_params;
mod point;

pub(crate) use helpers::*;

pub use columns::*;
pub use consts::*;
pub use dots::*;
pub use grid_layout::*;
pub use layout_params::*;
pub use point::*;

use log::debug;
use stoic_calendar_core::TimelineStats;

/// Holds the layout parameters and lays out grids with them.  Calculations
/// are pure, so a single engine can be shared and called from anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridEngine {
    /// Dot size limits and spacing ratios
    params: GridLayoutParams,
}

impl GridEngine {
    /// Create a new engine with the given layout parameters
    pub fn new(params: GridLayoutParams) -> Self {
        Self { params }
    }

    /// Get the layout parameters
    pub fn params(&self) -> GridLayoutParams {
        self.params
    }

    /// Replace the layout parameters
    pub fn set_params(&mut self, params: GridLayoutParams) {
        debug!("engine set params {params:?}");
        self.params = params;
    }

    /// Lay out `total_dots` dots in a container of the given size
    pub fn layout(&self, total_dots: u32, container: Size) -> GridLayout {
        GridLayout::calculate(total_dots, container, &self.params)
    }

    /// Lay out one dot per day of a timeline
    pub fn layout_for_stats(&self, stats: &TimelineStats, container: Size) -> GridLayout {
        self.layout(stats.total_days, container)
    }
}
