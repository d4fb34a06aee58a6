// SPDX-License-Identifier: MIT

//!
//! Grid layout
//!

use super::{floor_px, span, span_in_dots};
use crate::{DotPosition, GridLayoutParams, Offset, Size, select_columns};
use log::{debug, trace};
use serde::Serialize;

/// Everything needed to draw a grid of dots.  All pixel values are whole
/// numbers.
///
/// An empty grid (no dots, or a container with no area) has every field set
/// to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub total_dots: u32,
    pub columns: u32,
    pub rows: u32,

    /// Dot diameter
    pub dot_size: f64,

    /// Gap between neighbouring columns
    pub spacing_x: f64,

    /// Gap between neighbouring rows
    pub spacing_y: f64,

    /// Width of the grid from the left edge of the first column to the right
    /// edge of the last
    pub grid_width: f64,

    /// Height of the grid from the top edge of the first row to the bottom
    /// edge of the last
    pub grid_height: f64,
}

impl GridLayout {
    /// Lay out `total_dots` dots so that they fill as much of `container` as
    /// possible without overflowing it.
    ///
    /// The dot size is a whole number of pixels clamped to the params'
    /// limits, and never smaller than one pixel.  If the minimum dot
    /// size is forced on a container too small to hold every dot the grid
    /// will overflow; with the default params this doesn't happen for up to
    /// 366 dots in containers of at least 50x50.
    pub fn calculate(total_dots: u32, container: Size, params: &GridLayoutParams) -> Self {
        // `!(x > 0.0)` also catches NaN
        if total_dots == 0 || !(container.x > 0.0) || !(container.y > 0.0) {
            trace!("empty layout for {total_dots} dots in {container:?}");
            return GridLayout::default();
        }

        let columns = select_columns(total_dots, container.x, container.y);
        let rows = total_dots.div_ceil(columns);

        // Largest dot that fits along both axes
        let width_in_dots = span_in_dots(columns, params.horizontal_spacing_ratio());
        let height_in_dots = span_in_dots(rows, params.vertical_spacing_ratio());
        let unclamped = (container.x / width_in_dots).min(container.y / height_in_dots);

        // Floor before clamping so that a fractional limit can't be undercut
        let (smallest, largest) = params.whole_pixel_dot_sizes();
        let dot_size = floor_px(unclamped).clamp(smallest, largest);
        let spacing_x = floor_px(dot_size * params.horizontal_spacing_ratio());
        let spacing_y = floor_px(dot_size * params.vertical_spacing_ratio());

        let layout = GridLayout {
            total_dots,
            columns,
            rows,
            dot_size,
            spacing_x,
            spacing_y,
            grid_width: span(columns, dot_size, spacing_x),
            grid_height: span(rows, dot_size, spacing_y),
        };
        debug!("layout for {total_dots} dots in {container:?}: {layout:?}");
        layout
    }

    /// Whether there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.columns == 0
    }

    /// Whether the grid fits within `container` along both axes
    pub fn fits(&self, container: Size) -> bool {
        self.grid_width <= container.x && self.grid_height <= container.y
    }

    /// The offset that centres the grid in `container`.  Never negative.
    pub fn centering_offset(&self, container: Size) -> Offset {
        Offset {
            x: ((container.x - self.grid_width) / 2.0).max(0.0),
            y: ((container.y - self.grid_height) / 2.0).max(0.0),
        }
    }

    /// The position of dot `index` (row-major), or `None` if there's no such
    /// dot
    pub fn dot_position(&self, index: u32) -> Option<DotPosition> {
        if index >= self.total_dots || self.is_empty() {
            return None;
        }
        let row = index / self.columns;
        let column = index % self.columns;
        Some(DotPosition {
            index,
            x: f64::from(column) * (self.dot_size + self.spacing_x),
            y: f64::from(row) * (self.dot_size + self.spacing_y),
        })
    }

    /// The positions of every dot in row-major order
    pub fn dot_positions(&self) -> impl Iterator<Item = DotPosition> + '_ {
        (0..self.total_dots).filter_map(|index| self.dot_position(index))
    }
}
