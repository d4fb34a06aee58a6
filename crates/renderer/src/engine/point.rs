// SPDX-License-Identifier: MIT

//!
//! Points and dot positions
//!

use serde::Serialize;
use std::fmt::Debug;

pub type Size = Point;
pub type Offset = Point;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The top left corner of a dot, relative to the top left corner of the grid
/// (i.e. before any centering offset is added)
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct DotPosition {
    /// Row-major index of the dot, one per day starting from 0
    pub index: u32,
    pub x: f64,
    pub y: f64,
}

impl DotPosition {
    /// The position once the grid has been moved by `offset`
    pub fn with_offset(self, offset: Offset) -> Self {
        DotPosition {
            index: self.index,
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}
