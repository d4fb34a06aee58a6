// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// Floor a pixel value so that nothing is drawn at sub-pixel positions
pub(crate) fn floor_px(value: f64) -> f64 {
    value.floor().max(0.0)
}

/// The length taken up by `count` dots of `dot_size` with `spacing` between
/// neighbours.  There is no spacing after the last dot.
pub(crate) fn span(count: u32, dot_size: f64, spacing: f64) -> f64 {
    match count {
        0 => 0.0,
        count => f64::from(count) * dot_size + f64::from(count - 1) * spacing,
    }
}

/// The length of `count` dots measured in dot diameters, for a given
/// spacing-to-dot ratio
pub(crate) fn span_in_dots(count: u32, spacing_ratio: f64) -> f64 {
    span(count, 1.0, spacing_ratio)
}
