// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{
    DEFAULT_HORIZONTAL_SPACING_RATIO, DEFAULT_MAX_DOT_SIZE, DEFAULT_MIN_DOT_SIZE,
    DEFAULT_VERTICAL_SPACING_RATIO, SMALLEST_DOT_SIZE,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Errors that can arise in relation to [`GridLayoutParams`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutParamsError {
    /// Dot sizes must be finite and at least [`SMALLEST_DOT_SIZE`]
    #[error("Dot size `{0}` is not allowed")]
    InvalidDotSize(f64),

    /// The smallest dot size can't be bigger than the largest
    #[error("Minimum dot size `{min}` is greater than maximum dot size `{max}`")]
    MinAboveMax { min: f64, max: f64 },

    /// Dots are whole pixels, so there must be a whole number between the
    /// limits
    #[error("No whole pixel dot size between `{min}` and `{max}`")]
    NoWholePixelSize { min: f64, max: f64 },

    /// Spacing ratios must be finite and not negative
    #[error("Spacing ratio `{0}` is not allowed")]
    InvalidSpacingRatio(f64),
}

/// Limits on the dot size and the ratio of dot spacing to dot size along
/// each axis.  Only constructible with valid values, so the layout maths can
/// rely on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLayoutParams {
    min_dot_size: f64,
    max_dot_size: f64,
    horizontal_spacing_ratio: f64,
    vertical_spacing_ratio: f64,
}

impl Default for GridLayoutParams {
    fn default() -> Self {
        GridLayoutParams {
            min_dot_size: DEFAULT_MIN_DOT_SIZE,
            max_dot_size: DEFAULT_MAX_DOT_SIZE,
            horizontal_spacing_ratio: DEFAULT_HORIZONTAL_SPACING_RATIO,
            vertical_spacing_ratio: DEFAULT_VERTICAL_SPACING_RATIO,
        }
    }
}

impl GridLayoutParams {
    /// Create new layout params if they're valid
    pub fn new(
        min_dot_size: f64,
        max_dot_size: f64,
        horizontal_spacing_ratio: f64,
        vertical_spacing_ratio: f64,
    ) -> Result<Self, LayoutParamsError> {
        for dot_size in [min_dot_size, max_dot_size] {
            if !dot_size.is_finite() || dot_size < SMALLEST_DOT_SIZE {
                return Err(LayoutParamsError::InvalidDotSize(dot_size));
            }
        }
        if min_dot_size > max_dot_size {
            return Err(LayoutParamsError::MinAboveMax {
                min: min_dot_size,
                max: max_dot_size,
            });
        }
        if min_dot_size.ceil() > max_dot_size.floor() {
            return Err(LayoutParamsError::NoWholePixelSize {
                min: min_dot_size,
                max: max_dot_size,
            });
        }
        for ratio in [horizontal_spacing_ratio, vertical_spacing_ratio] {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(LayoutParamsError::InvalidSpacingRatio(ratio));
            }
        }
        Ok(Self {
            min_dot_size,
            max_dot_size,
            horizontal_spacing_ratio,
            vertical_spacing_ratio,
        })
    }

    /// Same spacing ratio along both axes
    pub fn with_shared_spacing(
        min_dot_size: f64,
        max_dot_size: f64,
        spacing_ratio: f64,
    ) -> Result<Self, LayoutParamsError> {
        Self::new(min_dot_size, max_dot_size, spacing_ratio, spacing_ratio)
    }

    /// The smallest dot diameter in pixels
    pub fn min_dot_size(&self) -> f64 {
        self.min_dot_size
    }

    /// The largest dot diameter in pixels
    pub fn max_dot_size(&self) -> f64 {
        self.max_dot_size
    }

    /// Gap between columns as a fraction of the dot size
    pub fn horizontal_spacing_ratio(&self) -> f64 {
        self.horizontal_spacing_ratio
    }

    /// Gap between rows as a fraction of the dot size
    pub fn vertical_spacing_ratio(&self) -> f64 {
        self.vertical_spacing_ratio
    }

    /// The smallest and largest whole pixel dot sizes within the limits
    pub fn whole_pixel_dot_sizes(&self) -> (f64, f64) {
        (self.min_dot_size.ceil(), self.max_dot_size.floor())
    }
}

/// Missing fields fall back to their defaults
#[derive(Deserialize)]
#[serde(default)]
struct RawGridLayoutParams {
    min_dot_size: f64,
    max_dot_size: f64,
    horizontal_spacing_ratio: f64,
    vertical_spacing_ratio: f64,
}

impl Default for RawGridLayoutParams {
    fn default() -> Self {
        let params = GridLayoutParams::default();
        Self {
            min_dot_size: params.min_dot_size,
            max_dot_size: params.max_dot_size,
            horizontal_spacing_ratio: params.horizontal_spacing_ratio,
            vertical_spacing_ratio: params.vertical_spacing_ratio,
        }
    }
}

impl<'de> Deserialize<'de> for GridLayoutParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawGridLayoutParams::deserialize(deserializer)?;
        GridLayoutParams::new(
            raw.min_dot_size,
            raw.max_dot_size,
            raw.horizontal_spacing_ratio,
            raw.vertical_spacing_ratio,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new() {
        assert!(GridLayoutParams::new(1.0, 40.0, 0.5, 0.25).is_ok());
        assert!(GridLayoutParams::new(4.0, 4.0, 0.0, 0.0).is_ok());
        assert_eq!(
            GridLayoutParams::new(-1.0, 40.0, 0.5, 0.5),
            Err(LayoutParamsError::InvalidDotSize(-1.0))
        );
        assert_eq!(
            GridLayoutParams::new(0.0, 40.0, 0.5, 0.5),
            Err(LayoutParamsError::InvalidDotSize(0.0))
        );
        assert_eq!(
            GridLayoutParams::new(0.5, 40.0, 0.5, 0.5),
            Err(LayoutParamsError::InvalidDotSize(0.5))
        );
        assert!(matches!(
            GridLayoutParams::new(1.0, f64::INFINITY, 0.5, 0.5),
            Err(LayoutParamsError::InvalidDotSize(_))
        ));
        assert_eq!(
            GridLayoutParams::new(10.0, 5.0, 0.5, 0.5),
            Err(LayoutParamsError::MinAboveMax { min: 10.0, max: 5.0 })
        );
        assert_eq!(
            GridLayoutParams::new(1.5, 1.8, 0.5, 0.5),
            Err(LayoutParamsError::NoWholePixelSize { min: 1.5, max: 1.8 })
        );
        assert!(matches!(
            GridLayoutParams::new(1.0, 40.0, f64::NAN, 0.5),
            Err(LayoutParamsError::InvalidSpacingRatio(_))
        ));
        assert_eq!(
            GridLayoutParams::with_shared_spacing(1.0, 40.0, -0.5),
            Err(LayoutParamsError::InvalidSpacingRatio(-0.5))
        );
    }

    #[test]
    fn deserialize() {
        let params: GridLayoutParams = serde_json::from_str(r#"{"max_dot_size": 20.0}"#).unwrap();
        assert_eq!(params.max_dot_size(), 20.0);
        assert_eq!(params.min_dot_size(), DEFAULT_MIN_DOT_SIZE);
        assert_eq!(params.vertical_spacing_ratio(), DEFAULT_VERTICAL_SPACING_RATIO);

        assert!(serde_json::from_str::<GridLayoutParams>(r#"{"min_dot_size": 50.0}"#).is_err());
        assert!(serde_json::from_str::<GridLayoutParams>(r#"{"min_dot_size": 0.0}"#).is_err());
    }

    #[test]
    fn whole_pixel_dot_sizes() {
        let params = GridLayoutParams::new(1.5, 17.5, 0.5, 0.5).unwrap();
        assert_eq!(params.whole_pixel_dot_sizes(), (2.0, 17.0));
        assert_eq!(GridLayoutParams::default().whole_pixel_dot_sizes(), (1.0, 40.0));
    }
}
