// SPDX-License-Identifier: MIT

//!
//! Layout constants
//!

/// Totals up to this many dots are laid out in a single row
pub const SINGLE_ROW_MAX_DOTS: u32 = 7;

/// Totals up to this many dots are laid out in [`WEEK_COLUMNS`] columns
pub const WEEK_COLUMNS_MAX_DOTS: u32 = 49;

/// One column per day of the week
pub const WEEK_COLUMNS: u32 = 7;

/// Totals up to this many dots are laid out in [`DECIMAL_COLUMNS`] columns
pub const DECIMAL_COLUMNS_MAX_DOTS: u32 = 100;

/// Ten dots per row
pub const DECIMAL_COLUMNS: u32 = 10;

/// Column counts for totals above [`DECIMAL_COLUMNS_MAX_DOTS`], keyed by the
/// container's maximum aspect ratio (width / height).  The first bucket whose
/// ratio is not exceeded wins.
pub const LARGE_TOTAL_COLUMN_BUCKETS: [(f64, u32); 3] = [(0.8, 15), (1.25, 20), (2.0, 24)];

/// Column count for large totals in containers wider than every bucket
pub const LARGE_TOTAL_WIDEST_COLUMNS: u32 = 30;

/// No dot is ever drawn smaller than a single pixel
pub const SMALLEST_DOT_SIZE: f64 = 1.0;

/// Default smallest dot diameter in pixels
pub const DEFAULT_MIN_DOT_SIZE: f64 = 1.0;

/// Default largest dot diameter in pixels
pub const DEFAULT_MAX_DOT_SIZE: f64 = 40.0;

/// Default gap between columns as a fraction of the dot size
pub const DEFAULT_HORIZONTAL_SPACING_RATIO: f64 = 0.5;

/// Default gap between rows as a fraction of the dot size
pub const DEFAULT_VERTICAL_SPACING_RATIO: f64 = 0.5;
