// SPDX-License-Identifier: MIT

//!
//! Column selection
//!

use crate::{
    DECIMAL_COLUMNS, DECIMAL_COLUMNS_MAX_DOTS, LARGE_TOTAL_COLUMN_BUCKETS,
    LARGE_TOTAL_WIDEST_COLUMNS, SINGLE_ROW_MAX_DOTS, WEEK_COLUMNS, WEEK_COLUMNS_MAX_DOTS,
};

/// Choose how many columns to lay `total_dots` out in.
///
/// Small totals get a fixed column count so that weeks and months always
/// look the same.  Only large totals (e.g. years) look at the container's
/// shape.  Zero dots means zero columns.
pub fn select_columns(total_dots: u32, container_width: f64, container_height: f64) -> u32 {
    if total_dots <= SINGLE_ROW_MAX_DOTS {
        return total_dots;
    }
    if total_dots <= WEEK_COLUMNS_MAX_DOTS {
        return WEEK_COLUMNS;
    }
    if total_dots <= DECIMAL_COLUMNS_MAX_DOTS {
        return DECIMAL_COLUMNS;
    }

    let aspect_ratio = container_width / container_height;
    LARGE_TOTAL_COLUMN_BUCKETS
        .iter()
        .find(|(max_aspect_ratio, _)| aspect_ratio <= *max_aspect_ratio)
        .map(|(_, columns)| *columns)
        .unwrap_or(LARGE_TOTAL_WIDEST_COLUMNS)
}
