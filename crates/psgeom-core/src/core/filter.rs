//! Lithography threshold filter for exposure masks.
//!
//! A grid table holding a smoothed exposure dose is turned into a resist mask:
//! well-exposed regions (dose at or above `upper`) are cleared to 0, unexposed
//! regions (dose at or below `lower`) become solid 1, and the transition band
//! keeps its dose. The output is the inverse of the exposure.

use crate::core::io::table::GridTable;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum FilterError {
    #[error("Lower threshold {lower} exceeds upper threshold {upper}")]
    InvertedThresholds { lower: f64, upper: f64 },
    #[error("Thresholds must be finite (lower = {lower}, upper = {upper})")]
    NonFinite { lower: f64, upper: f64 },
}

#[inline]
pub fn litho_filter(value: f64, lower: f64, upper: f64) -> f64 {
    if value <= lower {
        1.0
    } else if value >= upper {
        0.0
    } else {
        value
    }
}

/// Applies [`litho_filter`] to every record of `table` in place.
pub fn apply_litho_filter(
    table: &mut GridTable,
    lower: f64,
    upper: f64,
) -> Result<(), FilterError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(FilterError::NonFinite { lower, upper });
    }
    if lower > upper {
        return Err(FilterError::InvertedThresholds { lower, upper });
    }
    for record in &mut table.records {
        record.f = litho_filter(record.f, lower, upper);
    }
    Ok(())
}
