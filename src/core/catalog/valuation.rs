// src/core/catalog/valuation.rs

//! Straight-line depreciation with no floor on the rate and a hard floor
//! of zero on the value.
//!
//! The time base is calendar days divided by 365 (fractional), not elapsed
//! full years. The formula is preserved exactly, leap-year drift included.

use crate::core::catalog::asset::{AssetDeclaration, AssetType};
use chrono::NaiveDate;

/// Yearly depreciation rate per category: fast-wearing categories
/// (vehicles, IT) lose 20% a year, everything else 5%.
pub fn depreciation_rate(kind: AssetType) -> f64 {
    match kind {
        AssetType::Vehicle | AssetType::It => 0.20,
        _ => 0.05,
    }
}

/// `max(0, round(value * (1 - rate * years)))` with
/// `years = (as_of - acquired) / 365 days`. Reaches zero as soon as
/// `rate * years >= 1`, and never goes negative.
pub fn depreciated_value(
    value: f64,
    acquired: NaiveDate,
    kind: AssetType,
    as_of: NaiveDate,
) -> f64 {
    let years = (as_of - acquired).num_days() as f64 / 365.0;
    let raw = value * (1.0 - depreciation_rate(kind) * years);
    raw.max(0.0).round()
}

/// Live recomputation for an existing declaration. The stored
/// `current_value` is only the snapshot taken at last save.
pub fn compute_current_value(asset: &AssetDeclaration, as_of: NaiveDate) -> f64 {
    depreciated_value(asset.value, asset.acquisition_date, asset.kind(), as_of)
}
