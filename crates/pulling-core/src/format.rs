//! Number rendering shared by the design strings and the anchor calculator.
//!
//! Every computed value that ends up inside a maneuver description goes
//! through one of these functions so output stays reproducible.

/// Fixed-point rendering with `decimals` digits after the point.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Whole units, truncated toward zero. Depths are narrated in whole meters.
pub fn whole(value: f64) -> i64 {
    value.trunc() as i64
}

/// Shortest decimal rendering, without a trailing `.0` for integral values.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
