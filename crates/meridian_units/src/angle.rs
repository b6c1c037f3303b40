//! Degree/radian conversion and range wrapping.
//!
//! Two wrap strategies exist and each caller picks the one its formula
//! was published with:
//! - [`wrap_360`] / [`wrap_24`]: remainder, then a single positive shift.
//! - [`fractional_wrap`]: floor-based fractional part of `value / period`.
//!
//! They agree for moderate inputs but not bit-for-bit on every input.

use std::f64::consts::PI;

/// Multiplicative factor from degrees to radians.
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;

/// Convert degrees to radians.
pub fn radians(degrees: f64) -> f64 {
    degrees * DEGREES_TO_RADIANS
}

/// Convert radians to degrees, `rad / DEGREES_TO_RADIANS`.
pub fn degrees(radians: f64) -> f64 {
    radians / DEGREES_TO_RADIANS
}

/// Normalize an angle to [0, 360) degrees.
///
/// `deg % 360`, shifted by +360 once when the remainder is negative. A
/// negative remainder smaller than half an ulp of 360 rounds up to 360 on
/// the shift and is mapped to 0.
pub fn wrap_360(deg: f64) -> f64 {
    wrap_positive(deg, 360.0)
}

/// Normalize a time of day to [0, 24) hours.
///
/// Same remainder-then-shift rule as [`wrap_360`].
pub fn wrap_24(hours: f64) -> f64 {
    wrap_positive(hours, 24.0)
}

fn wrap_positive(value: f64, period: f64) -> f64 {
    let r = value % period;
    let w = if r < 0.0 { r + period } else { r };
    if w >= period { 0.0 } else { w }
}

/// Wrap `value` into [0, period) via the fractional part of `value / period`.
///
/// `period * (x - floor(x))` where `x = value / period`. The floor keeps
/// negative inputs (e.g. west longitude shifts) non-negative. A tiny negative
/// `x` gives a fraction that rounds to 1; that case is mapped to 0.
pub fn fractional_wrap(value: f64, period: f64) -> f64 {
    let x = value / period;
    let w = period * (x - x.floor());
    if w >= period { 0.0 } else { w }
}
