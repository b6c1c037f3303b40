//! Sexagesimal decomposition of decimal degrees.
//!
//! Every component is extracted with `floor`, so negative inputs keep the
//! sign on the whole-degree (and whole-hour) part while minutes and seconds
//! stay non-negative: −89.682° → −90° 19′ 4.8″.

/// Hours, degrees, minutes and seconds of a decimal-degree angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hdms {
    /// Whole hours, `floor(value / 15)`.
    pub hours: i32,
    /// Whole degrees, `floor(value)`.
    pub degrees: i32,
    /// Arc-minutes (0..59).
    pub minutes: i32,
    /// Arc-seconds (0.0..60.0), with the fractional remainder.
    pub seconds: f64,
}

/// Decompose decimal degrees into hours, degrees, minutes and seconds.
///
/// - `degrees = floor(value)`
/// - `minutes = floor((value − degrees) · 60)`
/// - `seconds = ((value − degrees) · 60 − minutes) · 60`
/// - `hours = floor(value / 15)`
///
/// No rounding is applied to `seconds`; callers format to the precision they
/// need.
pub fn degrees_to_hdms(value: f64) -> Hdms {
    let whole = value.floor();
    let remainder = (value - whole) * 60.0;
    let minutes = remainder.floor();
    let seconds = (remainder - minutes) * 60.0;
    Hdms {
        hours: (value / 15.0).floor() as i32,
        degrees: whole as i32,
        minutes: minutes as i32,
        seconds,
    }
}

/// Recombine the degree, minute and second parts into decimal degrees.
///
/// Inverse of [`degrees_to_hdms`]; the `hours` field is ignored.
pub fn hdms_to_degrees(hdms: &Hdms) -> f64 {
    hdms.degrees as f64 + hdms.minutes as f64 / 60.0 + hdms.seconds / 3600.0
}
