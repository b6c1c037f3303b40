//! Atmospheric corrections to horizontal positions.
//!
//! Provides:
//! - Refraction from Sæmundsson's formula, scaled for pressure and temperature
//! - Airmass from the Rozenberg-style polynomial in the altitude angle
//! - [`AtmosphericConditions`] carrying the observing-site weather
//!
//! Both corrections return `f64::INFINITY` for targets the atmosphere does
//! not let through (below the horizon).

use log::trace;
use meridian_frames::HorizontalCoordinate;
use meridian_units::radians;

/// Standard sea-level pressure in pascals.
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

/// Reference temperature of the refraction formula in kelvin (10 °C).
pub const STANDARD_TEMPERATURE_K: f64 = 283.15;

/// Weather at the observing site.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtmosphericConditions {
    /// Air pressure in pascals. Default: 101325.
    pub pressure_pa: f64,
    /// Air temperature in kelvin. Default: 283.15.
    pub temperature_k: f64,
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self {
            pressure_pa: STANDARD_PRESSURE_PA,
            temperature_k: STANDARD_TEMPERATURE_K,
        }
    }
}

impl AtmosphericConditions {
    /// Conditions from a pressure in pascals and a temperature in kelvin.
    pub fn new(pressure_pa: f64, temperature_k: f64) -> Self {
        Self {
            pressure_pa,
            temperature_k,
        }
    }

    /// Pressure/temperature scale applied to the standard refraction,
    /// `(P / 101325) · (283.15 / T)`.
    pub fn refraction_scale(&self) -> f64 {
        (self.pressure_pa / STANDARD_PRESSURE_PA) * (STANDARD_TEMPERATURE_K / self.temperature_k)
    }
}

/// Atmospheric refraction in degrees for a target at the given altitude.
///
/// ```text
/// R = 1.02 / tan(h + 10.3 / (h + 5.11)) / 60 · (P / 101325) · (283.15 / T)
/// ```
///
/// with h the true altitude in degrees (the tangent argument in degrees).
/// Returns `f64::INFINITY` below the horizon. Pressure in pascals,
/// temperature in kelvin.
pub fn refraction(horizontal: &HorizontalCoordinate, pressure_pa: f64, temperature_k: f64) -> f64 {
    refraction_under(
        horizontal,
        &AtmosphericConditions::new(pressure_pa, temperature_k),
    )
}

/// [`refraction`] with the weather taken from `conditions`.
pub fn refraction_under(
    horizontal: &HorizontalCoordinate,
    conditions: &AtmosphericConditions,
) -> f64 {
    let alt = horizontal.altitude_deg;
    if alt < 0.0 {
        return f64::INFINITY;
    }
    let standard = 1.02 / radians(alt + 10.3 / (alt + 5.11)).tan() / 60.0;
    standard * conditions.refraction_scale()
}

/// Relative airmass along the line of sight.
///
/// ```text
/// X = 1 / (sin h + 0.0001184·cot h + 0.003188·(cot h · tan h))
/// ```
///
/// with h the altitude in radians. The constant third term keeps the value
/// slightly below 1 at the zenith (about 0.9968). Returns `f64::INFINITY` at
/// or below the horizon.
pub fn airmass(horizontal: &HorizontalCoordinate) -> f64 {
    if horizontal.altitude_deg <= 0.0 {
        return f64::INFINITY;
    }
    let h = horizontal.altitude_rad();
    let tan_h = h.tan();
    if tan_h == 0.0 {
        return f64::INFINITY;
    }
    let cot_h = 1.0 / tan_h;
    1.0 / (h.sin() + 0.000_118_4 * cot_h + 0.003_188 * (cot_h * tan_h))
}

/// The apparent (refracted) position of a target.
///
/// Adds [`refraction_under`] to the altitude; below the horizon, where the
/// refraction is infinite, the position is returned unchanged.
pub fn apparent_altitude(
    horizontal: &HorizontalCoordinate,
    conditions: &AtmosphericConditions,
) -> HorizontalCoordinate {
    let r = refraction_under(horizontal, conditions);
    if !r.is_finite() {
        return *horizontal;
    }
    let apparent = HorizontalCoordinate::new(
        horizontal.azimuth_deg,
        (horizontal.altitude_deg + r).min(90.0),
    );
    trace!("refraction: {r}° → {apparent}");
    apparent
}
