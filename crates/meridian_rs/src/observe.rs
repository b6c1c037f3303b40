//! One-call observation of a target through the atmosphere.
//!
//! Chains Universal Time normalization, the checked equatorial → horizontal
//! transform, refraction and airmass, so callers holding an instant in any
//! time zone get the whole picture with a single `?`.

use chrono::{DateTime, TimeZone};
use log::trace;
use meridian_atmos::{AtmosphericConditions, airmass, apparent_altitude, refraction_under};
use meridian_frames::{
    EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate,
    try_equatorial_to_horizontal,
};
use meridian_time::universal_time;
use meridian_units::{DMS_TEMPLATE, format_decimal_to_dms};

use crate::error::MeridianError;

/// A target as seen by an observer at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Position without atmospheric effects.
    pub geometric: HorizontalCoordinate,
    /// Position lifted by refraction; equal to `geometric` below the horizon.
    pub apparent: HorizontalCoordinate,
    /// Refraction in degrees; infinite below the horizon. Serialized as
    /// `null` when infinite.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "infinite_as_null", deserialize_with = "null_as_infinite")
    )]
    pub refraction_deg: f64,
    /// Relative airmass of the geometric position; infinite at or below
    /// the horizon. Serialized as `null` when infinite.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "infinite_as_null", deserialize_with = "null_as_infinite")
    )]
    pub airmass: f64,
}

#[cfg(feature = "serde")]
fn infinite_as_null<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::Serialize;
    let finite = if value.is_infinite() { None } else { Some(*value) };
    finite.serialize(serializer)
}

#[cfg(feature = "serde")]
fn null_as_infinite<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

impl Observation {
    /// Whether the target is above the geometric horizon.
    pub fn is_visible(&self) -> bool {
        self.geometric.is_above_horizon()
    }
}

/// Observe an equatorial target from a site on Earth.
pub fn observe<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
    conditions: &AtmosphericConditions,
) -> Result<Observation, MeridianError> {
    let ut = universal_time(datetime)?;
    let geometric = try_equatorial_to_horizontal(ut, observer, target)?;
    let observation = Observation {
        geometric,
        apparent: apparent_altitude(&geometric, conditions),
        refraction_deg: refraction_under(&geometric, conditions),
        airmass: airmass(&geometric),
    };
    trace!("observed {target} from {observer} at {ut}: {}", observation.apparent);
    Ok(observation)
}

/// Observe the Sun from a site on Earth.
pub fn observe_sun<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &GeographicCoordinate,
    conditions: &AtmosphericConditions,
) -> Result<Observation, MeridianError> {
    let ut = universal_time(datetime)?;
    let sun = meridian_solar::equatorial_coordinate(ut);
    observe(&ut, observer, &sun, conditions)
}

/// Render decimal degrees with [`DMS_TEMPLATE`], e.g. `+123°27'39.60"`.
pub fn format_dms(value_deg: f64) -> Result<String, MeridianError> {
    Ok(format_decimal_to_dms(value_deg, DMS_TEMPLATE)?)
}
