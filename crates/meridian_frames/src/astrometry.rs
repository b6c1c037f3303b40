//! Hour angle and the obliquity of the ecliptic.

use chrono::{DateTime, Utc};
use meridian_time::{julian_centuries, local_sidereal_time};
use meridian_units::wrap_360;

use crate::types::{EquatorialCoordinate, GeographicCoordinate};

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_292;

/// Hour angle of a target as seen by an observer, in degrees, range [0, 360).
///
/// `H = LST·15 − α`, where LST is the observer's Local Sidereal Time in
/// hours and α the target's right ascension in degrees.
pub fn hour_angle(
    datetime: DateTime<Utc>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
) -> f64 {
    let lst = local_sidereal_time(datetime, observer.longitude_deg);
    wrap_360(lst * 15.0 - target.ra_deg)
}

/// Mean obliquity of the ecliptic, in degrees.
///
/// ```text
/// ε = 23.439292 − (46.845·T + 0.00059·T² + 0.001813·T³) / 3600
/// ```
///
/// with T in Julian centuries since J2000.0. Valid for a few millennia
/// around J2000; nutation is not included.
pub fn obliquity_of_the_ecliptic(datetime: DateTime<Utc>) -> f64 {
    let t = julian_centuries(datetime);
    let t2 = t * t;
    let t3 = t2 * t;
    wrap_360(OBLIQUITY_J2000_DEG - (46.845 * t + 0.000_59 * t2 + 0.001_813 * t3) / 3600.0)
}
