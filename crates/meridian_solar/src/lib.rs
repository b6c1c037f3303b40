//! Low-precision position of the Sun.
//!
//! Series in Julian centuries T since J2000.0 for the Sun's mean anomaly,
//! equation of center and geometric mean longitude, chained through the
//! frame transforms of `meridian_frames` to equatorial and horizontal
//! coordinates. The Sun is taken to lie on the ecliptic (β = 0).
//!
//! Source: Meeus, "Astronomical Algorithms" 2nd ed., ch. 25 (eqs. 25.2–25.4).
//! Accuracy is about 0.01° in longitude when the equation of center is
//! applied ([`true_ecliptic_longitude`]).

use chrono::{DateTime, Utc};
use log::trace;
use meridian_frames::{
    EclipticCoordinate, EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate,
    ecliptic_to_equatorial, equatorial_to_horizontal,
};
use meridian_time::julian_centuries;
use meridian_units::{radians, wrap_360};

/// Mean anomaly of the Sun in degrees, range [0, 360).
///
/// `M = 357.52911 + 35999.05029·T − 0.0001537·T²`
pub fn mean_anomaly(datetime: DateTime<Utc>) -> f64 {
    let t = julian_centuries(datetime);
    wrap_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t)
}

/// Equation of center in degrees: true anomaly minus mean anomaly.
///
/// ```text
/// C = (1.914602 − 0.004817·T² − 0.000014·T³)·sin M
///   + (0.019993 − 0.000101·T²)·sin 2M
///   + 0.000289·sin 3M
/// ```
///
/// Not wrapped; |C| stays below 2°.
pub fn equation_of_center(datetime: DateTime<Utc>) -> f64 {
    let t = julian_centuries(datetime);
    let t2 = t * t;
    let t3 = t2 * t;
    let m = radians(mean_anomaly(datetime));

    (1.914_602 - 0.004_817 * t2 - 0.000_014 * t3) * m.sin()
        + (0.019_993 - 0.000_101 * t2) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Geometric mean longitude of the Sun in degrees, range [0, 360).
///
/// `L₀ = 280.46646 + 36000.76983·T + 0.0003032·T²`
///
/// This is the longitude every other function in this crate builds on. It
/// does not include the equation of center; see [`true_ecliptic_longitude`].
pub fn ecliptic_longitude(datetime: DateTime<Utc>) -> f64 {
    let t = julian_centuries(datetime);
    wrap_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// True geometric longitude of the Sun in degrees, `L₀ + C`, range [0, 360).
pub fn true_ecliptic_longitude(datetime: DateTime<Utc>) -> f64 {
    wrap_360(ecliptic_longitude(datetime) + equation_of_center(datetime))
}

/// The Sun's ecliptic coordinate: mean longitude, latitude 0.
pub fn ecliptic_coordinate(datetime: DateTime<Utc>) -> EclipticCoordinate {
    EclipticCoordinate::new(ecliptic_longitude(datetime), 0.0)
}

/// The Sun's equatorial coordinate.
pub fn equatorial_coordinate(datetime: DateTime<Utc>) -> EquatorialCoordinate {
    let eq = ecliptic_to_equatorial(datetime, &ecliptic_coordinate(datetime));
    trace!("sun: {eq}");
    eq
}

/// The Sun's horizontal coordinate for an observer.
pub fn horizontal_coordinate(
    datetime: DateTime<Utc>,
    observer: &GeographicCoordinate,
) -> HorizontalCoordinate {
    equatorial_to_horizontal(datetime, observer, &equatorial_coordinate(datetime))
}
