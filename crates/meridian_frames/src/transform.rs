//! Rotations between the ecliptic, equatorial and horizontal frames.
//!
//! Ecliptic ↔ equatorial is a rotation about the equinox direction by the
//! obliquity ε. Equatorial → horizontal goes through the observer's hour
//! angle and latitude.
//!
//! Source: Meeus, "Astronomical Algorithms" 2nd ed., eqs. 13.3, 13.4, 13.5,
//! 13.6.

use chrono::{DateTime, Utc};
use log::{debug, trace};
use meridian_units::{degrees, radians, wrap_360};

use crate::astrometry::{hour_angle, obliquity_of_the_ecliptic};
use crate::error::CoordinateError;
use crate::types::{
    EclipticCoordinate, EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate,
};

/// Angular distance from ±90° (in degrees) within which the horizontal
/// azimuth is treated as undefined by [`try_equatorial_to_horizontal`].
pub const DEGENERATE_TOLERANCE_DEG: f64 = 1e-5;

/// Ecliptic → equatorial at the given instant.
///
/// ```text
/// α = atan2(sin λ·cos ε − tan β·sin ε, cos λ)
/// δ = asin(sin β·cos ε + cos β·sin ε·sin λ)
/// ```
pub fn ecliptic_to_equatorial(
    datetime: DateTime<Utc>,
    ecliptic: &EclipticCoordinate,
) -> EquatorialCoordinate {
    let eps = radians(obliquity_of_the_ecliptic(datetime));
    let lon = ecliptic.lon_rad();
    let lat = ecliptic.lat_rad();

    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();

    EquatorialCoordinate::new(wrap_360(degrees(ra)), degrees(dec))
}

/// Equatorial → ecliptic at the given instant; inverse of
/// [`ecliptic_to_equatorial`].
///
/// ```text
/// λ = atan2(sin α·cos ε + tan δ·sin ε, cos α)
/// β = asin(sin δ·cos ε − cos δ·sin ε·sin α)
/// ```
pub fn equatorial_to_ecliptic(
    datetime: DateTime<Utc>,
    equatorial: &EquatorialCoordinate,
) -> EclipticCoordinate {
    let eps = radians(obliquity_of_the_ecliptic(datetime));
    let ra = equatorial.ra_rad();
    let dec = equatorial.dec_rad();

    let lon = (ra.sin() * eps.cos() + dec.tan() * eps.sin()).atan2(ra.cos());
    let lat = (dec.sin() * eps.cos() - dec.cos() * eps.sin() * ra.sin()).asin();

    EclipticCoordinate::new(wrap_360(degrees(lon)), degrees(lat))
}

/// Equatorial → horizontal for an observer at the given instant.
///
/// ```text
/// sin a = sin δ·sin φ + cos δ·cos φ·cos H
/// cos A = (sin δ − sin a·sin φ) / (cos a·cos φ)
/// A     = 360° − A   when sin H > 0
/// ```
///
/// Azimuth is measured from North through East. At a pole, or with the
/// target exactly at the zenith or nadir, the azimuth is undefined and this
/// function returns NaN for it; use [`try_equatorial_to_horizontal`] to get
/// an error instead.
pub fn equatorial_to_horizontal(
    datetime: DateTime<Utc>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
) -> HorizontalCoordinate {
    let ha = radians(hour_angle(datetime, observer, target));
    let lat = observer.latitude_rad();
    let dec = target.dec_rad();

    let alt = (dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos()).asin();
    let mut az = degrees(((dec.sin() - alt.sin() * lat.sin()) / (alt.cos() * lat.cos())).acos());
    if ha.sin() > 0.0 {
        az = 360.0 - az;
    }

    let horizontal = HorizontalCoordinate::new(wrap_360(az), degrees(alt));
    trace!("horizontal: H={}° {horizontal}", degrees(ha));
    horizontal
}

/// Checked equatorial → horizontal.
///
/// Same result as [`equatorial_to_horizontal`], but rejects non-finite
/// inputs and geometry where the azimuth is undefined: an observer within
/// [`DEGENERATE_TOLERANCE_DEG`] of a pole, or a target within that distance
/// of the zenith or nadir. Rounding that pushes the acos argument just past
/// ±1 is clamped.
pub fn try_equatorial_to_horizontal(
    datetime: DateTime<Utc>,
    observer: &GeographicCoordinate,
    target: &EquatorialCoordinate,
) -> Result<HorizontalCoordinate, CoordinateError> {
    let inputs = [
        ("observer latitude", observer.latitude_deg),
        ("observer longitude", observer.longitude_deg),
        ("target right ascension", target.ra_deg),
        ("target declination", target.dec_deg),
    ];
    if let Some((name, _)) = inputs.iter().find(|(_, v)| !v.is_finite()) {
        debug!("rejecting horizontal transform: {name} is not finite");
        return Err(CoordinateError::NonFinite(*name));
    }
    if 90.0 - observer.latitude_deg.abs() < DEGENERATE_TOLERANCE_DEG {
        debug!("rejecting horizontal transform: observer at pole ({observer})");
        return Err(CoordinateError::ObserverAtPole(observer.latitude_deg));
    }

    let ha = radians(hour_angle(datetime, observer, target));
    let lat = observer.latitude_rad();
    let dec = target.dec_rad();

    let sin_alt = (dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos()).clamp(-1.0, 1.0);
    let alt = sin_alt.asin();
    let alt_deg = degrees(alt);
    if 90.0 - alt_deg.abs() < DEGENERATE_TOLERANCE_DEG {
        debug!("rejecting horizontal transform: target at altitude {alt_deg}°");
        return Err(if alt_deg > 0.0 {
            CoordinateError::TargetAtZenith
        } else {
            CoordinateError::TargetAtNadir
        });
    }

    let cos_az = ((dec.sin() - alt.sin() * lat.sin()) / (alt.cos() * lat.cos())).clamp(-1.0, 1.0);
    let mut az = degrees(cos_az.acos());
    if ha.sin() > 0.0 {
        az = 360.0 - az;
    }

    Ok(HorizontalCoordinate::new(wrap_360(az), alt_deg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn may_14_2021() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap()
    }

    #[test]
    fn vernal_equinox_maps_to_origin() {
        let eq = ecliptic_to_equatorial(may_14_2021(), &EclipticCoordinate::new(0.0, 0.0));
        assert!(eq.ra_deg.abs() < 1e-12 || (360.0 - eq.ra_deg) < 1e-12);
        assert!(eq.dec_deg.abs() < 1e-12);
    }

    #[test]
    fn summer_solstice_declination_is_obliquity() {
        let t = may_14_2021();
        let eq = ecliptic_to_equatorial(t, &EclipticCoordinate::new(90.0, 0.0));
        assert!((eq.ra_deg - 90.0).abs() < 1e-9, "ra = {}", eq.ra_deg);
        assert!((eq.dec_deg - obliquity_of_the_ecliptic(t)).abs() < 1e-9);
    }

    #[test]
    fn ecliptic_roundtrip() {
        let t = may_14_2021();
        let ecl = EclipticCoordinate::new(245.7, 2.3);
        let back = equatorial_to_ecliptic(t, &ecliptic_to_equatorial(t, &ecl));
        assert!((back.lon_deg - ecl.lon_deg).abs() < 1e-9);
        assert!((back.lat_deg - ecl.lat_deg).abs() < 1e-9);
    }

    #[test]
    fn celestial_pole_altitude_equals_latitude() {
        let observer = GeographicCoordinate::new(40.0, -75.0, 0.0);
        let pole = EquatorialCoordinate::new(0.0, 89.999);
        let h = equatorial_to_horizontal(may_14_2021(), &observer, &pole);
        assert!((h.altitude_deg - 40.0).abs() < 0.002, "alt = {}", h.altitude_deg);
        assert!(h.azimuth_deg < 0.002 || 360.0 - h.azimuth_deg < 0.002);
    }

    #[test]
    fn checked_matches_unchecked() {
        let t = may_14_2021();
        let observer = GeographicCoordinate::new(19.8207, -155.468094, 4205.0);
        let target = EquatorialCoordinate::new(88.7929583, 7.4070639);
        let a = equatorial_to_horizontal(t, &observer, &target);
        let b = try_equatorial_to_horizontal(t, &observer, &target).unwrap();
        assert!((a.azimuth_deg - b.azimuth_deg).abs() < 1e-12);
        assert!((a.altitude_deg - b.altitude_deg).abs() < 1e-12);
    }

    #[test]
    fn checked_rejects_pole() {
        let observer = GeographicCoordinate::new(90.0, 0.0, 0.0);
        let target = EquatorialCoordinate::new(10.0, 10.0);
        assert_eq!(
            try_equatorial_to_horizontal(may_14_2021(), &observer, &target),
            Err(CoordinateError::ObserverAtPole(90.0))
        );
    }

    #[test]
    fn checked_rejects_zenith() {
        let t = may_14_2021();
        let observer = GeographicCoordinate::new(19.8207, -155.468094, 4205.0);
        let lst = meridian_time::local_sidereal_time(t, observer.longitude_deg);
        let target = EquatorialCoordinate::new(lst * 15.0, observer.latitude_deg);
        assert_eq!(
            try_equatorial_to_horizontal(t, &observer, &target),
            Err(CoordinateError::TargetAtZenith)
        );
    }

    #[test]
    fn checked_rejects_nadir() {
        let t = may_14_2021();
        let observer = GeographicCoordinate::new(30.0, 0.0, 0.0);
        let lst = meridian_time::local_sidereal_time(t, 0.0);
        let target = EquatorialCoordinate::new(wrap_360(lst * 15.0 + 180.0), -30.0);
        assert_eq!(
            try_equatorial_to_horizontal(t, &observer, &target),
            Err(CoordinateError::TargetAtNadir)
        );
    }

    #[test]
    fn checked_rejects_nan() {
        let observer = GeographicCoordinate::new(10.0, f64::NAN, 0.0);
        let target = EquatorialCoordinate::new(10.0, 10.0);
        assert_eq!(
            try_equatorial_to_horizontal(may_14_2021(), &observer, &target),
            Err(CoordinateError::NonFinite("observer longitude"))
        );
    }

    #[test]
    fn east_of_meridian_has_eastern_azimuth() {
        let t = may_14_2021();
        let observer = GeographicCoordinate::new(0.0, 0.0, 0.0);
        let lst = meridian_time::local_sidereal_time(t, 0.0);
        // Target rising: hour angle −3h
        let target = EquatorialCoordinate::new(wrap_360(lst * 15.0 + 45.0), 0.0);
        let h = equatorial_to_horizontal(t, &observer, &target);
        assert!((h.azimuth_deg - 90.0).abs() < 1e-6, "az = {}", h.azimuth_deg);
        assert!((h.altitude_deg - 45.0).abs() < 1e-6, "alt = {}", h.altitude_deg);
    }
}
