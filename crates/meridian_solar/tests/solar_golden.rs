//! Golden-value and property tests for the solar series.

use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use meridian_frames::GeographicCoordinate;
use meridian_solar::{
    ecliptic_coordinate, ecliptic_longitude, equation_of_center, equatorial_coordinate,
    horizontal_coordinate, mean_anomaly, true_ecliptic_longitude,
};
use proptest::prelude::*;

fn may_14_2021() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap()
}

#[test]
fn mean_anomaly_golden() {
    assert_relative_eq!(mean_anomaly(may_14_2021()), 128.66090142411576, max_relative = 1e-9);
}

#[test]
fn equation_of_center_golden() {
    assert_relative_eq!(
        equation_of_center(may_14_2021()),
        1.4754839423594457,
        max_relative = 1e-9
    );
}

#[test]
fn ecliptic_longitude_golden() {
    let lon = ecliptic_longitude(may_14_2021());
    assert!((lon - 51.96564888161902).abs() < 1e-4, "L = {lon}");
}

#[test]
fn ecliptic_coordinate_uses_mean_longitude() {
    let t = may_14_2021();
    let ecl = ecliptic_coordinate(t);
    assert_eq!(ecl.lon_deg, ecliptic_longitude(t));
    assert_eq!(ecl.lat_deg, 0.0);
}

#[test]
fn true_longitude_adds_equation_of_center() {
    let t = may_14_2021();
    assert_relative_eq!(
        true_ecliptic_longitude(t),
        51.96564888161811 + 1.4754839423594457,
        max_relative = 1e-9
    );
}

#[test]
fn equatorial_golden() {
    let eq = equatorial_coordinate(may_14_2021());
    assert_relative_eq!(eq.ra_deg, 49.54945437274067, max_relative = 1e-9);
    assert_relative_eq!(eq.dec_deg, 18.2564515633218, max_relative = 1e-9);
}

#[test]
fn horizontal_golden_mauna_kea() {
    let observer = GeographicCoordinate::new(19.8207, -155.468094, 4205.0);
    let h = horizontal_coordinate(may_14_2021(), &observer);
    assert_relative_eq!(h.azimuth_deg, 271.0186845279127, max_relative = 1e-9);
    assert_relative_eq!(h.altitude_deg, 64.5103725224981, max_relative = 1e-9);
}

proptest! {
    #[test]
    fn angles_in_range(secs in -2_208_988_800i64..4_102_444_800) {
        let t = DateTime::from_timestamp(secs, 0).unwrap();
        let m = mean_anomaly(t);
        let l = ecliptic_longitude(t);
        let tl = true_ecliptic_longitude(t);
        prop_assert!((0.0..360.0).contains(&m), "M = {}", m);
        prop_assert!((0.0..360.0).contains(&l), "L = {}", l);
        prop_assert!((0.0..360.0).contains(&tl), "λ = {}", tl);
        prop_assert!(equation_of_center(t).abs() < 2.0);
    }
}
