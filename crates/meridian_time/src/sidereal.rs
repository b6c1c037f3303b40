//! Greenwich and Local Sidereal Time.
//!
//! Uses the "January 0" reduction: sidereal time at 0h UT on January 0 of
//! the current year is derived from a Besselian-year polynomial, advanced by
//! 0.0657098 h for every whole day since, and the elapsed UT of the current
//! day is scaled by the sidereal/solar rate 1.002737909.
//!
//! Source: Duffett-Smith & Zwart, "Practical Astronomy with your Calculator
//! or Spreadsheet", §12. Accuracy is about 0.1 s of time for dates within a
//! few centuries of 1900.

use chrono::{DateTime, Datelike, Timelike, Utc};
use log::trace;
use meridian_units::{fractional_wrap, wrap_24};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J1900, J1970, MILLISECONDS_PER_DAY, julian_date};

/// Sidereal hours gained on solar time per civil day.
const SIDEREAL_GAIN_PER_DAY: f64 = 0.065_709_8;

/// Ratio of the sidereal to the solar rate.
const SIDEREAL_RATE: f64 = 1.002_737_909;

/// Julian Date of 0h UT on January 0 (i.e. December 31) of the instant's year.
///
/// Built from integer milliseconds so the reference epoch lands exactly on a
/// day boundary.
fn january_zero_julian_date(datetime: DateTime<Utc>) -> f64 {
    let since_midnight_ms = i64::from(datetime.num_seconds_from_midnight()) * 1000
        + i64::from(datetime.nanosecond() / 1_000_000);
    let day_start_ms = datetime.timestamp_millis() - since_midnight_ms;
    let jan_1_ms = day_start_ms - i64::from(datetime.ordinal0()) * 86_400_000;
    jan_1_ms as f64 / MILLISECONDS_PER_DAY + J1970 - 1.0
}

/// Universal Time of day in decimal hours.
fn decimal_hours(datetime: DateTime<Utc>) -> f64 {
    datetime.hour() as f64
        + datetime.minute() as f64 / 60.0
        + datetime.second() as f64 / 3600.0
        + datetime.nanosecond() as f64 / 3.6e12
}

/// Greenwich Sidereal Time in hours, range [0, 24).
///
/// ```text
/// JD₀ = JD(January 0, 0h UT)
/// T   = (JD₀ − 2415020.0) / 36525
/// R   = 6.6460656 + 2400.051262·T + 0.00002581·T²
/// B   = 24 − R + 24·(year − 1900)
/// T₀  = 0.0657098·⌊JD − JD₀⌋ − B
/// GST = T₀ + 1.002737909·UT          (mod 24)
/// ```
pub fn greenwich_sidereal_time(datetime: DateTime<Utc>) -> f64 {
    let jd = julian_date(datetime);
    let jd_0 = january_zero_julian_date(datetime);
    let days = jd - jd_0;

    let t = (jd_0 - J1900) / DAYS_PER_JULIAN_CENTURY;
    let r = 6.646_065_6 + 2400.051_262 * t + 0.000_025_81 * t * t;
    let b = 24.0 - r + f64::from(24 * (datetime.year() - 1900));

    let t_0 = SIDEREAL_GAIN_PER_DAY * days.floor() - b;
    let gst = wrap_24(t_0 + decimal_hours(datetime) * SIDEREAL_RATE);

    trace!("gst: jd={jd} jd0={jd_0} gst={gst}h");
    gst
}

/// Local Sidereal Time in hours, range [0, 24).
///
/// `LST = frac((GST + λ/15) / 24) · 24` with λ the observer's longitude in
/// degrees, east positive. The floor-based fraction keeps west longitudes
/// (negative shifts) in range without a modulo.
pub fn local_sidereal_time(datetime: DateTime<Utc>, longitude_deg: f64) -> f64 {
    let gst = greenwich_sidereal_time(datetime);
    fractional_wrap(gst + longitude_deg / 15.0, 24.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn january_zero_is_new_years_eve() {
        let t = Utc.with_ymd_and_hms(2021, 5, 14, 18, 30, 15).unwrap();
        let jan_1 = julian_date(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(january_zero_julian_date(t), jan_1 - 1.0);
    }

    #[test]
    fn january_zero_before_unix_epoch() {
        let t = Utc.with_ymd_and_hms(1950, 7, 2, 23, 59, 59).unwrap();
        let jan_1 = julian_date(Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(january_zero_julian_date(t), jan_1 - 1.0);
    }

    #[test]
    fn decimal_hours_afternoon() {
        let t = Utc.with_ymd_and_hms(2021, 5, 14, 14, 45, 36).unwrap();
        assert!((decimal_hours(t) - 14.76).abs() < 1e-12);
    }

    #[test]
    fn gst_textbook_example() {
        // 1980-04-22 14:36:51.67 UT → GST 4h 40m 5.23s
        let t = Utc.with_ymd_and_hms(1980, 4, 22, 14, 36, 51).unwrap()
            + chrono::Duration::milliseconds(670);
        let gst = greenwich_sidereal_time(t);
        let expected = 4.0 + 40.0 / 60.0 + 5.23 / 3600.0;
        assert!((gst - expected).abs() < 1e-4, "GST = {gst}h, expected {expected}h");
    }

    #[test]
    fn gst_range() {
        for &(y, m, d, h) in &[(1900, 1, 1, 0), (1969, 12, 31, 23), (2000, 1, 1, 12), (2099, 6, 30, 6)] {
            let t = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
            let g = greenwich_sidereal_time(t);
            assert!((0.0..24.0).contains(&g), "GST out of range: {g}");
        }
    }

    #[test]
    fn gst_advances_about_four_minutes_per_day() {
        let a = greenwich_sidereal_time(Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap());
        let b = greenwich_sidereal_time(Utc.with_ymd_and_hms(2021, 5, 15, 0, 0, 0).unwrap());
        assert!((wrap_24(b - a) - SIDEREAL_GAIN_PER_DAY).abs() < 1e-9);
    }

    #[test]
    fn lst_at_greenwich_equals_gst() {
        let t = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
        let gst = greenwich_sidereal_time(t);
        assert!((local_sidereal_time(t, 0.0) - gst).abs() < 1e-12);
    }

    #[test]
    fn lst_west_longitude_wraps_positive() {
        let t = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
        let gst = greenwich_sidereal_time(t);
        let lst = local_sidereal_time(t, -155.468094);
        assert!((0.0..24.0).contains(&lst));
        assert!((lst - wrap_24(gst - 155.468094 / 15.0)).abs() < 1e-9);
    }

    #[test]
    fn lst_east_longitude() {
        let t = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
        let gst = greenwich_sidereal_time(t);
        let lst = local_sidereal_time(t, 150.0);
        assert!((lst - wrap_24(gst + 10.0)).abs() < 1e-9);
    }
}
