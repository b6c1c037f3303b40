//! Julian Date and Universal Time.
//!
//! The Julian Date is a continuous count of days from noon on 1 January
//! 4713 BC (Julian proleptic calendar). JD 2440587.5 is midnight UTC on
//! 1 January 1970, so a Unix timestamp in milliseconds maps onto it with a
//! single scale and offset.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::TimeError;

/// JD of 1858-11-17 00:00 UTC, the origin of the Modified Julian Date.
pub const J1858: f64 = 2_400_000.5;

/// JD of 1900-01-00 12:00 (1899-12-31 noon), the B1900-era sidereal epoch.
pub const J1900: f64 = 2_415_020.0;

/// JD of the Unix epoch, 1970-01-01 00:00 UTC.
pub const J1970: f64 = 2_440_587.5;

/// JD of the J2000.0 epoch, 2000-01-01 12:00 TT.
pub const J2000: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Milliseconds in a civil day.
pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of a UTC instant.
///
/// `JD = ms_since_unix_epoch / 86400000 + 2440587.5`
///
/// Resolution is limited to whole milliseconds; any sub-millisecond part of
/// the instant is dropped (floored) before conversion.
pub fn julian_date(datetime: DateTime<Utc>) -> f64 {
    datetime.timestamp_millis() as f64 / MILLISECONDS_PER_DAY + J1970
}

/// Modified Julian Date, `JD − 2400000.5`.
pub fn modified_julian_date(datetime: DateTime<Utc>) -> f64 {
    julian_date(datetime) - J1858
}

/// Julian centuries elapsed since J2000.0, `(JD − 2451545.0) / 36525`.
///
/// Negative before J2000.0. Every series expansion in the workspace is a
/// polynomial in this quantity.
pub fn julian_centuries(datetime: DateTime<Utc>) -> f64 {
    (julian_date(datetime) - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// The UTC instant of a Julian Date, rounded to the nearest millisecond.
///
/// Inverse of [`julian_date`] for instants with millisecond resolution.
pub fn datetime_from_julian_date(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFinite(jd));
    }
    let ms = ((jd - J1970) * MILLISECONDS_PER_DAY).round();
    DateTime::from_timestamp_millis(ms as i64).ok_or(TimeError::OutOfRange(jd))
}

/// Normalize an instant in any time zone to UTC by way of its Julian Date.
///
/// The result carries no zone residue and is truncated to millisecond
/// resolution. Applying it twice gives the same instant as applying it once.
pub fn universal_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<DateTime<Utc>, TimeError> {
    datetime_from_julian_date(julian_date(datetime.with_timezone(&Utc)))
}
