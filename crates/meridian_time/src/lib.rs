//! Time standards for the meridian chain.
//!
//! This crate provides:
//! - Julian Date, Modified Julian Date and Julian centuries since J2000.0
//! - Universal Time normalization of zoned instants
//! - Greenwich and Local Sidereal Time
//!
//! Every function takes a `chrono::DateTime<Utc>`; instants in other zones
//! go through [`universal_time`] (or `with_timezone(&Utc)`) first.

pub mod error;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J1858, J1900, J1970, J2000, MILLISECONDS_PER_DAY,
    datetime_from_julian_date, julian_centuries, julian_date, modified_julian_date,
    universal_time,
};
pub use sidereal::{greenwich_sidereal_time, local_sidereal_time};
