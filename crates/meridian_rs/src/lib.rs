//! Positional astronomy for an observer on Earth.
//!
//! Re-exports the whole meridian chain so callers need a single dependency:
//! Julian Date and sidereal time, hour angle and obliquity, frame
//! transforms, the Sun's position, and atmospheric corrections. The
//! [`observe`] family chains them end to end.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use meridian_rs::*;
//!
//! let t = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
//! let mauna_kea = GeographicCoordinate::new(19.8207, -155.468094, 4205.0);
//! let betelgeuse = EquatorialCoordinate::new(88.7929583, 7.4070639);
//!
//! let obs = observe(&t, &mauna_kea, &betelgeuse, &AtmosphericConditions::default()).unwrap();
//! assert!(obs.is_visible());
//! println!("altitude {}", format_dms(obs.apparent.altitude_deg).unwrap());
//! ```

pub mod error;
pub mod observe;

pub use error::MeridianError;
pub use observe::{Observation, format_dms, observe, observe_sun};

pub use meridian_units::{
    DMS_TEMPLATE, FormatError, Hdms, degrees, degrees_to_hdms, format_decimal_to_dms,
    fractional_wrap, hdms_to_degrees, radians, wrap_24, wrap_360,
};

pub use meridian_time::{
    J1858, J1900, J1970, J2000, TimeError, datetime_from_julian_date, greenwich_sidereal_time,
    julian_centuries, julian_date, local_sidereal_time, modified_julian_date, universal_time,
};

pub use meridian_frames::{
    CoordinateError, EclipticCoordinate, EquatorialCoordinate, GeographicCoordinate,
    HorizontalCoordinate, ecliptic_to_equatorial, equatorial_to_ecliptic,
    equatorial_to_horizontal, hour_angle, obliquity_of_the_ecliptic,
    try_equatorial_to_horizontal,
};

// Solar functions keep their module path; their names overlap the frame
// transforms.
pub use meridian_solar as sun;

pub use meridian_atmos::{
    AtmosphericConditions, airmass, apparent_altitude, refraction, refraction_under,
};
