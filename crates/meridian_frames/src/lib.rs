//! Coordinate frames for positional astronomy.
//!
//! Provides:
//! - Frame-tagged coordinate types (geographic, equatorial, ecliptic, horizontal)
//! - Hour angle and the mean obliquity of the ecliptic
//! - Ecliptic ↔ equatorial and equatorial → horizontal transforms
//!
//! All public angles are in degrees.

pub mod astrometry;
pub mod error;
pub mod transform;
pub mod types;

pub use astrometry::{OBLIQUITY_J2000_DEG, hour_angle, obliquity_of_the_ecliptic};
pub use error::CoordinateError;
pub use transform::{
    DEGENERATE_TOLERANCE_DEG, ecliptic_to_equatorial, equatorial_to_ecliptic,
    equatorial_to_horizontal, try_equatorial_to_horizontal,
};
pub use types::{
    EclipticCoordinate, EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate,
};
