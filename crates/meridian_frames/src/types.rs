//! Frame-tagged coordinate value types.
//!
//! Each celestial frame has its own type so a coordinate can never be fed
//! to a transform expecting another frame. All angles are stored in
//! degrees; the `*_rad` accessors exist for trigonometric call sites.

use std::fmt::{Display, Formatter};

use meridian_units::radians;

/// An observer's location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicCoordinate {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    /// Either [-180, 180] or [0, 360) is accepted.
    pub longitude_deg: f64,
    /// Elevation above mean sea level in meters.
    pub elevation_m: f64,
}

impl GeographicCoordinate {
    /// Create a location from latitude and longitude in degrees and elevation
    /// in meters.
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        radians(self.latitude_deg)
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        radians(self.longitude_deg)
    }
}

impl Display for GeographicCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat {:.6}° lon {:.6}° elev {:.1} m",
            self.latitude_deg, self.longitude_deg, self.elevation_m
        )
    }
}

/// Position relative to the celestial equator and the vernal equinox.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialCoordinate {
    /// Right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

impl EquatorialCoordinate {
    /// Create from right ascension and declination in degrees.
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Right ascension in radians.
    pub fn ra_rad(&self) -> f64 {
        radians(self.ra_deg)
    }

    /// Declination in radians.
    pub fn dec_rad(&self) -> f64 {
        radians(self.dec_deg)
    }

    /// Right ascension in hours, range [0, 24).
    pub fn ra_hours(&self) -> f64 {
        self.ra_deg / 15.0
    }
}

impl Display for EquatorialCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RA {:.6}° Dec {:+.6}°", self.ra_deg, self.dec_deg)
    }
}

/// Position relative to the ecliptic (Earth's orbital plane).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EclipticCoordinate {
    /// Ecliptic longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
}

impl EclipticCoordinate {
    /// Create from ecliptic longitude and latitude in degrees.
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    /// Ecliptic longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        radians(self.lon_deg)
    }

    /// Ecliptic latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        radians(self.lat_deg)
    }
}

impl Display for EclipticCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "λ {:.6}° β {:+.6}°", self.lon_deg, self.lat_deg)
    }
}

/// Position relative to an observer's local horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalCoordinate {
    /// Azimuth in degrees from North through East, range [0, 360).
    pub azimuth_deg: f64,
    /// Altitude above the horizon in degrees, range [-90, 90].
    pub altitude_deg: f64,
}

impl HorizontalCoordinate {
    /// Create from azimuth and altitude in degrees.
    pub fn new(azimuth_deg: f64, altitude_deg: f64) -> Self {
        Self {
            azimuth_deg,
            altitude_deg,
        }
    }

    /// Azimuth in radians.
    pub fn azimuth_rad(&self) -> f64 {
        radians(self.azimuth_deg)
    }

    /// Altitude in radians.
    pub fn altitude_rad(&self) -> f64 {
        radians(self.altitude_deg)
    }

    /// Zenith distance in degrees, `90 − altitude`.
    pub fn zenith_distance_deg(&self) -> f64 {
        90.0 - self.altitude_deg
    }

    /// Whether the target is strictly above the geometric horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

impl Display for HorizontalCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Az {:.6}° Alt {:+.6}°", self.azimuth_deg, self.altitude_deg)
    }
}
