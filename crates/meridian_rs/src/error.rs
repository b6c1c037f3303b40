//! Unified error type for the facade.

use meridian_frames::CoordinateError;
use meridian_time::TimeError;
use meridian_units::FormatError;
use thiserror::Error;

/// Any failure surfaced by the meridian crates.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MeridianError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
