//! Error types for checked frame transforms.

use thiserror::Error;

/// Geometry for which the horizontal azimuth is undefined.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoordinateError {
    /// The observer stands on a geographic pole, where every direction is
    /// south (or north) and the azimuth formula divides by `cos φ = 0`.
    #[error("observer latitude {0}° is at a geographic pole")]
    ObserverAtPole(f64),
    /// The target is at the observer's zenith.
    #[error("target is at the zenith; azimuth is undefined")]
    TargetAtZenith,
    /// The target is at the observer's nadir.
    #[error("target is at the nadir; azimuth is undefined")]
    TargetAtNadir,
    /// An input angle is NaN or infinite.
    #[error("{0} is not finite")]
    NonFinite(&'static str),
}
