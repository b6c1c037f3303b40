//! Error types for time conversions.

use thiserror::Error;

/// Errors from converting a Julian Date back into a UTC instant.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The Julian Date is NaN or infinite.
    #[error("Julian Date {0} is not finite")]
    NonFinite(f64),
    /// The Julian Date falls outside the range a UTC instant can represent.
    #[error("Julian Date {0} is outside the representable UTC range")]
    OutOfRange(f64),
}
