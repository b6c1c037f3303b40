//! Unit helpers shared by every stage of the meridian chain.
//!
//! This crate provides:
//! - Degree ↔ radian conversion at trigonometric boundaries
//! - The wrap helpers used to bring angles and sidereal hours into range
//! - Hours/degrees/minutes/seconds decomposition of decimal degrees
//! - Template-driven DMS formatting for display
//!
//! Public signatures across the workspace stay in degrees (or hours);
//! radians only appear inside trigonometric calls.

pub mod angle;
pub mod error;
pub mod hdms;
pub mod humanize;

pub use angle::{DEGREES_TO_RADIANS, degrees, fractional_wrap, radians, wrap_24, wrap_360};
pub use error::FormatError;
pub use hdms::{Hdms, degrees_to_hdms, hdms_to_degrees};
pub use humanize::{DMS_TEMPLATE, format_decimal_to_dms};
