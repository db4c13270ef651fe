//! Civil time, Julian Date conversion, and sidereal time.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions (Meeus)
//! - An [`Instant`] type: civil wall-clock fields + fixed UTC offset
//! - Earth Rotation Angle and GMST for hour-angle work
//!
//! The engine models no leap seconds: UTC ≈ UT1 is assumed, and every
//! Julian Date in the workspace is a UTC day count.

pub mod instant;
pub mod julian;
pub mod sidereal;

pub use instant::Instant;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_deg};
