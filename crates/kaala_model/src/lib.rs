//! Portable solar/lunar position model.
//!
//! This crate provides:
//! - Degree normalization and wraparound-aware arithmetic
//! - Closed-form Sun longitude and a truncated ELP2000 Moon series
//! - Mean-node Rahu/Ketu and a linear mean-motion fallback tier
//! - Ecliptic→equatorial conversion and horizon altitude
//! - The [`PositionBackend`] seam for plugging in a high-precision
//!   ephemeris, with explicit fallback to the portable model

pub mod angle;
pub mod body;
pub mod equatorial;
pub mod position;
pub mod source;

pub use angle::{forward_arc, normalize_360, wrap_180};
pub use body::{ALL_BODIES, Body};
pub use equatorial::{
    EquatorialPosition, MEAN_OBLIQUITY_DEG, altitude_deg, ecliptic_to_equatorial,
};
pub use position::{
    EclipticPosition, moon_position, rahu_mean_longitude_deg, sun_mean_longitude_deg,
    sun_true_longitude_deg, tropical_position,
};
pub use source::{PositionBackend, ayanamsha_or, position_or_model};
