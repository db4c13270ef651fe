//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Vedic base calculations.
///
/// Only genuinely invalid inputs surface here. Astronomical edge cases
/// (polar day/night, absent transitions, unavailable backends) are
/// ordinary outcomes carried as enum results or `Option`, never errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Invalid or non-finite instant.
    InvalidInstant(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidInstant(msg) => write!(f, "invalid instant: {msg}"),
        }
    }
}

impl Error for VedicError {}
