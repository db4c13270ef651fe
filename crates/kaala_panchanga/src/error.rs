//! Error type for panchanga computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kaala_vedic::VedicError;

/// Errors from the panchanga orchestrator.
///
/// Only invalid inputs are errors. Polar day/night, missing horizon
/// events and unfound transitions are all normal outcomes expressed as
/// `None` fields in the result.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangaError {
    /// The supplied instant has non-finite or out-of-range fields.
    InvalidInstant(&'static str),
    /// Error from the Vedic base layer (invalid location).
    Vedic(VedicError),
}

impl Display for PanchangaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInstant(msg) => write!(f, "invalid instant: {msg}"),
            Self::Vedic(e) => write!(f, "vedic error: {e}"),
        }
    }
}

impl Error for PanchangaError {}

impl From<VedicError> for PanchangaError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}
