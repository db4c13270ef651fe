//! Panchanga derivation: element end-time search and the calendar-day
//! orchestrator.
//!
//! This crate provides:
//! - A generic wraparound-safe boundary-crossing search over time
//! - [`compute_panchanga`]: the single entry point composing positions,
//!   ayanamsha, horizon events, the five elements with end times, and
//!   the kalam/muhurta window tables

pub mod error;
pub mod panchanga;
pub mod panchanga_types;
pub mod transition;

pub use error::PanchangaError;
pub use panchanga::{PanchangaConfig, compute_panchanga};
pub use panchanga_types::{
    HorizonTimes, InstantWindow, KalamInfo, KaranaInfo, MuhurtaInfo, NakshatraInfo,
    PanchangaResult, TithiInfo, YogaInfo,
};
pub use transition::{
    DEFAULT_PRECISION_DAYS, ELONGATION_SEARCH_WINDOW_DAYS, NAKSHATRA_SEARCH_WINDOW_DAYS,
    find_boundary_crossing,
};
