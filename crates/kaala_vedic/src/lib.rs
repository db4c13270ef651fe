//! Derived Vedic calculations on top of the portable position model.
//!
//! This crate provides:
//! - Ayanamsha computation for 40 sidereal reference systems
//! - Panchanga element classification: tithi, nakshatra, yoga, karana,
//!   vaar, and the 8-way Moon phase
//! - Sunrise/sunset via the hour-angle equation and moonrise/moonset
//!   via an altitude scan
//! - Kalam (Rahu/Gulikai/Yamaganda) and muhurta period tables
//!
//! All functions are pure given their inputs: no shared mutable state,
//! no caches, safe for concurrent use.

pub mod ayanamsha;
pub mod error;
pub mod kalam;
pub mod karana;
pub mod muhurta;
pub mod nakshatra;
pub mod phase;
pub mod riseset;
pub mod riseset_types;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use ayanamsha::{
    ALL_SYSTEMS, AYANAMSHA_EPOCH_JD, AyanamshaSystem, AyanamshaValue, ayanamsha_deg, catalogue,
    jd_to_centuries_1900, lookup, lookup_by_id, lookup_by_name,
};
pub use error::VedicError;
pub use kalam::{JdWindow, Kalam, KalamPeriods, kalam_part_index, kalam_periods};
pub use karana::{
    FIXED_KARANAS, KARANA_SEGMENT_DEG, Karana, KaranaPosition, MOVABLE_KARANAS,
    karana_from_elongation,
};
pub use muhurta::{MuhurtaPeriods, muhurta_periods};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraPosition, PADA_SPAN_DEG,
    nakshatra_from_longitude, nakshatra_from_tropical,
};
pub use phase::{ALL_PHASES, MoonPhase, PHASE_BAND_DEG, phase_from_elongation};
pub use riseset::{compute_moon_event, compute_sun_event};
pub use riseset_types::{GeoLocation, MoonEvent, RiseSetConfig, RiseSetResult, SunEvent};
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, TithiPosition, tithi_from_elongation};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_civil_date};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_sum};
