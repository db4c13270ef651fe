//! Karana (half-tithi) classification from Moon-Sun elongation.
//!
//! The synodic month divides into 60 karanas of 6° elongation each,
//! named from 11 types in an irregular cycle: the first 57 slots cycle
//! through the 7 movable karanas (Bava .. Vishti) with period 7, and
//! the final slots take the fixed karanas in sequence. A plain mod-7
//! cycle over all 60 slots is wrong and does not reproduce the
//! traditional calendar.

use kaala_model::normalize_360;

/// Elongation span of one karana: 6 degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Cycle slots occupied by the movable karanas.
const MOVABLE_SLOTS: u8 = 57;

/// The 11 karana types: 7 movable followed by 4 fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The 7 movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

/// The 4 fixed karanas in sequence.
pub const FIXED_KARANAS: [Karana; 4] = [
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this karana is one of the 7 movable types.
    pub const fn is_movable(self) -> bool {
        !matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Result of karana classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    /// The karana.
    pub karana: Karana,
    /// 0-based cycle index within the synodic month (0-59).
    pub karana_index: u8,
    /// 1-based karana number (1-60).
    pub number: u8,
}

/// Classify the karana from Moon-Sun elongation in degrees.
///
/// Cycle index `c = ⌊E/6⌋`. For `c < 57` the karana is movable,
/// `MOVABLE_KARANAS[c mod 7]`, numbered `c + 1`. From `c = 57` the
/// fixed sequence takes over, numbered `58 + (c − 57)` and clamped at
/// the 60th slot.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let e = normalize_360(elongation_deg);
    let c = ((e / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    if c < MOVABLE_SLOTS {
        KaranaPosition {
            karana: MOVABLE_KARANAS[(c % 7) as usize],
            karana_index: c,
            number: c + 1,
        }
    } else {
        let fixed = (c - MOVABLE_SLOTS).min(3);
        KaranaPosition {
            karana: FIXED_KARANAS[fixed as usize],
            karana_index: c,
            number: (58 + (c - MOVABLE_SLOTS)).min(60),
        }
    }
}
