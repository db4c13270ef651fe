//! Result types for panchanga computation.
//!
//! All aggregates are read-only snapshots for one (instant, location,
//! ayanamsha system) triple; nothing is shared or mutated between two
//! computations.

use kaala_model::Body;
use kaala_time::Instant;
use kaala_vedic::{AyanamshaValue, Karana, MoonPhase, Nakshatra, Paksha, Vaar, Yoga};

/// A half-open window between two instants. Invariant: start < end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstantWindow {
    pub start: Instant,
    pub end: Instant,
}

/// Tithi (lunar day) with its end transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// Paksha (Shukla = waxing, Krishna = waning).
    pub paksha: Paksha,
    /// 1-based number within the paksha (1-15).
    pub number: u8,
    /// Traditional name (Pratipada .. Purnima/Amavasya).
    pub name: &'static str,
    /// Elongation progress through this tithi, [0, 100).
    pub percentage_complete: f64,
    /// When this tithi ends, when found within the search window.
    pub ends_at: Option<Instant>,
}

/// Nakshatra (lunar mansion) with its end transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 1-based number (1 = Ashwini .. 27 = Revati).
    pub number: u8,
    /// Pada (quarter), 1-4.
    pub pada: u8,
    /// Vimshottari lord of the nakshatra.
    pub lord: Body,
    /// When the Moon leaves this nakshatra, when found.
    pub ends_at: Option<Instant>,
}

/// Yoga with its end transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// The yoga.
    pub yoga: Yoga,
    /// 1-based number (1 = Vishkambha .. 27 = Vaidhriti).
    pub number: u8,
    /// When this yoga ends, when found.
    pub ends_at: Option<Instant>,
}

/// Karana (half-tithi) with its end transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// The karana.
    pub karana: Karana,
    /// 1-based number within the synodic month (1-60).
    pub number: u8,
    /// When this karana ends, when found.
    pub ends_at: Option<Instant>,
}

/// Horizon events of the civil day, each absent in polar conditions or
/// when the scan finds no crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonTimes {
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
    pub moonrise: Option<Instant>,
    pub moonset: Option<Instant>,
}

/// The three kalam windows of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalamInfo {
    pub rahu: InstantWindow,
    pub gulikai: InstantWindow,
    pub yamaganda: InstantWindow,
}

/// The ten muhurta windows of the day, plus the ones containing the
/// requested instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MuhurtaInfo {
    pub windows: [(&'static str, InstantWindow); 10],
    /// Names of windows containing the requested instant.
    pub active: Vec<&'static str>,
}

/// Complete panchanga snapshot for one (instant, location, system) triple.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangaResult {
    /// The instant the caller asked about.
    pub instant: Instant,
    /// The instant Sun/Moon longitudes were evaluated at (the day's
    /// sunrise under the traditional policy, else `instant` itself).
    pub evaluated_at: Instant,
    /// Whether the sunrise substitution was applied.
    pub evaluated_at_sunrise: bool,
    /// Ayanamsha system and degree used for sidereal longitudes.
    pub ayanamsha: AyanamshaValue,
    /// Vaar (weekday) of the civil date.
    pub vaar: Vaar,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    /// 8-way Moon phase label.
    pub moon_phase: MoonPhase,
    pub horizon: HorizonTimes,
    /// Kalam windows; absent when sunrise/sunset are absent.
    pub kalam: Option<KalamInfo>,
    /// Muhurta windows; absent when sunrise/sunset are absent.
    pub muhurta: Option<MuhurtaInfo>,
}
