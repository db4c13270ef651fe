//! Nakshatra (lunar mansion) classification, 27-fold scheme.
//!
//! The ecliptic divides into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, determined by the Moon's absolute sidereal
//! longitude. Each nakshatra has 4 padas (quarters) of 3 deg 20' and a
//! ruling graha in the Vimshottari sequence.

use kaala_model::{Body, normalize_360};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333... degrees.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari lord cycle, repeating three times across the 27 mansions.
const VIMSHOTTARI_LORDS: [Body; 9] = [
    Body::Ketu,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Rahu,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub fn index(self) -> u8 {
        ALL_NAKSHATRAS.iter().position(|&n| n == self).unwrap_or(0) as u8
    }

    /// Ruling graha in the Vimshottari sequence.
    pub fn lord(self) -> Body {
        VIMSHOTTARI_LORDS[self.index() as usize % 9]
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of nakshatra classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Ruling graha of the nakshatra.
    pub lord: Body,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_DEG).floor() as u8).min(26);
    let degrees_in = lon - (idx as f64) * NAKSHATRA_SPAN_DEG;
    let pada = ((degrees_in / PADA_SPAN_DEG).floor() as u8).min(3) + 1;
    let nakshatra = ALL_NAKSHATRAS[idx as usize];
    NakshatraPosition {
        nakshatra,
        nakshatra_index: idx,
        pada,
        degrees_in_nakshatra: degrees_in,
        lord: nakshatra.lord(),
    }
}

/// Convenience: nakshatra from tropical longitude + ayanamsha system.
pub fn nakshatra_from_tropical(
    tropical_lon_deg: f64,
    system: AyanamshaSystem,
    jd_utc: f64,
) -> NakshatraPosition {
    nakshatra_from_longitude(tropical_lon_deg - ayanamsha_deg(system, jd_utc))
}
