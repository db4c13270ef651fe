//! Vaar (weekday) determination from the civil calendar date.
//!
//! The vaar depends only on the calendar date in the instant's own
//! local frame, never on the time of day. The Julian Day anchor gives
//! 0 = Sunday: JD 2451544.5 + 1.5 falls on the Saturday/Sunday seam of
//! the 7-day cycle.

use kaala_time::calendar_to_jd;

/// The seven vaars, Ravivara (Sunday) through Shanivara (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All 7 vaars in order (0 = Ravivara/Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    /// English weekday name.
    pub const fn weekday_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 0-based index (Ravivara = 0 .. Shanivara = 6).
    pub fn index(self) -> u8 {
        ALL_VAARS.iter().position(|&v| v == self).unwrap_or(0) as u8
    }
}

/// Vaar of a civil calendar date (local frame fields).
pub fn vaar_from_civil_date(year: i32, month: u32, day: u32) -> Vaar {
    let jd_midnight = calendar_to_jd(year, month, day as f64);
    let idx = ((jd_midnight + 1.5) as i64).rem_euclid(7);
    ALL_VAARS[idx as usize]
}
