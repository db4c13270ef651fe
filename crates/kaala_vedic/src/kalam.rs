//! Kalam (inauspicious period) tables: Rahu, Gulikai, Yamaganda.
//!
//! The span from sunrise to sunset divides into 8 equal parts; each
//! kalam occupies one part, selected by a fixed weekday table. The
//! tables use the period-index-from-sunrise convention (Rahu Kalam on
//! Ravivara is the 8th part of the day).

use crate::vaar::Vaar;

/// A half-open time window in UTC Julian Dates. Invariant: start < end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JdWindow {
    pub start_jd_utc: f64,
    pub end_jd_utc: f64,
}

impl JdWindow {
    pub fn new(start_jd_utc: f64, end_jd_utc: f64) -> Self {
        Self {
            start_jd_utc,
            end_jd_utc,
        }
    }

    /// Window length in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd_utc - self.start_jd_utc
    }

    /// Whether the half-open window contains the given instant.
    pub fn contains(&self, jd_utc: f64) -> bool {
        jd_utc >= self.start_jd_utc && jd_utc < self.end_jd_utc
    }
}

/// The three kalams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kalam {
    Rahu,
    Gulikai,
    Yamaganda,
}

impl Kalam {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rahu => "Rahu Kalam",
            Self::Gulikai => "Gulikai Kalam",
            Self::Yamaganda => "Yamaganda Kalam",
        }
    }
}

/// 0-based day part (of 8) per weekday, Ravivara..Shanivara.
const RAHU_PARTS: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];
const GULIKAI_PARTS: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];
const YAMAGANDA_PARTS: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

/// The three kalam windows of one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalamPeriods {
    pub rahu: JdWindow,
    pub gulikai: JdWindow,
    pub yamaganda: JdWindow,
}

impl KalamPeriods {
    /// The windows with their names, in Rahu/Gulikai/Yamaganda order.
    pub fn named(&self) -> [(Kalam, JdWindow); 3] {
        [
            (Kalam::Rahu, self.rahu),
            (Kalam::Gulikai, self.gulikai),
            (Kalam::Yamaganda, self.yamaganda),
        ]
    }
}

/// Day part index (0-based, of 8) occupied by a kalam on a weekday.
pub fn kalam_part_index(kalam: Kalam, vaar: Vaar) -> u8 {
    let table = match kalam {
        Kalam::Rahu => &RAHU_PARTS,
        Kalam::Gulikai => &GULIKAI_PARTS,
        Kalam::Yamaganda => &YAMAGANDA_PARTS,
    };
    table[vaar.index() as usize]
}

/// Compute the three kalam windows from the day's sunrise and sunset.
///
/// Callers guarantee `sunrise < sunset` (both from the same civil day);
/// when either is absent (polar day/night) there are no kalam windows
/// to compute and this function is simply not called.
pub fn kalam_periods(sunrise_jd_utc: f64, sunset_jd_utc: f64, vaar: Vaar) -> KalamPeriods {
    let part = (sunset_jd_utc - sunrise_jd_utc) / 8.0;
    let window = |idx: u8| {
        let start = sunrise_jd_utc + idx as f64 * part;
        JdWindow::new(start, start + part)
    };
    KalamPeriods {
        rahu: window(kalam_part_index(Kalam::Rahu, vaar)),
        gulikai: window(kalam_part_index(Kalam::Gulikai, vaar)),
        yamaganda: window(kalam_part_index(Kalam::Yamaganda, vaar)),
    }
}
