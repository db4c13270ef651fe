//! Eight-way Moon phase label from Moon-Sun elongation.

use kaala_model::normalize_360;

/// Width of one phase band: 45 degrees.
pub const PHASE_BAND_DEG: f64 = 45.0;

/// The eight conventional Moon phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in elongation order.
pub const ALL_PHASES: [MoonPhase; 8] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

/// Bucket the elongation into its 45°-wide phase band.
pub fn phase_from_elongation(elongation_deg: f64) -> MoonPhase {
    let e = normalize_360(elongation_deg);
    let idx = ((e / PHASE_BAND_DEG).floor() as usize).min(7);
    ALL_PHASES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_starts() {
        for (i, phase) in ALL_PHASES.iter().enumerate() {
            let e = i as f64 * PHASE_BAND_DEG;
            assert_eq!(phase_from_elongation(e), *phase, "E = {e}");
        }
    }

    #[test]
    fn full_at_opposition() {
        assert_eq!(phase_from_elongation(180.0), MoonPhase::Full);
        assert_eq!(phase_from_elongation(200.0), MoonPhase::Full);
    }

    #[test]
    fn new_around_conjunction() {
        assert_eq!(phase_from_elongation(0.0), MoonPhase::New);
        assert_eq!(phase_from_elongation(44.9), MoonPhase::New);
        assert_eq!(phase_from_elongation(359.9), MoonPhase::WaningCrescent);
    }

    #[test]
    fn waning_ekadashi_band() {
        assert_eq!(phase_from_elongation(302.9), MoonPhase::LastQuarter);
    }
}
