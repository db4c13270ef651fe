//! Civil wall-clock instant with a fixed UTC offset.
//!
//! Provides [`Instant`], the canonical timestamp used throughout the
//! engine. The calendar fields are local wall-clock values; the offset
//! pins them to an absolute UTC moment, so two `Instant`s with different
//! offsets can denote the same Julian Date. Downstream code always works
//! from the UTC Julian Date; the local fields exist for civil-day
//! anchoring (weekday, kalam windows) and display.

use crate::julian::{calendar_to_jd, jd_to_calendar};

/// An absolute timestamp: local calendar fields plus a fixed UTC offset.
///
/// Immutable once constructed. The offset is in hours, east positive
/// (e.g. -7.0 for Pacific Daylight Time, 5.5 for IST).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub utc_offset_hours: f64,
}

impl Instant {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Construct from UTC fields (offset 0).
    pub fn from_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self::new(year, month, day, hour, minute, second, 0.0)
    }

    /// Whether all time fields are finite and the calendar fields are in
    /// range. Computation entry points reject anything else.
    pub fn is_valid(&self) -> bool {
        self.second.is_finite()
            && self.utc_offset_hours.is_finite()
            && self.utc_offset_hours.abs() <= 18.0
            && (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && (0.0..60.0).contains(&self.second)
    }

    /// UTC Julian Date of this instant.
    ///
    /// Derived from the calendar fields and the offset only; machine
    /// timezone never enters, so the same `Instant` always yields the
    /// same Julian Date.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac) - self.utc_offset_hours / 24.0
    }

    /// Reconstruct an instant from a UTC Julian Date, expressing the
    /// calendar fields in the given offset.
    pub fn from_jd_utc(jd_utc: f64, utc_offset_hours: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_utc + utc_offset_hours / 24.0);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// UTC Julian Date of this instant's local civil midnight.
    ///
    /// Anchor for everything keyed to the calendar day (weekday, horizon
    /// scans, kalam/muhurta windows).
    pub fn local_midnight_jd_utc(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64) - self.utc_offset_hours / 24.0
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let offset_min = (self.utc_offset_hours * 60.0).round() as i32;
        let (sign, abs_min) = if offset_min < 0 {
            ('-', -offset_min)
        } else {
            ('+', offset_min)
        };
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            whole,
            sign,
            abs_min / 60,
            abs_min % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn utc_instant_jd() {
        let t = Instant::from_utc(2000, 1, 1, 12, 0, 0.0);
        assert!((t.to_jd_utc() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn offset_shifts_jd() {
        // 12:00-07:00 is 19:00 UTC
        let local = Instant::new(2025, 7, 20, 12, 0, 0.0, -7.0);
        let utc = Instant::from_utc(2025, 7, 20, 19, 0, 0.0);
        assert!((local.to_jd_utc() - utc.to_jd_utc()).abs() < 1e-9);
    }

    #[test]
    fn jd_roundtrip_keeps_offset() {
        let t = Instant::new(2025, 7, 20, 12, 0, 0.0, -7.0);
        let back = Instant::from_jd_utc(t.to_jd_utc(), -7.0);
        assert_eq!(back.year, 2025);
        assert_eq!(back.month, 7);
        assert_eq!(back.day, 20);
        assert_eq!(back.hour, 12);
        assert_eq!(back.minute, 0);
        assert!(back.second.abs() < 1e-3);
    }

    #[test]
    fn local_midnight_precedes_instant() {
        let t = Instant::new(2025, 7, 20, 12, 0, 0.0, -7.0);
        let mid = t.local_midnight_jd_utc();
        assert!(mid < t.to_jd_utc());
        assert!((t.to_jd_utc() - mid - 0.5).abs() < 1e-9);
    }

    #[test]
    fn validity_checks() {
        assert!(Instant::new(2025, 7, 20, 12, 0, 0.0, -7.0).is_valid());
        assert!(!Instant::new(2025, 13, 20, 12, 0, 0.0, 0.0).is_valid());
        assert!(!Instant::new(2025, 7, 20, 12, 0, f64::NAN, 0.0).is_valid());
        assert!(!Instant::new(2025, 7, 20, 12, 0, 0.0, f64::INFINITY).is_valid());
        assert!(!Instant::new(2025, 7, 20, 24, 0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn display_with_offset() {
        let t = Instant::new(2025, 7, 20, 12, 0, 0.0, -7.0);
        assert_eq!(t.to_string(), "2025-07-20T12:00:00-07:00");
        let u = Instant::new(2025, 7, 20, 5, 30, 0.0, 5.5);
        assert_eq!(u.to_string(), "2025-07-20T05:30:00+05:30");
    }
}
