//! Julian Date ⇄ Gregorian calendar conversion.
//!
//! Standard Meeus algorithm (Astronomical Algorithms, ch. 7), Gregorian
//! calendar only. Exact to sub-second precision for years 1 through 9999.
//! There is no leap-second modeling anywhere in this engine: Julian Dates
//! here are plain UTC day counts, and UTC ≈ UT1 is assumed throughout.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` carries the time of day as a fraction (e.g. 20.5 = the 20th
/// at 12:00). Months January and February are folded into the preceding
/// year as months 13 and 14 before the integer arithmetic.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor()
        + day_frac
        + b as f64
        - 1524.5
}

/// Convert a Julian Date back to a Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where `day_frac` carries the time
/// of day in its fractional part.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
    (year, month, day_frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "J2000 = {jd}");
    }

    #[test]
    fn meeus_example() {
        // Meeus ch. 7: 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "sputnik epoch = {jd}");
    }

    #[test]
    fn jan_feb_fold() {
        // 2024-02-29 00:00 (leap day)
        let jd = calendar_to_jd(2024, 2, 29.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 2));
        assert!((d - 29.0).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_sub_second() {
        let cases = [
            (1, 1, 1.25),
            (1582, 10, 15.0),
            (1900, 1, 0.5),
            (2025, 7, 20.791_666_666_7),
            (9999, 12, 31.999),
        ];
        for &(y, m, d) in &cases {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y, m), (y2, m2), "date fields for {y}-{m}");
            // sub-second: 1e-5 day ≈ 0.86 s
            assert!((d - d2).abs() < 1e-5, "{y}-{m}: {d} vs {d2}");
        }
    }

    #[test]
    fn jd_increases_with_time() {
        let a = calendar_to_jd(2025, 7, 20.0);
        let b = calendar_to_jd(2025, 7, 20.5);
        assert!((b - a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn day_of_week_anchor() {
        // 2025-07-20 is a Sunday: (JD_0h + 1.5) mod 7 == 0
        let jd = calendar_to_jd(2025, 7, 20.0);
        let dow = ((jd + 1.5) as i64).rem_euclid(7);
        assert_eq!(dow, 0);
    }
}
