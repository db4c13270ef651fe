//! Time-domain search for angular boundary crossings.
//!
//! Every panchanga element is a segment of some monotonically-increasing
//! (mod 360) angular quantity: elongation for tithi/karana, the Sun+Moon
//! sidereal sum for yoga, the Moon's sidereal longitude for nakshatra.
//! The element's end time is the instant that quantity reaches the next
//! segment boundary. Progress is measured as forward arc from the
//! starting value, which makes the bisection wraparound-safe.

use kaala_model::forward_arc;

/// Default bracket-narrowing precision: 60 seconds.
pub const DEFAULT_PRECISION_DAYS: f64 = 60.0 / 86_400.0;

/// Search window for elongation-rate quantities (tithi, karana, yoga).
/// Moon-Sun relative motion is ~12.2°/day, so one 12° tithi can stretch
/// past a day; two days always brackets the next boundary.
pub const ELONGATION_SEARCH_WINDOW_DAYS: f64 = 2.0;

/// Search window for the Moon's own longitude (nakshatra): ~13.2°/day
/// over a 13.33° span, bracketed comfortably by three days.
pub const NAKSHATRA_SEARCH_WINDOW_DAYS: f64 = 3.0;

/// Hard cap on bisection steps; the precision bound is reached long
/// before this for any sane window.
const MAX_BISECTIONS: usize = 64;

/// Find when `angle_fn` (degrees, monotonically increasing mod 360 over
/// the window) reaches `target_deg`, searching forward from `start_jd`.
///
/// Returns the crossing as a UTC Julian Date once the bracket is
/// narrower than `precision_days`, or `None` when the window does not
/// bracket the crossing (caller widens the window or reports the end
/// time as unknown).
pub fn find_boundary_crossing(
    start_jd: f64,
    angle_fn: impl Fn(f64) -> f64,
    target_deg: f64,
    window_days: f64,
    precision_days: f64,
) -> Option<f64> {
    if !start_jd.is_finite() || window_days <= 0.0 || precision_days <= 0.0 {
        return None;
    }

    let start_angle = angle_fn(start_jd);
    let needed = forward_arc(start_angle, target_deg);

    let mut lo = start_jd;
    let mut hi = start_jd + window_days;
    if forward_arc(start_angle, angle_fn(hi)) < needed {
        return None;
    }

    for _ in 0..MAX_BISECTIONS {
        if hi - lo < precision_days {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if forward_arc(start_angle, angle_fn(mid)) >= needed {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Some(0.5 * (lo + hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaala_model::normalize_360;

    #[test]
    fn linear_rate_crossing_matches_analytic() {
        // 10°/day from 5°: reaches 25° after exactly 2 days
        let f = |jd: f64| normalize_360(5.0 + 10.0 * (jd - 2_451_545.0));
        let found =
            find_boundary_crossing(2_451_545.0, f, 25.0, 5.0, DEFAULT_PRECISION_DAYS).unwrap();
        assert!(
            (found - 2_451_547.0).abs() < DEFAULT_PRECISION_DAYS,
            "found = {found}"
        );
    }

    #[test]
    fn crossing_through_the_seam() {
        // Starts at 355°, target 5°: 1 day at 10°/day
        let f = |jd: f64| normalize_360(355.0 + 10.0 * (jd - 2_451_545.0));
        let found =
            find_boundary_crossing(2_451_545.0, f, 5.0, 3.0, DEFAULT_PRECISION_DAYS).unwrap();
        assert!((found - 2_451_546.0).abs() < DEFAULT_PRECISION_DAYS);
    }

    #[test]
    fn none_when_window_too_short() {
        let f = |jd: f64| normalize_360(5.0 + 10.0 * (jd - 2_451_545.0));
        // 25° away at 10°/day needs 2 days; 1-day window cannot bracket it
        assert!(find_boundary_crossing(2_451_545.0, f, 30.0, 1.0, DEFAULT_PRECISION_DAYS).is_none());
    }

    #[test]
    fn tighter_precision_narrows_result() {
        let f = |jd: f64| normalize_360(10.0 * (jd - 2_451_545.0));
        let coarse = find_boundary_crossing(2_451_545.0, f, 15.0, 3.0, 0.01).unwrap();
        let fine = find_boundary_crossing(2_451_545.0, f, 15.0, 3.0, 1e-7).unwrap();
        assert!((fine - 2_451_546.5).abs() < 1e-6);
        assert!((coarse - 2_451_546.5).abs() < 0.01);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let f = |_: f64| 0.0;
        assert!(find_boundary_crossing(f64::NAN, f, 10.0, 1.0, 1e-3).is_none());
        assert!(find_boundary_crossing(0.0, f, 10.0, -1.0, 1e-3).is_none());
        assert!(find_boundary_crossing(0.0, f, 10.0, 1.0, 0.0).is_none());
    }

    #[test]
    fn target_equal_to_start_returns_immediately() {
        // needed arc is 0: any bracket satisfies it at once
        let f = |jd: f64| normalize_360(10.0 * (jd - 2_451_545.0));
        let found =
            find_boundary_crossing(2_451_545.0, f, 0.0, 1.0, DEFAULT_PRECISION_DAYS).unwrap();
        assert!((found - 2_451_545.0).abs() < DEFAULT_PRECISION_DAYS);
    }
}
