//! Sunrise/sunset via the hour-angle equation; moonrise/moonset via an
//! altitude scan.
//!
//! Solar events solve `cos H = (sin h0 − sin φ sin δ)/(cos φ cos δ)`
//! for the hour angle at the target depression, seed the event time with
//! `UT = 12h − longitude/15 ∓ H/15`, correct for the equation of time
//! through the mean-Sun-vs-RA offset, and iterate to convergence. The
//! result stays on the Julian Day of the input calendar date: an event
//! past 24h UT is expressed as such, never folded onto an adjacent day.
//!
//! Lunar motion is too fast for the closed-form treatment, so moon
//! events scan altitude in fixed steps across the requested window and
//! refine the first horizon crossing by bisection.
//!
//! Sources: standard astronomical spherical trigonometry (Meeus, USNO,
//! Montenbruck & Pfleger).

use kaala_model::{
    altitude_deg, ecliptic_to_equatorial, moon_position, sun_mean_longitude_deg,
    sun_true_longitude_deg, wrap_180,
};

use crate::error::VedicError;
use crate::riseset_types::{GeoLocation, MoonEvent, RiseSetConfig, RiseSetResult, SunEvent};

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Scan step for moon events in days (~29 minutes).
const MOON_SCAN_STEP_DAYS: f64 = 0.02;

/// Bisection depth for refining a detected moon crossing.
const MOON_BISECTIONS: usize = 40;

/// Compute a solar rise/set event for one calendar date.
///
/// `jd_ut_midnight` is the UTC Julian Date of 0h UT on the input
/// calendar date; the UT-hours solution `12 − lon/15 ∓ H/15` is mapped
/// onto that day and may legitimately exceed 24h for far-western
/// longitudes (the event is never folded onto an adjacent date).
///
/// Returns the event as a UTC Julian Date, or the polar-day /
/// polar-night signal when `|cos H| > 1`. Both signals are ordinary
/// outcomes, not errors; only an invalid location is rejected.
pub fn compute_sun_event(
    jd_ut_midnight: f64,
    location: &GeoLocation,
    event: SunEvent,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    location.validate()?;

    let phi = location.latitude_rad();
    let h0 = (-config.horizon_depression_deg(location.altitude_m)).to_radians();

    // Seed at approximate local solar noon
    let mut jd_event = jd_ut_midnight + 0.5 - location.longitude_deg / 360.0;

    for _ in 0..MAX_ITERATIONS {
        let lambda = sun_true_longitude_deg(jd_event);
        let eq = ecliptic_to_equatorial(lambda, 0.0);
        let dec = eq.dec_deg.to_radians();

        let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }

        let h_hours = cos_h.acos().to_degrees() / 15.0;
        let mut ut_hours = 12.0 - location.longitude_deg / 15.0
            + if event.is_rising() { -h_hours } else { h_hours };

        // Equation-of-time correction: mean Sun runs ahead of or behind
        // the true Sun's right ascension.
        let eot_deg = wrap_180(sun_mean_longitude_deg(jd_event) - eq.ra_deg);
        ut_hours += eot_deg / 15.0;

        let next = jd_ut_midnight + ut_hours / 24.0;
        let correction = next - jd_event;
        jd_event = next;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_utc: jd_event,
        event,
    })
}

/// Moon altitude above the horizon at a UTC Julian Date, degrees.
fn moon_altitude_deg(jd_utc: f64, location: &GeoLocation) -> f64 {
    let pos = moon_position(jd_utc);
    let eq = ecliptic_to_equatorial(pos.longitude_deg, pos.latitude_deg);
    altitude_deg(jd_utc, location.latitude_deg, location.longitude_deg, &eq)
}

/// Locate the first moonrise or moonset in `[jd_utc_start, jd_utc_start
/// + window_days]` by scanning altitude in fixed steps.
///
/// Detects the first sign change of altitude across the depression
/// threshold in the requested direction and refines it by bisection.
/// Returns `None` when no crossing exists in the window (circumpolar or
/// never-risen Moon); callers treat that as "no event", not an error.
pub fn compute_moon_event(
    jd_utc_start: f64,
    window_days: f64,
    location: &GeoLocation,
    event: MoonEvent,
    config: &RiseSetConfig,
) -> Result<Option<f64>, VedicError> {
    location.validate()?;

    let h0 = -config.horizon_depression_deg(location.altitude_m);
    let end = jd_utc_start + window_days;

    let mut t = jd_utc_start;
    let mut prev_above = moon_altitude_deg(t, location) >= h0;
    while t < end {
        let t_next = (t + MOON_SCAN_STEP_DAYS).min(end);
        let above = moon_altitude_deg(t_next, location) >= h0;

        let crossed = if event.is_rising() {
            !prev_above && above
        } else {
            prev_above && !above
        };
        if crossed {
            // Bisect: keep lo on the "before" side of the crossing
            let (mut lo, mut hi) = (t, t_next);
            for _ in 0..MOON_BISECTIONS {
                let mid = 0.5 * (lo + hi);
                let mid_above = moon_altitude_deg(mid, location) >= h0;
                if mid_above == prev_above {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            return Ok(Some(0.5 * (lo + hi)));
        }

        prev_above = above;
        t = t_next;
    }

    Ok(None)
}
