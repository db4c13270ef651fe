//! Ecliptic → equatorial conversion and horizon altitude.
//!
//! Uses a fixed mean obliquity; the sub-0.01° drift of the true
//! obliquity over the engine's accuracy horizon is negligible next to
//! the truncated lunar series.

use kaala_time::{gmst_deg, local_sidereal_deg};

use crate::angle::normalize_360;

/// Mean obliquity of the ecliptic, degrees.
pub const MEAN_OBLIQUITY_DEG: f64 = 23.439;

/// Equatorial coordinates of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
}

/// Convert ecliptic longitude/latitude to equatorial RA/Dec.
///
/// α = atan2(sin λ cos ε cos β − sin β sin ε, cos λ cos β)
/// δ = asin(sin β cos ε + cos β sin ε sin λ)
pub fn ecliptic_to_equatorial(longitude_deg: f64, latitude_deg: f64) -> EquatorialPosition {
    let lam = longitude_deg.to_radians();
    let beta = latitude_deg.to_radians();
    let eps = MEAN_OBLIQUITY_DEG.to_radians();

    let ra = (lam.sin() * eps.cos() * beta.cos() - beta.sin() * eps.sin())
        .atan2(lam.cos() * beta.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin();

    EquatorialPosition {
        ra_deg: normalize_360(ra.to_degrees()),
        dec_deg: dec.to_degrees(),
    }
}

/// Geocentric altitude of a body above the horizon, degrees.
///
/// sin h = sin φ sin δ + cos φ cos δ cos H, with the hour angle H from
/// local sidereal time minus right ascension. Topocentric parallax is
/// not modeled; the horizon depression config absorbs the difference at
/// the accuracy this engine targets.
pub fn altitude_deg(
    jd_utc: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    equatorial: &EquatorialPosition,
) -> f64 {
    let lst = local_sidereal_deg(gmst_deg(jd_utc), longitude_deg);
    let ha = normalize_360(lst - equatorial.ra_deg).to_radians();
    let phi = latitude_deg.to_radians();
    let dec = equatorial.dec_deg.to_radians();
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * ha.cos())
        .asin()
        .to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equinox_points_on_equator() {
        for lon in [0.0, 180.0] {
            let eq = ecliptic_to_equatorial(lon, 0.0);
            assert!(eq.dec_deg.abs() < 1e-9, "λ = {lon}: δ = {}", eq.dec_deg);
        }
    }

    #[test]
    fn solstice_declination_is_obliquity() {
        let summer = ecliptic_to_equatorial(90.0, 0.0);
        assert!((summer.dec_deg - MEAN_OBLIQUITY_DEG).abs() < 1e-9);
        let winter = ecliptic_to_equatorial(270.0, 0.0);
        assert!((winter.dec_deg + MEAN_OBLIQUITY_DEG).abs() < 1e-9);
    }

    #[test]
    fn ra_quadrant_follows_longitude() {
        // RA stays in the same quadrant as λ for β = 0
        let eq = ecliptic_to_equatorial(45.0, 0.0);
        assert!((0.0..90.0).contains(&eq.ra_deg), "RA = {}", eq.ra_deg);
        let eq = ecliptic_to_equatorial(225.0, 0.0);
        assert!((180.0..270.0).contains(&eq.ra_deg), "RA = {}", eq.ra_deg);
    }

    #[test]
    fn altitude_bounded() {
        let eq = ecliptic_to_equatorial(118.0, 0.0);
        for i in 0..24 {
            let jd = 2_460_876.5 + i as f64 / 24.0;
            let alt = altitude_deg(jd, 49.888, -119.496, &eq);
            assert!((-90.0..=90.0).contains(&alt));
        }
    }

    #[test]
    fn body_culminates_near_latitude_complement() {
        // A δ=20.5° body at φ=49.888 culminates at h = 90 − φ + δ ≈ 60.6°
        let eq = EquatorialPosition {
            ra_deg: 120.42,
            dec_deg: 20.5,
        };
        let mut max_alt = -90.0_f64;
        for i in 0..1440 {
            let jd = 2_460_876.5 + i as f64 / 1440.0;
            max_alt = max_alt.max(altitude_deg(jd, 49.888, -119.496, &eq));
        }
        assert!((max_alt - 60.6).abs() < 0.2, "max altitude = {max_alt}");
    }
}
