//! Portable closed-form ecliptic positions for Sun and Moon.
//!
//! The Sun uses the standard low-precision true-longitude formula
//! (good to ~0.01°); the Moon a truncated ELP2000 series of 24
//! longitude and 10 latitude terms (good to ~0.1°). The lunar nodes are
//! mean-element points, and the remaining planets fall back to a linear
//! mean-motion model, a degraded-accuracy tier callers should treat as
//! a placeholder until a high-precision backend is plugged in.
//!
//! All positions are geocentric, tropical (equinox-of-date longitudes
//! are approximated by the J2000-referenced series; the difference is
//! absorbed by the ayanamsha layer's tolerance), computed fresh per
//! query and never cached.

use kaala_time::J2000_JD;

use crate::angle::normalize_360;
use crate::body::Body;

/// Geocentric ecliptic position of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
}

/// Sun's true ecliptic longitude at a UTC Julian Date, degrees.
///
/// λ = L + 1.915°·sin g + 0.020°·sin 2g with
/// L = 280.460° + 0.9856474°·d, g = 357.528° + 0.9856003°·d,
/// d = days since J2000.0. Solar ecliptic latitude is treated as 0.
pub fn sun_true_longitude_deg(jd_utc: f64) -> f64 {
    let d = jd_utc - J2000_JD;
    let l = 280.460 + 0.985_647_4 * d;
    let g = (357.528 + 0.985_600_3 * d).to_radians();
    normalize_360(l + 1.915 * g.sin() + 0.020 * (2.0 * g).sin())
}

/// Sun's mean longitude (no equation of center), degrees.
///
/// Used by the horizon solver's transit correction.
pub fn sun_mean_longitude_deg(jd_utc: f64) -> f64 {
    normalize_360(280.460 + 0.985_647_4 * (jd_utc - J2000_JD))
}

/// ELP2000 truncated longitude terms: (coeff_1e6_deg, [d, m, mp, f] multipliers).
///
/// Coefficients in millionths of a degree over the Delaunay arguments
/// D (mean elongation), M (solar anomaly), M′ (lunar anomaly),
/// F (argument of latitude).
#[rustfmt::skip]
const MOON_LONGITUDE_TERMS: [(f64, [i8; 4]); 24] = [
    (6_288_774.0, [ 0,  0,  1,  0]),
    (1_274_027.0, [ 2,  0, -1,  0]),
    (  658_314.0, [ 2,  0,  0,  0]),
    (  213_618.0, [ 0,  0,  2,  0]),
    ( -185_116.0, [ 0,  1,  0,  0]),
    ( -114_332.0, [ 0,  0,  0,  2]),
    (   58_793.0, [ 2,  0, -2,  0]),
    (   57_066.0, [ 2, -1, -1,  0]),
    (   53_322.0, [ 2,  0,  1,  0]),
    (   45_758.0, [ 2, -1,  0,  0]),
    (  -40_923.0, [ 0,  1, -1,  0]),
    (  -34_720.0, [ 1,  0,  0,  0]),
    (  -30_383.0, [ 0,  1,  1,  0]),
    (   15_327.0, [ 2,  0,  0, -2]),
    (  -12_528.0, [ 0,  0,  1,  2]),
    (   10_980.0, [ 0,  0,  1, -2]),
    (   10_675.0, [ 4,  0, -1,  0]),
    (   10_034.0, [ 0,  0,  3,  0]),
    (    8_548.0, [ 4,  0, -2,  0]),
    (   -7_888.0, [ 2,  1, -1,  0]),
    (   -6_766.0, [ 2,  1,  0,  0]),
    (   -5_163.0, [ 1,  0, -1,  0]),
    (    4_987.0, [ 1,  1,  0,  0]),
    (    4_036.0, [ 2, -1,  1,  0]),
];

/// ELP2000 truncated latitude terms: (coeff_1e6_deg, [d, m, mp, f] multipliers).
#[rustfmt::skip]
const MOON_LATITUDE_TERMS: [(f64, [i8; 4]); 10] = [
    (5_128_122.0, [ 0,  0,  0,  1]),
    (  280_602.0, [ 0,  0,  1,  1]),
    (  277_693.0, [ 0,  0,  1, -1]),
    (  173_237.0, [ 2,  0,  0, -1]),
    (   55_413.0, [ 2,  0, -1,  1]),
    (   46_271.0, [ 2,  0, -1, -1]),
    (   32_573.0, [ 2,  0,  0,  1]),
    (   17_198.0, [ 0,  0,  2,  1]),
    (    9_266.0, [ 2,  0,  1, -1]),
    (    8_822.0, [ 0,  0,  2, -1]),
];

/// Delaunay fundamental arguments at T centuries since J2000, radians.
///
/// Returns `[D, M, M′, F]`.
fn delaunay_arguments(t: f64) -> [f64; 4] {
    let d = normalize_360(297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t);
    let m = normalize_360(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t);
    let mp = normalize_360(134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t);
    let f = normalize_360(93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t);
    [d.to_radians(), m.to_radians(), mp.to_radians(), f.to_radians()]
}

/// Moon's geocentric ecliptic longitude and latitude at a UTC Julian Date.
///
/// Truncated ELP2000, accuracy ~0.1°.
pub fn moon_position(jd_utc: f64) -> EclipticPosition {
    let t = (jd_utc - J2000_JD) / 36525.0;
    let lp = normalize_360(218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t);
    let [d, m, mp, f] = delaunay_arguments(t);

    let arg = |mul: &[i8; 4]| -> f64 {
        mul[0] as f64 * d + mul[1] as f64 * m + mul[2] as f64 * mp + mul[3] as f64 * f
    };

    let mut sum_l = 0.0;
    for (coeff, mul) in &MOON_LONGITUDE_TERMS {
        sum_l += coeff * arg(mul).sin();
    }
    let mut sum_b = 0.0;
    for (coeff, mul) in &MOON_LATITUDE_TERMS {
        sum_b += coeff * arg(mul).sin();
    }

    EclipticPosition {
        longitude_deg: normalize_360(lp + sum_l / 1e6),
        latitude_deg: sum_b / 1e6,
    }
}

/// Mean ascending-node (Rahu) longitude at a UTC Julian Date, degrees.
pub fn rahu_mean_longitude_deg(jd_utc: f64) -> f64 {
    let t = (jd_utc - J2000_JD) / 36525.0;
    normalize_360(125.044_547_9 - 1934.136_289_1 * t)
}

/// Linear mean-motion position for the fallback tier.
fn mean_motion_position(body: Body, jd_utc: f64) -> EclipticPosition {
    let d = jd_utc - J2000_JD;
    EclipticPosition {
        longitude_deg: normalize_360(
            body.j2000_longitude_deg() + body.mean_motion_deg_per_day() * d,
        ),
        latitude_deg: 0.0,
    }
}

/// Tropical ecliptic position of a body from the portable model.
///
/// Sun and Moon come from the closed-form series above; Rahu/Ketu from
/// the mean node (Ketu = Rahu + 180°, latitude negated, exact for any
/// backend); everything else from the linear mean-motion fallback.
pub fn tropical_position(jd_utc: f64, body: Body) -> EclipticPosition {
    match body {
        Body::Sun => EclipticPosition {
            longitude_deg: sun_true_longitude_deg(jd_utc),
            latitude_deg: 0.0,
        },
        Body::Moon => moon_position(jd_utc),
        Body::Rahu => EclipticPosition {
            longitude_deg: rahu_mean_longitude_deg(jd_utc),
            latitude_deg: 0.0,
        },
        Body::Ketu => {
            let rahu = tropical_position(jd_utc, Body::Rahu);
            EclipticPosition {
                longitude_deg: normalize_360(rahu.longitude_deg + 180.0),
                latitude_deg: -rahu.latitude_deg,
            }
        }
        other => mean_motion_position(other, jd_utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_at_j2000() {
        // Sun near 280.0° ecliptic longitude at J2000.0
        let lam = sun_true_longitude_deg(J2000_JD);
        assert!((lam - 280.0).abs() < 0.5, "sun at J2000 = {lam}");
    }

    #[test]
    fn sun_equinox_2025() {
        // 2025-03-20 ~09:00 UTC vernal equinox: longitude near 0/360
        let jd = kaala_time::calendar_to_jd(2025, 3, 20.375);
        let lam = sun_true_longitude_deg(jd);
        let dist = lam.min(360.0 - lam);
        assert!(dist < 0.1, "equinox longitude = {lam}");
    }

    #[test]
    fn moon_at_j2000() {
        // Meeus-style check: mean longitude 218.32° plus perturbations
        let pos = moon_position(J2000_JD);
        assert!(
            (pos.longitude_deg - 223.3).abs() < 0.5,
            "moon λ at J2000 = {}",
            pos.longitude_deg
        );
        assert!(pos.latitude_deg.abs() < 5.3);
    }

    #[test]
    fn moon_latitude_bounded() {
        for i in 0..200 {
            let jd = J2000_JD + i as f64 * 3.7;
            let pos = moon_position(jd);
            assert!(
                pos.latitude_deg.abs() < 5.4,
                "jd {jd}: β = {}",
                pos.latitude_deg
            );
            assert!((0.0..360.0).contains(&pos.longitude_deg));
        }
    }

    #[test]
    fn moon_daily_motion() {
        let a = moon_position(2_460_876.5).longitude_deg;
        let b = moon_position(2_460_877.5).longitude_deg;
        let motion = crate::angle::forward_arc(a, b);
        // 11.8°..15.4°/day over the anomalistic month
        assert!((11.0..16.0).contains(&motion), "daily motion = {motion}");
    }

    #[test]
    fn ketu_opposes_rahu() {
        for i in 0..50 {
            let jd = J2000_JD + i as f64 * 146.3;
            let rahu = tropical_position(jd, Body::Rahu);
            let ketu = tropical_position(jd, Body::Ketu);
            let sep = crate::angle::forward_arc(rahu.longitude_deg, ketu.longitude_deg);
            assert!((sep - 180.0).abs() < 1e-9, "jd {jd}: sep = {sep}");
            assert_eq!(ketu.latitude_deg, -rahu.latitude_deg);
        }
    }

    #[test]
    fn fallback_planets_normalized() {
        for body in [Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter, Body::Saturn] {
            let pos = tropical_position(2_460_000.5, body);
            assert!((0.0..360.0).contains(&pos.longitude_deg), "{body:?}");
            assert_eq!(pos.latitude_deg, 0.0);
        }
    }
}
