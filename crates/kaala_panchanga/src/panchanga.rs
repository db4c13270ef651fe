//! Panchanga orchestration: one calendar-day snapshot for an
//! (instant, location, ayanamsha system) triple.
//!
//! Traditional practice evaluates Sun/Moon longitudes at the civil
//! day's sunrise rather than the queried moment; the orchestrator
//! substitutes sunrise when it exists and falls back to the exact
//! requested instant otherwise (and when the policy is switched off).
//! Shared intermediates (body longitudes, ayanamsha, sunrise/sunset)
//! are computed once and reused across the five elements.

use kaala_model::{Body, PositionBackend, ayanamsha_or, forward_arc, normalize_360, position_or_model};
use kaala_time::{Instant, calendar_to_jd};
use kaala_vedic::{
    AyanamshaSystem, AyanamshaValue, GeoLocation, MoonEvent, RiseSetConfig, SunEvent,
    ayanamsha_deg, compute_moon_event, compute_sun_event, kalam_periods,
    karana_from_elongation, muhurta_periods, nakshatra_from_longitude, phase_from_elongation,
    tithi_from_elongation, vaar_from_civil_date, yoga_from_sum,
};
use kaala_vedic::kalam::JdWindow;
use kaala_vedic::karana::KARANA_SEGMENT_DEG;
use kaala_vedic::nakshatra::NAKSHATRA_SPAN_DEG;
use kaala_vedic::tithi::TITHI_SEGMENT_DEG;
use kaala_vedic::yoga::YOGA_SEGMENT_DEG;

use crate::error::PanchangaError;
use crate::panchanga_types::{
    HorizonTimes, InstantWindow, KalamInfo, KaranaInfo, MuhurtaInfo, NakshatraInfo,
    PanchangaResult, TithiInfo, YogaInfo,
};
use crate::transition::{
    DEFAULT_PRECISION_DAYS, ELONGATION_SEARCH_WINDOW_DAYS, NAKSHATRA_SEARCH_WINDOW_DAYS,
    find_boundary_crossing,
};

/// Configuration for one panchanga computation.
///
/// Threaded explicitly through each call; there is no process-wide
/// default system or hidden mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangaConfig {
    /// Sidereal reference system for nakshatra and yoga.
    pub ayanamsha: AyanamshaSystem,
    /// Substitute the day's sunrise as the evaluation epoch when it
    /// exists (traditional practice). When false, or under polar
    /// conditions, the requested instant is used as-is.
    pub evaluate_at_sunrise: bool,
    /// Horizon-event parameters.
    pub riseset: RiseSetConfig,
    /// Bracket precision for element end times, in days.
    pub transition_precision_days: f64,
}

impl Default for PanchangaConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            evaluate_at_sunrise: true,
            riseset: RiseSetConfig::default(),
            transition_precision_days: DEFAULT_PRECISION_DAYS,
        }
    }
}

impl PanchangaConfig {
    /// Default configuration under a different ayanamsha system.
    pub fn with_system(ayanamsha: AyanamshaSystem) -> Self {
        Self {
            ayanamsha,
            ..Default::default()
        }
    }
}

fn window_to_instants(w: JdWindow, offset_hours: f64) -> InstantWindow {
    InstantWindow {
        start: Instant::from_jd_utc(w.start_jd_utc, offset_hours),
        end: Instant::from_jd_utc(w.end_jd_utc, offset_hours),
    }
}

/// Compute the complete panchanga for an instant at a location.
///
/// `backend` optionally supplies high-precision positions; every
/// unavailable answer falls back to the portable model. The function is
/// pure and safe to call concurrently.
pub fn compute_panchanga(
    instant: &Instant,
    location: &GeoLocation,
    config: &PanchangaConfig,
    backend: Option<&dyn PositionBackend>,
) -> Result<PanchangaResult, PanchangaError> {
    if !instant.is_valid() {
        return Err(PanchangaError::InvalidInstant(
            "calendar fields out of range or non-finite",
        ));
    }
    location.validate()?;

    let offset = instant.utc_offset_hours;
    let jd_instant = instant.to_jd_utc();
    // Solar events anchor to 0h UT of the civil date (the hour-angle
    // solution is in UT hours of that date); the lunar scan covers the
    // 24 hours from the civil date's local midnight.
    let jd_ut_midnight = calendar_to_jd(instant.year, instant.month, instant.day as f64);
    let jd_local_midnight = instant.local_midnight_jd_utc();

    let sunrise_jd =
        compute_sun_event(jd_ut_midnight, location, SunEvent::Sunrise, &config.riseset)?.jd_utc();
    let sunset_jd =
        compute_sun_event(jd_ut_midnight, location, SunEvent::Sunset, &config.riseset)?.jd_utc();
    let moonrise_jd = compute_moon_event(
        jd_local_midnight,
        1.0,
        location,
        MoonEvent::Moonrise,
        &config.riseset,
    )?;
    let moonset_jd = compute_moon_event(
        jd_local_midnight,
        1.0,
        location,
        MoonEvent::Moonset,
        &config.riseset,
    )?;

    // Evaluation epoch: sunrise when the policy applies and one exists
    let (jd_eval, evaluated_at_sunrise) = match sunrise_jd {
        Some(jd) if config.evaluate_at_sunrise => (jd, true),
        _ => (jd_instant, false),
    };

    // Shared intermediates, computed once
    let system = config.ayanamsha;
    let sun = position_or_model(backend, jd_eval, Body::Sun);
    let moon = position_or_model(backend, jd_eval, Body::Moon);
    let aya_deg = ayanamsha_or(
        backend,
        jd_eval,
        system.id(),
        ayanamsha_deg(system, jd_eval),
    );

    let elongation = forward_arc(sun.longitude_deg, moon.longitude_deg);
    let moon_sidereal = normalize_360(moon.longitude_deg - aya_deg);
    let sun_sidereal = normalize_360(sun.longitude_deg - aya_deg);
    let sidereal_sum = normalize_360(moon_sidereal + sun_sidereal);

    let tithi_pos = tithi_from_elongation(elongation);
    let nakshatra_pos = nakshatra_from_longitude(moon_sidereal);
    let yoga_pos = yoga_from_sum(sidereal_sum);
    let karana_pos = karana_from_elongation(elongation);

    // End-time searches over the same model/backend the classification used
    let precision = config.transition_precision_days;
    let elongation_at = |jd: f64| {
        let s = position_or_model(backend, jd, Body::Sun);
        let m = position_or_model(backend, jd, Body::Moon);
        forward_arc(s.longitude_deg, m.longitude_deg)
    };
    let moon_sidereal_at = |jd: f64| {
        let m = position_or_model(backend, jd, Body::Moon);
        let aya = ayanamsha_or(backend, jd, system.id(), ayanamsha_deg(system, jd));
        normalize_360(m.longitude_deg - aya)
    };
    let sidereal_sum_at = |jd: f64| {
        let s = position_or_model(backend, jd, Body::Sun);
        let m = position_or_model(backend, jd, Body::Moon);
        let aya = ayanamsha_or(backend, jd, system.id(), ayanamsha_deg(system, jd));
        normalize_360(
            normalize_360(m.longitude_deg - aya) + normalize_360(s.longitude_deg - aya),
        )
    };

    let tithi_end = find_boundary_crossing(
        jd_eval,
        &elongation_at,
        normalize_360((tithi_pos.tithi_index as f64 + 1.0) * TITHI_SEGMENT_DEG),
        ELONGATION_SEARCH_WINDOW_DAYS,
        precision,
    );
    let nakshatra_end = find_boundary_crossing(
        jd_eval,
        &moon_sidereal_at,
        normalize_360((nakshatra_pos.nakshatra_index as f64 + 1.0) * NAKSHATRA_SPAN_DEG),
        NAKSHATRA_SEARCH_WINDOW_DAYS,
        precision,
    );
    let yoga_end = find_boundary_crossing(
        jd_eval,
        &sidereal_sum_at,
        normalize_360((yoga_pos.yoga_index as f64 + 1.0) * YOGA_SEGMENT_DEG),
        ELONGATION_SEARCH_WINDOW_DAYS,
        precision,
    );
    let karana_end = find_boundary_crossing(
        jd_eval,
        &elongation_at,
        normalize_360((karana_pos.karana_index as f64 + 1.0) * KARANA_SEGMENT_DEG),
        ELONGATION_SEARCH_WINDOW_DAYS,
        precision,
    );

    // Vaar comes from the civil date alone, never the time of day
    let vaar = vaar_from_civil_date(instant.year, instant.month, instant.day);

    // Day-division windows need both horizon anchors
    let (kalam, muhurta) = match (sunrise_jd, sunset_jd) {
        (Some(rise), Some(set)) if rise < set => {
            let kalam = kalam_periods(rise, set, vaar);
            let muhurta = muhurta_periods(rise, set);
            let windows = muhurta
                .named()
                .map(|(name, w)| (name, window_to_instants(w, offset)));
            let active = muhurta.active_at(jd_instant);
            (
                Some(KalamInfo {
                    rahu: window_to_instants(kalam.rahu, offset),
                    gulikai: window_to_instants(kalam.gulikai, offset),
                    yamaganda: window_to_instants(kalam.yamaganda, offset),
                }),
                Some(MuhurtaInfo { windows, active }),
            )
        }
        _ => (None, None),
    };

    let to_instant = |jd: Option<f64>| jd.map(|j| Instant::from_jd_utc(j, offset));

    Ok(PanchangaResult {
        instant: *instant,
        evaluated_at: Instant::from_jd_utc(jd_eval, offset),
        evaluated_at_sunrise,
        ayanamsha: AyanamshaValue {
            system,
            system_id: system.id(),
            name: system.name(),
            degree_deg: aya_deg,
            description: system.description(),
        },
        vaar,
        tithi: TithiInfo {
            paksha: tithi_pos.paksha,
            number: tithi_pos.number,
            name: tithi_pos.name(),
            percentage_complete: tithi_pos.percentage_complete,
            ends_at: to_instant(tithi_end),
        },
        nakshatra: NakshatraInfo {
            nakshatra: nakshatra_pos.nakshatra,
            number: nakshatra_pos.nakshatra_index + 1,
            pada: nakshatra_pos.pada,
            lord: nakshatra_pos.lord,
            ends_at: to_instant(nakshatra_end),
        },
        yoga: YogaInfo {
            yoga: yoga_pos.yoga,
            number: yoga_pos.yoga_index + 1,
            ends_at: to_instant(yoga_end),
        },
        karana: KaranaInfo {
            karana: karana_pos.karana,
            number: karana_pos.number,
            ends_at: to_instant(karana_end),
        },
        moon_phase: phase_from_elongation(elongation),
        horizon: HorizonTimes {
            sunrise: to_instant(sunrise_jd),
            sunset: to_instant(sunset_jd),
            moonrise: to_instant(moonrise_jd),
            moonset: to_instant(moonset_jd),
        },
        kalam,
        muhurta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaala_model::EclipticPosition;

    fn kelowna() -> GeoLocation {
        GeoLocation::new(49.8880, -119.4960, 0.0)
    }

    fn scenario_instant() -> Instant {
        Instant::new(2025, 7, 20, 12, 0, 0.0, -7.0)
    }

    #[test]
    fn invalid_instant_rejected() {
        let bad = Instant::new(2025, 7, 20, 12, 0, f64::NAN, -7.0);
        let result = compute_panchanga(&bad, &kelowna(), &PanchangaConfig::default(), None);
        assert!(matches!(result, Err(PanchangaError::InvalidInstant(_))));
    }

    #[test]
    fn invalid_location_rejected() {
        let loc = GeoLocation::new(120.0, 0.0, 0.0);
        let result = compute_panchanga(&scenario_instant(), &loc, &PanchangaConfig::default(), None);
        assert!(matches!(result, Err(PanchangaError::Vedic(_))));
    }

    #[test]
    fn sunrise_policy_reported() {
        let result = compute_panchanga(
            &scenario_instant(),
            &kelowna(),
            &PanchangaConfig::default(),
            None,
        )
        .unwrap();
        assert!(result.evaluated_at_sunrise);
        assert_eq!(result.horizon.sunrise.map(|i| i.day), Some(20));
    }

    #[test]
    fn at_instant_policy_keeps_exact_epoch() {
        let config = PanchangaConfig {
            evaluate_at_sunrise: false,
            ..Default::default()
        };
        let instant = scenario_instant();
        let result = compute_panchanga(&instant, &kelowna(), &config, None).unwrap();
        assert!(!result.evaluated_at_sunrise);
        assert!((result.evaluated_at.to_jd_utc() - instant.to_jd_utc()).abs() < 1e-9);
    }

    struct OffsetBackend;

    impl PositionBackend for OffsetBackend {
        fn position(&self, jd_utc: f64, body: Body) -> Option<EclipticPosition> {
            // Perturb the Moon only; defer everything else to the model
            (body == Body::Moon).then(|| {
                let model = kaala_model::tropical_position(jd_utc, Body::Moon);
                EclipticPosition {
                    longitude_deg: normalize_360(model.longitude_deg + 30.0),
                    latitude_deg: model.latitude_deg,
                }
            })
        }
    }

    #[test]
    fn backend_positions_flow_through() {
        let instant = scenario_instant();
        let plain =
            compute_panchanga(&instant, &kelowna(), &PanchangaConfig::default(), None).unwrap();
        let shifted = compute_panchanga(
            &instant,
            &kelowna(),
            &PanchangaConfig::default(),
            Some(&OffsetBackend),
        )
        .unwrap();
        // +30° elongation = +2.5 tithis
        assert_ne!(plain.tithi.number, shifted.tithi.number);
    }

    #[test]
    fn results_are_independent_snapshots() {
        let instant = scenario_instant();
        let a = compute_panchanga(&instant, &kelowna(), &PanchangaConfig::default(), None).unwrap();
        let b = compute_panchanga(&instant, &kelowna(), &PanchangaConfig::default(), None).unwrap();
        assert_eq!(a, b);
    }
}
