//! Swappable high-precision position backend.
//!
//! The portable closed-form model is always available; an external
//! ephemeris (JPL kernels, Swiss Ephemeris bindings, …) can be plugged
//! in as a [`PositionBackend`] passed explicitly to the entry points.
//! "Unavailable" is a normal outcome of asking an optional backend:
//! both methods return `Option`, and the helpers below recover by
//! falling back to the portable model. Nothing here is process-wide
//! state; the backend is threaded through each call.

use crate::body::Body;
use crate::position::{EclipticPosition, tropical_position};

/// A synchronous high-precision position capability.
///
/// Implementations must uphold the node identity: Ketu longitude equals
/// Rahu longitude + 180° (mod 360) with latitude negated. Backends that
/// only know Rahu may return `None` for Ketu and let the fallback
/// derive it.
pub trait PositionBackend {
    /// Tropical geocentric ecliptic position, or `None` when the backend
    /// cannot answer for this body/epoch.
    fn position(&self, jd_utc: f64, body: Body) -> Option<EclipticPosition>;

    /// Ayanamsha in degrees for a backend-known sidereal system id, or
    /// `None` to defer to the built-in catalogue.
    fn ayanamsha_deg(&self, jd_utc: f64, system_id: i32) -> Option<f64> {
        let _ = (jd_utc, system_id);
        None
    }
}

/// Position from the backend when available, else the portable model.
pub fn position_or_model(
    backend: Option<&dyn PositionBackend>,
    jd_utc: f64,
    body: Body,
) -> EclipticPosition {
    backend
        .and_then(|b| b.position(jd_utc, body))
        .unwrap_or_else(|| tropical_position(jd_utc, body))
}

/// Ayanamsha from the backend when available, else `fallback_deg`.
pub fn ayanamsha_or(
    backend: Option<&dyn PositionBackend>,
    jd_utc: f64,
    system_id: i32,
    fallback_deg: f64,
) -> f64 {
    backend
        .and_then(|b| b.ayanamsha_deg(jd_utc, system_id))
        .unwrap_or(fallback_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend;

    impl PositionBackend for FixedBackend {
        fn position(&self, _jd_utc: f64, body: Body) -> Option<EclipticPosition> {
            // Only answers for the Sun; everything else is unavailable
            (body == Body::Sun).then_some(EclipticPosition {
                longitude_deg: 123.456,
                latitude_deg: 0.0,
            })
        }
    }

    #[test]
    fn backend_answer_wins() {
        let backend = FixedBackend;
        let pos = position_or_model(Some(&backend), 2_460_000.5, Body::Sun);
        assert_eq!(pos.longitude_deg, 123.456);
    }

    #[test]
    fn unavailable_falls_back() {
        let backend = FixedBackend;
        let pos = position_or_model(Some(&backend), 2_460_000.5, Body::Moon);
        let model = tropical_position(2_460_000.5, Body::Moon);
        assert_eq!(pos, model);
    }

    #[test]
    fn no_backend_uses_model() {
        let pos = position_or_model(None, 2_460_000.5, Body::Sun);
        let model = tropical_position(2_460_000.5, Body::Sun);
        assert_eq!(pos, model);
    }

    #[test]
    fn ayanamsha_default_defers() {
        let backend = FixedBackend;
        let v = ayanamsha_or(Some(&backend), 2_460_000.5, 1, 24.0);
        assert_eq!(v, 24.0);
    }
}
