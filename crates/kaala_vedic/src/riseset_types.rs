//! Types for sunrise/sunset and moonrise/moonset calculations.

use std::f64::consts::PI;

use crate::error::VedicError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
    /// IANA timezone name, opaque and display-only. Never consulted by
    /// any computation; the `Instant` offset is authoritative.
    pub timezone: Option<String>,
}

impl GeoLocation {
    /// Create a new geographic location at sea level with no timezone name.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            timezone: None,
        }
    }

    /// Attach an IANA timezone name for display.
    pub fn with_timezone(mut self, name: impl Into<String>) -> Self {
        self.timezone = Some(name.into());
        self
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Reject out-of-range or non-finite coordinates.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(VedicError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(VedicError::InvalidLocation("longitude outside [-180, 180]"));
        }
        if !self.altitude_m.is_finite() || self.altitude_m < 0.0 {
            return Err(VedicError::InvalidLocation("altitude must be >= 0"));
        }
        Ok(())
    }
}

/// Solar horizon events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEvent {
    /// Upper limb at the refracted horizon, morning side.
    Sunrise,
    /// Upper limb at the refracted horizon, evening side.
    Sunset,
}

impl SunEvent {
    /// Whether this is the morning (rising) event.
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Lunar horizon events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonEvent {
    Moonrise,
    Moonset,
}

impl MoonEvent {
    /// Whether this is the rising event.
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Moonrise)
    }
}

/// Configurable parameters for horizon-event computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar/lunar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total horizon depression in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`. The default
    /// 50 arcmin reproduces the standard −0.8333° event altitude.
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }
}

/// Result of a solar rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given UTC Julian Date.
    Event { jd_utc: f64, event: SunEvent },
    /// Sun never reaches the horizon from below (polar night).
    NeverRises,
    /// Sun never reaches the horizon from above (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// The event time, if one exists.
    pub fn jd_utc(&self) -> Option<f64> {
        match self {
            Self::Event { jd_utc, .. } => Some(*jd_utc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.refraction_arcmin, 34.0);
        assert_eq!(c.semidiameter_arcmin, 16.0);
        assert!(c.altitude_correction);
    }

    #[test]
    fn depression_sea_level() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(0.0);
        assert!((d - 0.8333).abs() < 0.001, "sea-level depression = {d}");
    }

    #[test]
    fn depression_1000m() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(1000.0);
        // Dip at 1000m ≈ 1.015°
        assert!(d > 0.8333 + 0.9 && d < 0.8333 + 1.2, "1000m depression = {d}");
    }

    #[test]
    fn depression_without_altitude_correction() {
        let c = RiseSetConfig {
            altitude_correction: false,
            ..Default::default()
        };
        let d = c.horizon_depression_deg(10_000.0);
        assert!((d - 50.0 / 60.0).abs() < 1e-10);
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(49.888, -119.496, 0.0).validate().is_ok());
        assert!(GeoLocation::new(91.0, 0.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 181.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 0.0, -5.0).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn timezone_is_opaque() {
        let loc = GeoLocation::new(12.97, 77.59, 920.0).with_timezone("Asia/Kolkata");
        assert_eq!(loc.timezone.as_deref(), Some("Asia/Kolkata"));
        assert!(loc.validate().is_ok());
    }

    #[test]
    fn event_sides() {
        assert!(SunEvent::Sunrise.is_rising());
        assert!(!SunEvent::Sunset.is_rising());
        assert!(MoonEvent::Moonrise.is_rising());
        assert!(!MoonEvent::Moonset.is_rising());
    }

    #[test]
    fn result_event_accessor() {
        let r = RiseSetResult::Event {
            jd_utc: 2_460_000.5,
            event: SunEvent::Sunrise,
        };
        assert_eq!(r.jd_utc(), Some(2_460_000.5));
        assert_eq!(RiseSetResult::NeverRises.jd_utc(), None);
    }
}
