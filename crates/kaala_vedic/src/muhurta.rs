//! Muhurta (auspicious period) windows anchored to sunrise and sunset.
//!
//! The day (sunrise to sunset) divides into 15 equal muhurtas, the
//! complementary night into 15 more. Ten named windows are derived:
//! five from day parts (Pratah, Sangava, Madhyahna, Abhijita, Vijaya),
//! two anchored before sunrise in night parts (Brahma, Pratah Sandhya),
//! two fixed-width around sunset (Godhuli, Sayahna Sandhya), and the
//! midnight muhurta (Nishita) in night parts after sunset.

use crate::kalam::JdWindow;

/// Minutes expressed in days.
const MINUTE_DAYS: f64 = 1.0 / 1440.0;

/// The ten muhurta windows of one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuhurtaPeriods {
    /// Second-to-last night muhurta before sunrise.
    pub brahma: JdWindow,
    /// Last night muhurta before sunrise.
    pub pratah_sandhya: JdWindow,
    /// Day muhurtas 1-3.
    pub pratah: JdWindow,
    /// Day muhurtas 4-6.
    pub sangava: JdWindow,
    /// Day muhurtas 7-9.
    pub madhyahna: JdWindow,
    /// The 8th day muhurta.
    pub abhijita: JdWindow,
    /// The 11th day muhurta.
    pub vijaya: JdWindow,
    /// Fixed ±12 minutes around sunset.
    pub godhuli: JdWindow,
    /// Fixed 24 minutes after sunset.
    pub sayahna_sandhya: JdWindow,
    /// The 8th night muhurta after sunset.
    pub nishita: JdWindow,
}

impl MuhurtaPeriods {
    /// All ten windows with their names, in chronological convention.
    pub fn named(&self) -> [(&'static str, JdWindow); 10] {
        [
            ("Brahma", self.brahma),
            ("Pratah Sandhya", self.pratah_sandhya),
            ("Pratah", self.pratah),
            ("Sangava", self.sangava),
            ("Madhyahna", self.madhyahna),
            ("Abhijita", self.abhijita),
            ("Vijaya", self.vijaya),
            ("Godhuli", self.godhuli),
            ("Sayahna Sandhya", self.sayahna_sandhya),
            ("Nishita", self.nishita),
        ]
    }

    /// Names of the windows containing the given instant.
    pub fn active_at(&self, jd_utc: f64) -> Vec<&'static str> {
        self.named()
            .iter()
            .filter(|(_, w)| w.contains(jd_utc))
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Compute the ten muhurta windows from the day's sunrise and sunset.
///
/// Night length is the day's complement within 24 hours. Callers
/// guarantee `sunrise < sunset`; with no sunrise/sunset there are no
/// muhurta windows.
pub fn muhurta_periods(sunrise_jd_utc: f64, sunset_jd_utc: f64) -> MuhurtaPeriods {
    let day_len = sunset_jd_utc - sunrise_jd_utc;
    let day_m = day_len / 15.0;
    let night_m = (1.0 - day_len) / 15.0;

    let day_part = |from: f64, to: f64| {
        JdWindow::new(sunrise_jd_utc + from * day_m, sunrise_jd_utc + to * day_m)
    };

    MuhurtaPeriods {
        brahma: JdWindow::new(sunrise_jd_utc - 2.0 * night_m, sunrise_jd_utc - night_m),
        pratah_sandhya: JdWindow::new(sunrise_jd_utc - night_m, sunrise_jd_utc),
        pratah: day_part(0.0, 3.0),
        sangava: day_part(3.0, 6.0),
        madhyahna: day_part(6.0, 9.0),
        abhijita: day_part(7.0, 8.0),
        vijaya: day_part(10.0, 11.0),
        godhuli: JdWindow::new(
            sunset_jd_utc - 12.0 * MINUTE_DAYS,
            sunset_jd_utc + 12.0 * MINUTE_DAYS,
        ),
        sayahna_sandhya: JdWindow::new(sunset_jd_utc, sunset_jd_utc + 24.0 * MINUTE_DAYS),
        nishita: JdWindow::new(
            sunset_jd_utc + 7.0 * night_m,
            sunset_jd_utc + 8.0 * night_m,
        ),
    }
}
