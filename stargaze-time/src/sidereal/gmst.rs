use crate::{Instant, JulianDate};
use stargaze_core::angle::{reduce_0_360, wrap_0_360};
use stargaze_core::constants::DEGREES_PER_HOUR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GMST(f64);

impl GMST {
    pub fn from_instant(instant: &Instant) -> Self {
        Self::from_julian_date(&instant.to_julian_date())
    }

    pub fn from_julian_date(jd: &JulianDate) -> Self {
        Self(gmst_degrees(jd))
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(reduce_0_360(degrees))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0 / DEGREES_PER_HOUR
    }
}

impl std::fmt::Display for GMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {:.6}h", self.hours())
    }
}

/// Greenwich sidereal time in degrees, [0, 360).
pub fn greenwich_sidereal_degrees(instant: &Instant) -> f64 {
    GMST::from_instant(instant).degrees()
}

// Meeus, Astronomical Algorithms, eq. 12.4
fn gmst_degrees(jd: &JulianDate) -> f64 {
    let d = jd.days_since_j2000();
    let t = jd.julian_centuries_since_j2000();

    let raw = 280.46061837 + 360.98564736629 * d + 0.000387933 * t * t
        - (t * t * t) / 38710000.0;

    wrap_0_360(raw)
}
