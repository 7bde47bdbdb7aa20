use super::gmst::GMST;
use crate::Instant;
use stargaze_core::angle::wrap_0_360;
use stargaze_core::constants::DEGREES_PER_HOUR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LMST {
    degrees: f64,
    longitude_deg: f64,
}

impl LMST {
    /// Local sidereal time at an east-positive longitude.
    pub fn from_instant(instant: &Instant, longitude_deg: f64) -> Self {
        GMST::from_instant(instant).to_lmst(longitude_deg)
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn hours(&self) -> f64 {
        self.degrees / DEGREES_PER_HOUR
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Hour angle of a target at right ascension `ra_deg`, wrapped to [0, 360).
    pub fn hour_angle_deg(&self, ra_deg: f64) -> f64 {
        wrap_0_360(self.degrees - ra_deg)
    }
}

impl GMST {
    pub fn to_lmst(&self, longitude_deg: f64) -> LMST {
        LMST {
            degrees: wrap_0_360(self.degrees() + longitude_deg),
            longitude_deg,
        }
    }
}

impl std::fmt::Display for LMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LMST {:.6}h at {:.4}°",
            self.hours(),
            self.longitude_deg
        )
    }
}

/// Local sidereal time in degrees, [0, 360), for an east-positive longitude.
pub fn local_sidereal_degrees(instant: &Instant, longitude_deg: f64) -> f64 {
    LMST::from_instant(instant, longitude_deg).degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::greenwich_sidereal_degrees;

    #[test]
    fn test_lmst_at_greenwich_equals_gmst() {
        let instant = Instant::from_unix_millis(1_710_936_000_000.0);
        assert_eq!(
            local_sidereal_degrees(&instant, 0.0),
            greenwich_sidereal_degrees(&instant)
        );
    }

    #[test]
    fn test_lmst_longitude_correction() {
        // 15° of longitude is one hour of sidereal time
        let instant = Instant::j2000();
        let greenwich = LMST::from_instant(&instant, 0.0);
        let east = LMST::from_instant(&instant, 15.0);
        let west = LMST::from_instant(&instant, -15.0);

        assert!((east.hours() - greenwich.hours() - 1.0).abs() < 1e-12);
        assert!((greenwich.hours() - west.hours() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lmst_wraps_past_midnight() {
        // GMST at J2000 is ~280.46°, so +100° east wraps around 360
        let lmst = LMST::from_instant(&Instant::j2000(), 100.0);
        assert!((lmst.degrees() - 20.46061837).abs() < 1e-9);
        assert_eq!(lmst.longitude_deg(), 100.0);
    }

    #[test]
    fn test_lmst_princeton_reference() {
        let instant = Instant::from_unix_millis(1_710_936_000_000.0);
        let lmst = LMST::from_instant(&instant, -74.651);
        assert!((lmst.degrees() - 283.860596).abs() < 1e-5);
    }

    #[test]
    fn test_hour_angle() {
        let lmst = GMST::from_degrees(10.0).to_lmst(0.0);
        assert_eq!(lmst.hour_angle_deg(10.0), 0.0);
        assert_eq!(lmst.hour_angle_deg(20.0), 350.0);
        assert_eq!(lmst.hour_angle_deg(350.0), 20.0);
    }

    #[test]
    fn test_display() {
        let lmst = GMST::from_degrees(180.0).to_lmst(0.0);
        assert!(lmst.to_string().starts_with("LMST 12.000000h"));
    }
}
