use crate::Instant;
use stargaze_core::constants::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, MILLISECONDS_PER_DAY, UNIX_EPOCH_JD,
};
use std::fmt;

/// Two-part Julian Date.
///
/// `to_f64()` is always `jd1 + jd2`. Dates built from an [`Instant`] keep the
/// Unix-epoch JD in `jd1` and the days elapsed since 1970-01-01 in `jd2`, so
/// the sum is exactly `unix_millis / 86_400_000 + 2_440_587.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD, 0.0)
    }

    pub fn from_instant(instant: &Instant) -> Self {
        Self::new(UNIX_EPOCH_JD, instant.unix_millis() / MILLISECONDS_PER_DAY)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Days elapsed since J2000.0 (2000-01-01T12:00:00 TT, treated as UT here).
    pub fn days_since_j2000(&self) -> f64 {
        self.to_f64() - J2000_JD
    }

    pub fn julian_centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

impl From<Instant> for JulianDate {
    fn from(instant: Instant) -> Self {
        Self::from_instant(&instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_epoch() {
        let jd = JulianDate::from_instant(&Instant::from_unix_millis(0.0));
        assert_eq!(jd.to_f64(), UNIX_EPOCH_JD);
        assert_eq!(jd, JulianDate::unix_epoch());
    }

    #[test]
    fn test_matches_closed_form() {
        for ms in [1_710_936_000_000.0, 946_728_000_000.0, -14_182_980_000.0, 1.5] {
            let jd = JulianDate::from_instant(&Instant::from_unix_millis(ms));
            assert_eq!(jd.to_f64(), ms / 86_400_000.0 + 2_440_587.5);
        }
    }

    #[test]
    fn test_j2000_instant() {
        let jd = JulianDate::from_instant(&Instant::j2000());
        assert_eq!(jd.to_f64(), J2000_JD);
        assert_eq!(jd.days_since_j2000(), 0.0);
        assert_eq!(jd.julian_centuries_since_j2000(), 0.0);
    }

    #[test]
    fn test_pre_1970_is_below_unix_epoch_jd() {
        // Apollo 11 landing, 1969-07-20T20:17:00Z
        let jd = JulianDate::from_instant(&Instant::from_unix_millis(-14_182_980_000.0));
        assert!(jd.to_f64() < UNIX_EPOCH_JD);
        assert!((jd.to_f64() - 2_440_423.345_138_889).abs() < 1e-8);
    }

    #[test]
    fn test_non_finite_propagates() {
        let jd = JulianDate::from_instant(&Instant::from_unix_millis(f64::NAN));
        assert!(jd.to_f64().is_nan());
    }

    #[test]
    fn test_add_days_and_display() {
        let jd = JulianDate::j2000().add_days(1.5);
        assert_eq!(jd.to_f64(), 2451546.5);
        assert_eq!(jd.to_string(), "JD 2451546.500000000");
    }
}
