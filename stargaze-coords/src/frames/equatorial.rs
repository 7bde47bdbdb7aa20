use crate::transform::compute_horizontal;
use crate::{CoordResult, HorizontalCoordinate};
use stargaze_core::angle::{validate_declination, validate_right_ascension};
use stargaze_core::GeoCoordinate;
use stargaze_time::{Instant, LMST};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed J2000 sky position of a star, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
}

impl EquatorialCoordinate {
    /// Validated constructor. Right ascension outside [0, 360) is wrapped,
    /// values inside are stored as given;
    /// declination must lie in [-90, 90].
    pub fn new(right_ascension_deg: f64, declination_deg: f64) -> CoordResult<Self> {
        Ok(Self {
            right_ascension_deg: validate_right_ascension(right_ascension_deg, true)?,
            declination_deg: validate_declination(declination_deg)?,
        })
    }

    pub const fn new_unchecked(right_ascension_deg: f64, declination_deg: f64) -> Self {
        Self {
            right_ascension_deg,
            declination_deg,
        }
    }

    pub fn right_ascension_deg(&self) -> f64 {
        self.right_ascension_deg
    }

    pub fn declination_deg(&self) -> f64 {
        self.declination_deg
    }

    pub fn right_ascension_hours(&self) -> f64 {
        self.right_ascension_deg / 15.0
    }

    /// Altitude/azimuth seen by `observer` at `instant`.
    pub fn to_horizontal(&self, instant: &Instant, observer: &GeoCoordinate) -> HorizontalCoordinate {
        compute_horizontal(
            instant,
            observer.latitude_deg,
            observer.longitude_deg,
            self.right_ascension_deg,
            self.declination_deg,
        )
    }

    /// Hour angle in [0, 360): how far west of the observer's meridian the star is.
    pub fn hour_angle_deg(&self, instant: &Instant, longitude_deg: f64) -> f64 {
        LMST::from_instant(instant, longitude_deg).hour_angle_deg(self.right_ascension_deg)
    }
}

impl std::fmt::Display for EquatorialCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Equatorial(RA={:.3}°, Dec={:+.3}°)",
            self.right_ascension_deg, self.declination_deg
        )
    }
}
