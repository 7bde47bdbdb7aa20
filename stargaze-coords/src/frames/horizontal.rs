use crate::visibility::is_visible;
use crate::CoordResult;
use stargaze_core::angle::{reduce_0_360, validate_latitude};
use stargaze_core::AstroError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observer-relative position: altitude above the horizon and azimuth
/// measured from north through east, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
}

impl HorizontalCoordinate {
    /// Validated constructor: altitude in [-90, 90], azimuth wrapped to [0, 360).
    pub fn new(altitude_deg: f64, azimuth_deg: f64) -> CoordResult<Self> {
        let altitude_deg = validate_latitude(altitude_deg).map_err(|_| {
            AstroError::out_of_range("altitude", altitude_deg, -90.0, 90.0)
        })?;
        if !azimuth_deg.is_finite() {
            return Err(AstroError::not_finite("azimuth", azimuth_deg).into());
        }
        Ok(Self {
            altitude_deg,
            azimuth_deg: reduce_0_360(azimuth_deg),
        })
    }

    pub const fn new_unchecked(altitude_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            altitude_deg,
            azimuth_deg,
        }
    }

    pub fn altitude_deg(&self) -> f64 {
        self.altitude_deg
    }

    pub fn azimuth_deg(&self) -> f64 {
        self.azimuth_deg
    }

    pub fn is_above_horizon(&self) -> bool {
        self.is_visible(0.0)
    }

    pub fn is_visible(&self, min_altitude_deg: f64) -> bool {
        is_visible(self.altitude_deg, min_altitude_deg)
    }

    pub fn cardinal_direction(&self) -> &'static str {
        let az_deg = self.azimuth_deg;
        if az_deg.is_nan() {
            "?"
        } else if !(22.5..337.5).contains(&az_deg) {
            "N"
        } else if az_deg < 67.5 {
            "NE"
        } else if az_deg < 112.5 {
            "E"
        } else if az_deg < 157.5 {
            "SE"
        } else if az_deg < 202.5 {
            "S"
        } else if az_deg < 247.5 {
            "SW"
        } else if az_deg < 292.5 {
            "W"
        } else {
            "NW"
        }
    }
}

impl std::fmt::Display for HorizontalCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Horizontal(Alt={:+.2}°, Az={:.2}° {})",
            self.altitude_deg,
            self.azimuth_deg,
            self.cardinal_direction()
        )
    }
}
