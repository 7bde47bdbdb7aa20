//! Observer position on the Earth's surface.
//!
//! A [`GeoCoordinate`] is a latitude/longitude pair in degrees, longitude
//! positive east of Greenwich. Height and the ellipsoid are irrelevant at the
//! precision of a naked-eye visibility check, so the Earth is a sphere here.

use crate::angle::{validate_latitude, validate_longitude};
use crate::AstroResult;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    /// Creates a validated coordinate: latitude in [-90, 90], longitude in [-180, 180].
    ///
    /// ```
    /// use stargaze_core::GeoCoordinate;
    ///
    /// let princeton = GeoCoordinate::new(40.343, -74.651)?;
    /// assert!(GeoCoordinate::new(91.0, 0.0).is_err());
    /// # Ok::<(), stargaze_core::AstroError>(())
    /// ```
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> AstroResult<Self> {
        Ok(Self {
            latitude_deg: validate_latitude(latitude_deg)?,
            longitude_deg: validate_longitude(longitude_deg)?,
        })
    }

    /// Creates a coordinate without range checks. Out-of-domain values flow
    /// through the calculator as-is.
    pub const fn new_unchecked(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub const fn greenwich() -> Self {
        Self::new_unchecked(51.4769, 0.0)
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// True at either geographic pole, where azimuth has no meaning.
    pub fn is_pole(&self) -> bool {
        is_polar_latitude(self.latitude_deg)
    }
}

/// Latitudes whose cosine is indistinguishable from zero. Azimuth divides by
/// `cos(lat)`, so these are treated as standing on a pole.
#[inline]
pub fn is_polar_latitude(latitude_deg: f64) -> bool {
    latitude_deg.to_radians().cos().abs() <= f64::EPSILON
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude_deg < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude_deg < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude_deg.abs(),
            ns,
            self.longitude_deg.abs(),
            ew
        )
    }
}
