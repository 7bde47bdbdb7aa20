//! Equatorial (J2000) → horizontal transform.
//!
//! ```text
//! H      = wrap(LST - ra)
//! sinAlt = sin(dec)·sin(lat) + cos(dec)·cos(lat)·cos(H)
//! alt    = asin(sinAlt)
//! az     = atan2(-sin(H)·cos(dec), (sin(dec) - sin(alt)·sin(lat)) / cos(lat))
//! ```
//!
//! Azimuth is measured from north through east. No refraction, precession or
//! nutation is applied; catalog positions are treated as fixed J2000 values.

use crate::HorizontalCoordinate;
use stargaze_core::angle::wrap_0_360;
use stargaze_core::location::is_polar_latitude;
use stargaze_time::{Instant, LMST};

/// Azimuth reported for an observer standing on a geographic pole, where
/// every direction is south (or north) and azimuth is undefined.
pub const POLE_AZIMUTH_DEG: f64 = 0.0;

/// Altitude and azimuth of a star at (`ra_deg`, `dec_deg`) seen from
/// (`latitude_deg`, `longitude_deg`) at `instant`. Longitude is east-positive.
///
/// Inputs are not validated. Any NaN or infinite input yields NaN output
/// rather than a panic or an error. When [`is_polar_latitude`] holds
/// (`|cos(lat)|` at or below `f64::EPSILON`) the azimuth is
/// [`POLE_AZIMUTH_DEG`]; altitude is still exact.
pub fn compute_horizontal(
    instant: &Instant,
    latitude_deg: f64,
    longitude_deg: f64,
    ra_deg: f64,
    dec_deg: f64,
) -> HorizontalCoordinate {
    let lst = LMST::from_instant(instant, longitude_deg);
    let hour_angle_deg = lst.hour_angle_deg(ra_deg);

    let (sin_ha, cos_ha) = hour_angle_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = latitude_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();

    // f64::clamp passes NaN through unchanged
    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_ha).clamp(-1.0, 1.0);
    let altitude = sin_alt.asin();

    let azimuth_deg = if is_polar_latitude(latitude_deg) {
        POLE_AZIMUTH_DEG
    } else {
        let y = -sin_ha * cos_dec;
        let x = (sin_dec - sin_alt * sin_lat) / cos_lat;
        wrap_0_360(y.atan2(x).to_degrees())
    };

    HorizontalCoordinate::new_unchecked(altitude.to_degrees(), azimuth_deg)
}
