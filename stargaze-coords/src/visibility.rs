//! Visibility classification from altitude.
//!
//! A star is visible when its altitude is strictly greater than the
//! threshold. The default threshold is the mathematical horizon; callers
//! that want to allow for buildings, haze or twilight pass a higher one
//! (5–10° is typical).

/// Threshold used when the caller does not choose one.
pub const DEFAULT_MIN_ALTITUDE_DEG: f64 = 0.0;

/// `altitude_deg > min_altitude_deg`. A star exactly on the threshold is not
/// visible, and a NaN altitude is never visible.
#[inline]
pub fn is_visible(altitude_deg: f64, min_altitude_deg: f64) -> bool {
    altitude_deg > min_altitude_deg
}

/// [`is_visible`] against [`DEFAULT_MIN_ALTITUDE_DEG`].
#[inline]
pub fn is_above_horizon(altitude_deg: f64) -> bool {
    is_visible(altitude_deg, DEFAULT_MIN_ALTITUDE_DEG)
}
