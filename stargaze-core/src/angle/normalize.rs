//! Angle normalization for sky and observer coordinates.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension | [0, 360) | [`wrap_0_360`] |
//! | Sidereal time | [0, 360) | [`wrap_0_360`] |
//! | Hour angle (stored) | [0, 360) | [`wrap_0_360`] |
//! | Azimuth | [0, 360) | [`wrap_0_360`] |
//! | Stored values that may already be in range | [0, 360) | [`reduce_0_360`] |
//!
//! # Algorithm Notes
//!
//! Rust's `%` on floats is a truncating remainder, like C's `fmod`: the result
//! keeps the sign of the dividend, so `-10.0 % 360.0 == -10.0`. A single
//! remainder is therefore not enough to land in [0, 360). [`wrap_0_360`] takes
//! the remainder, shifts by a full turn, and takes the remainder again:
//!
//! ```text
//! wrap(x) = ((x mod 360) + 360) mod 360
//! ```
//!
//! The first remainder lies in (-360, 360), the shifted value in (0, 720),
//! and the second remainder in [0, 360). Every angle reduction in the
//! workspace goes through this one function.
//!
//! NaN and infinities come out as NaN.
//!
//! The `+ 360` step rounds: `wrap_0_360(279.234)` is `279.2339999999999`.
//! Constructors that store a caller's angle use [`reduce_0_360`], which
//! leaves values already in [0, 360) bit-for-bit untouched.
//!
//! # Example
//!
//! ```
//! use stargaze_core::angle::{reduce_0_360, wrap_0_360};
//!
//! assert_eq!(wrap_0_360(-90.0), 270.0);
//! assert_eq!(wrap_0_360(720.5), 0.5);
//! assert_eq!(reduce_0_360(279.234), 279.234);
//! ```

use crate::constants::DEGREES_PER_CIRCLE;
use crate::math::fmod;

/// Wraps an angle in degrees to [0, 360).
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    fmod(
        fmod(deg, DEGREES_PER_CIRCLE) + DEGREES_PER_CIRCLE,
        DEGREES_PER_CIRCLE,
    )
}

/// [`wrap_0_360`] for values that are usually in range already: those are
/// returned unchanged, everything else is wrapped.
#[inline]
pub fn reduce_0_360(deg: f64) -> f64 {
    if (0.0..DEGREES_PER_CIRCLE).contains(&deg) {
        deg
    } else {
        wrap_0_360(deg)
    }
}
