//! Sidereal time from the low-precision Meeus polynomial.
//!
//! - [`GMST`]: Greenwich mean sidereal time for an [`Instant`](crate::Instant)
//! - [`LMST`]: local sidereal time, GMST shifted by the observer's east longitude
//!
//! Both are held in degrees in [0, 360). Precession and nutation beyond the
//! polynomial's linear drift term are not modelled.

pub mod gmst;
pub mod lmst;

pub use gmst::{greenwich_sidereal_degrees, GMST};
pub use lmst::{local_sidereal_degrees, LMST};
