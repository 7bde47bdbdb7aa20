//! Equatorial → horizontal coordinate transform and star visibility.
//!
//! Converts a star's J2000 right ascension/declination into altitude and
//! azimuth for an observer at a given instant, then decides whether the star
//! is above a chosen altitude threshold.
//!
//! ```
//! use stargaze_coords::{compute_horizontal, is_visible};
//! use stargaze_time::Instant;
//!
//! let instant: Instant = "2024-03-20T12:00:00Z".parse()?;
//! // Vega from Princeton
//! let pos = compute_horizontal(&instant, 40.343, -74.651, 279.234, 38.783);
//! assert!(pos.altitude_deg > 85.0);
//! assert!(is_visible(pos.altitude_deg, 0.0));
//! # Ok::<(), stargaze_time::TimeError>(())
//! ```
//!
//! Everything here is a pure function of its arguments. Malformed numbers
//! (NaN, infinities) are not rejected; they come out the other side as NaN so
//! that callers can detect bad catalog data.

pub mod errors;
pub mod frames;
pub mod transform;
pub mod visibility;

pub use errors::{CoordError, CoordResult};
pub use frames::{EquatorialCoordinate, HorizontalCoordinate};
pub use transform::{compute_horizontal, POLE_AZIMUTH_DEG};
pub use visibility::{is_above_horizon, is_visible, DEFAULT_MIN_ALTITUDE_DEG};

pub use stargaze_core::GeoCoordinate;
pub use stargaze_time::Instant;
