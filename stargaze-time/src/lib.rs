//! Time handling for visibility queries: UTC instants, Julian Dates and
//! sidereal time.
//!
//! ```
//! use stargaze_time::{Instant, GMST};
//!
//! let instant: Instant = "2000-01-01T12:00:00Z".parse()?;
//! assert_eq!(instant.to_julian_date().to_f64(), 2451545.0);
//!
//! let gmst = GMST::from_instant(&instant);
//! assert!((gmst.degrees() - 280.46061837).abs() < 1e-9);
//! # Ok::<(), stargaze_time::TimeError>(())
//! ```

pub mod instant;
pub mod julian;
pub mod parsing;
pub mod sidereal;

pub use instant::Instant;
pub use julian::JulianDate;
pub use sidereal::{greenwich_sidereal_degrees, local_sidereal_degrees, GMST, LMST};

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeError {
    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    #[error("Parse error: {0}")]
    ParseError(String),
}
