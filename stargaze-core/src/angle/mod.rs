//! Angle reduction and range validation, in degrees.
//!
//! - [`normalize`]: cyclic reduction ([`wrap_0_360`], [`reduce_0_360`])
//! - [`validate`]: domain checks for latitude, longitude, right ascension, declination

pub mod normalize;
pub mod validate;

pub use normalize::{reduce_0_360, wrap_0_360};
pub use validate::{
    validate_declination, validate_latitude, validate_longitude, validate_right_ascension,
};
