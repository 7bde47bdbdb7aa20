//! Numerical building blocks shared by the stargaze crates.
//!
//! `stargaze-core` holds the pieces every other crate leans on: astronomical
//! constants, the single angle-normalization primitive, range validation for
//! catalog and observer data, and the observer position type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`wrap_0_360`](angle::wrap_0_360), [`reduce_0_360`](angle::reduce_0_360), range validation |
//! | [`location`] | [`GeoCoordinate`], observer latitude/longitude in degrees |
//! | [`constants`] | Epochs, unit conversions, day lengths |
//! | [`math`] | Thin wrappers over `libm` |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Design Notes
//!
//! - **Degrees at the surface**: observers, catalogs and results are all
//!   expressed in degrees. Radians only appear inside trigonometric kernels.
//!
//! - **No hidden state**: every function here is pure and safe to call from
//!   any number of threads.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use angle::{reduce_0_360, wrap_0_360};
pub use errors::{AstroError, AstroResult};
pub use location::{is_polar_latitude, GeoCoordinate};
