pub mod equatorial;
pub mod horizontal;

pub use equatorial::EquatorialCoordinate;
pub use horizontal::HorizontalCoordinate;
