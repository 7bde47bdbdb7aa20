//! Error types for observer and catalog coordinate validation.
//!
//! The calculator itself never fails: it propagates NaN for malformed input.
//! [`AstroError`] is produced only by the typed constructors and the
//! validation helpers in [`angle`](crate::angle), which callers use to check
//! catalog or user data before it reaches the calculator.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`NotFinite`](AstroError::NotFinite) | value is NaN or infinite |
//! | [`OutOfRange`](AstroError::OutOfRange) | finite value outside its physical domain (e.g. latitude 95°) |

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("{quantity} is not finite: {value}")]
    NotFinite { quantity: &'static str, value: f64 },

    #[error("{quantity} {value}° out of range [{min}°, {max}°]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn not_finite(quantity: &'static str, value: f64) -> Self {
        Self::NotFinite { quantity, value }
    }

    pub fn out_of_range(quantity: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            quantity,
            value,
            min,
            max,
        }
    }

    /// Name of the quantity that failed validation ("latitude", "declination", ...).
    pub fn quantity(&self) -> &'static str {
        match self {
            Self::NotFinite { quantity, .. } | Self::OutOfRange { quantity, .. } => quantity,
        }
    }
}
