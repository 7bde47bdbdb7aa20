use super::normalize::reduce_0_360;
use crate::{AstroError, AstroResult};

fn require_finite(quantity: &'static str, deg: f64) -> AstroResult<f64> {
    if deg.is_finite() {
        Ok(deg)
    } else {
        Err(AstroError::not_finite(quantity, deg))
    }
}

fn require_within(quantity: &'static str, deg: f64, min: f64, max: f64) -> AstroResult<f64> {
    let deg = require_finite(quantity, deg)?;
    if (min..=max).contains(&deg) {
        Ok(deg)
    } else {
        Err(AstroError::out_of_range(quantity, deg, min, max))
    }
}

/// Validates a right ascension in degrees.
///
/// - `normalize = true`: any finite value is accepted and wrapped to [0, 360)
/// - `normalize = false`: the value must already lie in [0, 360)
pub fn validate_right_ascension(deg: f64, normalize: bool) -> AstroResult<f64> {
    let deg = require_finite("right ascension", deg)?;
    if normalize {
        return Ok(reduce_0_360(deg));
    }
    if (0.0..360.0).contains(&deg) {
        return Ok(deg);
    }
    Err(AstroError::out_of_range("right ascension", deg, 0.0, 360.0))
}

/// Validates a declination in degrees, [-90, +90].
pub fn validate_declination(deg: f64) -> AstroResult<f64> {
    require_within("declination", deg, -90.0, 90.0)
}

/// Validates a geographic latitude in degrees, [-90, +90].
pub fn validate_latitude(deg: f64) -> AstroResult<f64> {
    require_within("latitude", deg, -90.0, 90.0)
}

/// Validates an east-positive geographic longitude in degrees, [-180, +180].
pub fn validate_longitude(deg: f64) -> AstroResult<f64> {
    require_within("longitude", deg, -180.0, 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_right_ascension_strict() {
        assert_eq!(validate_right_ascension(279.234, false), Ok(279.234));
        assert!(validate_right_ascension(0.0, false).is_ok());
        assert!(matches!(
            validate_right_ascension(360.0, false),
            Err(AstroError::OutOfRange { .. })
        ));
        assert!(validate_right_ascension(-1.0, false).is_err());
    }

    #[test]
    fn test_validate_right_ascension_normalized() {
        assert_eq!(validate_right_ascension(370.0, true), Ok(10.0));
        assert_eq!(validate_right_ascension(-90.0, true), Ok(270.0));
    }

    #[test]
    fn test_validate_right_ascension_not_finite() {
        let result = validate_right_ascension(f64::NAN, true);
        assert!(matches!(result, Err(AstroError::NotFinite { .. })));
    }

    #[test]
    fn test_validate_declination() {
        assert!(validate_declination(45.0).is_ok());
        assert!(validate_declination(-90.0).is_ok());
        assert!(validate_declination(90.0).is_ok());
        assert!(validate_declination(95.0).is_err());
        assert!(validate_declination(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_latitude_and_longitude() {
        assert!(validate_latitude(40.343).is_ok());
        assert!(validate_latitude(-90.5).is_err());
        assert!(validate_longitude(-74.651).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        let err = validate_longitude(190.0).unwrap_err();
        assert_eq!(err.quantity(), "longitude");
    }
}
