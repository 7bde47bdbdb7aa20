/// Truncating floating-point remainder; the result carries the sign of `x`.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmod_keeps_dividend_sign() {
        assert_eq!(fmod(370.0, 360.0), 10.0);
        assert_eq!(fmod(-10.0, 360.0), -10.0);
        assert_eq!(fmod(-370.0, 360.0), -10.0);
        assert!(fmod(f64::NAN, 360.0).is_nan());
        assert!(fmod(f64::INFINITY, 360.0).is_nan());
    }
}
