//! Numeric input guards.
//!
//! Every geometry value, magnitude and material property passes through one
//! of these before it reaches a formula. Invalid numbers are replaced by a
//! caller-chosen fallback instead of raising, so a solve always completes.

/// Return `fallback` when `value` is NaN or infinite, `value` otherwise.
///
/// ```rust
/// use statics_core::validation::validate_number;
///
/// assert_eq!(validate_number(f64::NAN, 1.0), 1.0);
/// assert_eq!(validate_number(-3.0, 1.0), -3.0);
/// ```
#[inline]
pub fn validate_number(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Like [`validate_number`], additionally replacing values `<= 0`.
///
/// ```rust
/// use statics_core::validation::validate_positive;
///
/// assert_eq!(validate_positive(0.0, 100.0), 100.0);
/// assert_eq!(validate_positive(f64::INFINITY, 100.0), 100.0);
/// assert_eq!(validate_positive(42.0, 100.0), 42.0);
/// ```
#[inline]
pub fn validate_positive(value: f64, fallback: f64) -> f64 {
    let value = validate_number(value, fallback);
    if value <= 0.0 {
        fallback
    } else {
        value
    }
}

/// Validate an optional number, treating non-finite values as absent.
#[inline]
pub fn finite_or_none(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_number() {
        assert_eq!(validate_number(f64::NAN, 5.0), 5.0);
        assert_eq!(validate_number(f64::NEG_INFINITY, 5.0), 5.0);
        assert_eq!(validate_number(0.0, 5.0), 0.0);
        assert_eq!(validate_number(-2.0, 5.0), -2.0);
    }

    #[test]
    fn test_validate_positive() {
        assert_eq!(validate_positive(-1.0, 5.0), 5.0);
        assert_eq!(validate_positive(0.0, 5.0), 5.0);
        assert_eq!(validate_positive(f64::NAN, 5.0), 5.0);
        assert_eq!(validate_positive(1e-6, 5.0), 1e-6);
    }

    #[test]
    fn test_finite_or_none() {
        assert_eq!(finite_or_none(Some(f64::NAN)), None);
        assert_eq!(finite_or_none(Some(2.0)), Some(2.0));
        assert_eq!(finite_or_none(None), None);
    }
}
