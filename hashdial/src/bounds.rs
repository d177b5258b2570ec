/// hashdial v1 — Argument Bounds
///
/// Validation shared by the decision operations. All checks run before the
/// key is hashed.

use std::ops::Range;

use crate::error::{DialError, Result};

/// Largest integer every value up to which is exactly representable in an
/// f64: `2^53 - 1`.
pub const MAX_EXACT_FLOAT_INT: i64 = (1 << f64::MANTISSA_DIGITS) - 1;

/// Require `0.0 <= probability <= 1.0`. NaN fails the lower bound.
pub fn validate_probability(probability: f64) -> Result<()> {
    if !(probability >= 0.0) {
        return Err(DialError::ProbabilityBelowZero(probability));
    }
    if probability > 1.0 {
        return Err(DialError::ProbabilityAboveOne(probability));
    }
    Ok(())
}

/// Width of `range`, provided it is non-empty and no wider than
/// [`MAX_EXACT_FLOAT_INT`].
pub fn range_span(range: &Range<i64>) -> Result<i64> {
    let (start, stop) = (range.start, range.end);
    if stop <= start {
        return Err(DialError::EmptyRange { start, stop });
    }

    // i128 keeps i64::MIN..i64::MAX from overflowing.
    let span = i128::from(stop) - i128::from(start);
    if span > i128::from(MAX_EXACT_FLOAT_INT) {
        return Err(DialError::RangeTooWide { start, stop, span });
    }
    Ok(span as i64)
}

/// Require a non-empty sequence of `len` elements.
pub fn validate_len(len: usize) -> Result<()> {
    if len == 0 {
        return Err(DialError::EmptySequence);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_exact_float_int() {
        assert_eq!(MAX_EXACT_FLOAT_INT, 9_007_199_254_740_991);
        assert_eq!(MAX_EXACT_FLOAT_INT as f64 as i64, MAX_EXACT_FLOAT_INT);
    }

    #[test]
    fn test_validate_probability_ok() {
        for p in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(validate_probability(p), Ok(()));
        }
    }

    #[test]
    fn test_validate_probability_below_zero() {
        let err = validate_probability(-0.5).unwrap_err();
        assert_eq!(err, DialError::ProbabilityBelowZero(-0.5));
        assert_eq!(err.to_string(), "probability (-0.5) must be >= 0.0");
    }

    #[test]
    fn test_validate_probability_above_one() {
        let err = validate_probability(1.5).unwrap_err();
        assert_eq!(err.to_string(), "probability (1.5) must be <= 1.0");
    }

    #[test]
    fn test_validate_probability_nan() {
        let err = validate_probability(f64::NAN).unwrap_err();
        assert_eq!(err.to_string(), "probability (NaN) must be >= 0.0");
    }

    #[test]
    fn test_range_span_ok() {
        assert_eq!(range_span(&(-1..2)), Ok(3));
        assert_eq!(range_span(&(0..MAX_EXACT_FLOAT_INT)), Ok(MAX_EXACT_FLOAT_INT));
    }

    #[test]
    fn test_range_span_empty() {
        let err = range_span(&(5..5)).unwrap_err();
        assert_eq!(err, DialError::EmptyRange { start: 5, stop: 5 });
        assert_eq!(err.to_string(), "stop (5) must be > start (5)");
        assert!(range_span(&(3..-3)).is_err());
    }

    #[test]
    fn test_range_span_too_wide() {
        assert!(range_span(&(0..MAX_EXACT_FLOAT_INT + 1)).is_err());
        assert!(range_span(&(0..i64::MAX)).is_err());

        let err = range_span(&(i64::MIN..0)).unwrap_err();
        assert_eq!(
            err,
            DialError::RangeTooWide {
                start: i64::MIN,
                stop: 0,
                span: 1 << 63,
            }
        );
        assert!(err
            .to_string()
            .starts_with("stop-start (9223372036854775808) must be <= 9007199254740991"));

        assert!(range_span(&(i64::MIN..i64::MAX)).is_err());
    }

    #[test]
    fn test_validate_len() {
        assert_eq!(validate_len(1), Ok(()));
        assert_eq!(validate_len(0), Err(DialError::EmptySequence));
    }
}
