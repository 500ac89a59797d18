//! Numeric bound derivation.
//!
//! Encodes the interval policy verbatim: inclusive bounds win over exclusive
//! ones, exclusive bounds are nudged inward by one unit (1 for integers, 0.1
//! for floats), and the unconstrained defaults are the historical asymmetric
//! 2..=999 and 1.1..=999.9.

use crate::constraints::Constraints;
use super::SynthError;

pub const INT_DEFAULT_LO: i64 = 2;
pub const INT_DEFAULT_HI: i64 = 999;
pub const FLOAT_DEFAULT_LO: f64 = 1.1;
pub const FLOAT_DEFAULT_HI: f64 = 999.9;

/// Inclusive integer interval for `c`, or an error when it is empty.
pub fn int_interval(c: &Constraints) -> Result<(i64, i64), SynthError> {
    let lo = match (c.ge, c.gt) {
        (Some(ge), _) => ge.0 as i64,
        (None, Some(gt)) => gt.0 as i64 + 1,
        (None, None) => INT_DEFAULT_LO,
    };
    let hi = match (c.le, c.lt) {
        (Some(le), _) => le.0 as i64,
        (None, Some(lt)) => lt.0 as i64 - 1,
        (None, None) => INT_DEFAULT_HI,
    };
    if lo > hi {
        return Err(SynthError::EmptyIntRange { lo, hi });
    }
    Ok((lo, hi))
}

/// Inclusive float interval for `c`, or an error when it is empty.
pub fn float_interval(c: &Constraints) -> Result<(f64, f64), SynthError> {
    let lo = match (c.ge, c.gt) {
        (Some(ge), _) => ge.0,
        (None, Some(gt)) => gt.0 + 0.1,
        (None, None) => FLOAT_DEFAULT_LO,
    };
    let hi = match (c.le, c.lt) {
        (Some(le), _) => le.0,
        (None, Some(lt)) => lt.0 - 0.1,
        (None, None) => FLOAT_DEFAULT_HI,
    };
    if lo > hi {
        return Err(SynthError::EmptyFloatRange { lo, hi });
    }
    Ok((lo, hi))
}

/// Round to 2 decimal digits (sample presentation policy).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn c(gt: Option<f64>, ge: Option<f64>, lt: Option<f64>, le: Option<f64>) -> Constraints {
        Constraints {
            gt: gt.map(OrderedFloat),
            ge: ge.map(OrderedFloat),
            lt: lt.map(OrderedFloat),
            le: le.map(OrderedFloat),
            ..Constraints::default()
        }
    }

    #[test]
    fn unconstrained_integers_use_the_historical_defaults() {
        assert_eq!(int_interval(&Constraints::default()).unwrap(), (2, 999));
    }

    #[test]
    fn inclusive_bounds_win_over_exclusive_ones() {
        let (lo, hi) = int_interval(&c(Some(0.0), Some(100.0), Some(2000.0), Some(999.0))).unwrap();
        assert_eq!((lo, hi), (100, 999));
    }

    #[test]
    fn exclusive_integer_bounds_are_nudged_inward() {
        let (lo, hi) = int_interval(&c(Some(10.0), None, Some(20.0), None)).unwrap();
        assert_eq!((lo, hi), (11, 19));
    }

    #[test]
    fn empty_integer_interval_is_an_error() {
        let err = int_interval(&c(None, Some(10.0), None, Some(5.0))).unwrap_err();
        assert!(matches!(err, SynthError::EmptyIntRange { lo: 10, hi: 5 }));
    }

    #[test]
    fn unconstrained_floats_use_the_historical_defaults() {
        assert_eq!(float_interval(&Constraints::default()).unwrap(), (1.1, 999.9));
    }

    #[test]
    fn exclusive_float_bounds_are_nudged_by_a_tenth() {
        let (lo, hi) = float_interval(&c(Some(1.0), None, Some(2.0), None)).unwrap();
        assert!((lo - 1.1).abs() < 1e-9);
        assert!((hi - 1.9).abs() < 1e-9);
    }

    #[test]
    fn empty_float_interval_is_an_error() {
        let err = float_interval(&c(None, Some(3.0), None, Some(2.0))).unwrap_err();
        assert!(matches!(err, SynthError::EmptyFloatRange { .. }));
    }

    #[test]
    fn round2_keeps_two_decimal_digits() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(-1.234), -1.23);
    }
}
