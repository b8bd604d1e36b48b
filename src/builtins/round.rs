// ============================================================================
// Decimal Rounding
// ============================================================================

use std::cmp::Ordering;

use crate::numeric::{Number, NumericError, NumericResult, Value};

/// Most fractional decimal digits any finite double carries (the smallest
/// subnormal has 1074 of them). Rounding further right is the identity.
const MAX_FRACTION_DIGITS: i64 = 1074;

/// Most integral decimal digits any finite double carries (the largest
/// double has 309). Rounding further left always yields zero.
const MAX_INTEGER_DIGITS: i64 = 309;

/// Round a value to `ndigits` decimal digits, half-to-even.
///
/// The result is always float-tagged, including for integer input and for
/// the omitted-`ndigits` form (`round(0)` is `0.0`). Rounding is performed
/// against the exact decimal expansion of the double, so values stored
/// slightly below their decimal spelling round the way the binary value
/// dictates: `round(2.675, 2)` is `2.67`.
///
/// Negative `ndigits` rounds left of the decimal point (tens, hundreds,
/// ...); magnitudes beyond the double's decimal range degrade to a signed
/// zero rather than erroring.
///
/// # Errors
/// - `InvalidArgumentType` if `value` is non-numeric (`a float is
///   required`) or `ndigits` is not integer-tagged (`'float' object cannot
///   be interpreted as an index`)
/// - `Overflow` if the rounded value exceeds the double range
///
/// # Example
/// ```rust
/// use numeric_engine::prelude::*;
///
/// let rounded = round(&Value::Float(2.675), Some(&Value::Int(2))).unwrap();
/// assert_eq!(rounded, Number::Float(2.67));
///
/// let rounded = round(&Value::Float(-1.5), None).unwrap();
/// assert_eq!(rounded, Number::Float(-2.0));
/// ```
pub fn round(value: &Value, ndigits: Option<&Value>) -> NumericResult<Number> {
    // Arguments convert left to right: the value is checked before ndigits.
    let number = value.as_number().ok_or_else(|| {
        tracing::trace!(type_name = value.type_name(), "non-numeric value in round");
        NumericError::float_required()
    })?;

    let digits = match ndigits {
        None => 0,
        Some(Value::Int(n)) => *n,
        Some(other) => {
            return Err(NumericError::cannot_interpret_as_index(other.type_name()));
        }
    };

    round_f64(number.to_f64(), digits).map(Number::Float)
}

/// Round a double to `ndigits` decimal digits by correctly-rounded decimal
/// string construction.
///
/// Scaling by powers of ten in binary would mis-round values whose decimal
/// spelling is not exactly representable. Formatting instead emits the
/// exact decimal expansion rounded half-to-even, and re-parsing the
/// rounded string is itself correctly rounded.
fn round_f64(x: f64, ndigits: i64) -> NumericResult<f64> {
    // No decimal expansion exists for NaN or the infinities.
    if !x.is_finite() {
        return Ok(x);
    }
    if ndigits >= MAX_FRACTION_DIGITS {
        return Ok(x);
    }
    if ndigits <= -MAX_INTEGER_DIGITS {
        return Ok(0.0_f64.copysign(x));
    }

    if ndigits >= 0 {
        let rounded = format!("{:.*}", ndigits as usize, x);
        Ok(rounded
            .parse()
            .expect("fixed-precision float formatting reparses"))
    } else {
        round_left_of_point(x, (-ndigits) as usize)
    }
}

/// Round at `places` digits left of the decimal point against the exact
/// decimal expansion, half-to-even.
fn round_left_of_point(x: f64, places: usize) -> NumericResult<f64> {
    let expansion = format!("{:.*}", MAX_FRACTION_DIGITS as usize, x.abs());
    let (int_digits, frac_digits) = expansion
        .split_once('.')
        .unwrap_or((expansion.as_str(), ""));

    // The rounding position sits above the value's magnitude entirely.
    if places > int_digits.len() {
        return Ok(0.0_f64.copysign(x));
    }

    let keep = int_digits.len() - places;
    let (kept, dropped) = int_digits.split_at(keep);

    // The first dropped digit decides; the rest of the tail, fraction
    // included, breaks ties. An exact tie keeps the even neighbor.
    let first = dropped.as_bytes()[0];
    let round_up = match first.cmp(&b'5') {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => {
            let tail_nonzero = dropped.bytes().skip(1).any(|d| d != b'0')
                || frac_digits.bytes().any(|d| d != b'0');
            if tail_nonzero {
                true
            } else {
                let last_kept = kept.as_bytes().last().copied().unwrap_or(b'0');
                (last_kept - b'0') % 2 == 1
            }
        }
    };

    let mut digits = kept.as_bytes().to_vec();
    if round_up {
        increment_digits(&mut digits);
    }
    if digits.iter().all(|&d| d == b'0') {
        return Ok(0.0_f64.copysign(x));
    }

    let mut rounded = String::from_utf8(digits).expect("decimal digits are ascii");
    rounded.extend(std::iter::repeat('0').take(places));

    let magnitude: f64 = rounded
        .parse()
        .expect("rebuilt decimal string reparses");
    if magnitude.is_infinite() {
        return Err(NumericError::rounded_value_overflow());
    }
    Ok(magnitude.copysign(x))
}

/// Increment a decimal digit string in place, growing on full carry.
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn round_float(x: f64, ndigits: i64) -> f64 {
        match round(&Value::Float(x), Some(&Value::Int(ndigits))) {
            Ok(Number::Float(f)) => f,
            other => panic!("round must produce a float, got {:?}", other),
        }
    }

    fn round_default(value: Value) -> f64 {
        match round(&value, None) {
            Ok(Number::Float(f)) => f,
            other => panic!("round must produce a float, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_values_become_floats() {
        assert_eq!(round_default(Value::Int(0)), 0.0);
        assert_eq!(round_default(Value::Int(-1)), -1.0);
        assert_eq!(round_float(0.0, 2), 0.0);
        assert_eq!(
            round(&Value::Int(1), Some(&Value::Int(8))).unwrap(),
            Number::Float(1.0)
        );
    }

    #[test]
    fn test_whole_and_near_whole() {
        assert_eq!(round_default(Value::Float(0.2)), 0.0);
        assert_eq!(round_default(Value::Float(1.0)), 1.0);
        assert_eq!(round_default(Value::Float(1.1)), 1.0);
        assert_eq!(round_default(Value::Float(1.9)), 2.0);
    }

    #[test]
    fn test_half_to_even_at_zero_digits() {
        assert_eq!(round_default(Value::Float(0.5)), 0.0);
        assert_eq!(round_default(Value::Float(1.5)), 2.0);
        assert_eq!(round_default(Value::Float(2.5)), 2.0);
        assert_eq!(round_default(Value::Float(-1.5)), -2.0);
        assert_eq!(round_float(-1.5, 0), -2.0);
        assert_eq!(round_float(-2.5, 0), -2.0);
    }

    #[test]
    fn test_signed_zero_preserved() {
        let rounded = round_default(Value::Float(-0.165));
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_negative());
    }

    #[test]
    fn test_binary_value_wins_over_decimal_spelling() {
        // 2.675 is stored just below its spelling, so no tie is involved
        assert_eq!(round_float(2.675, 2), 2.67);
        assert_eq!(round_float(-2.675, 2), -2.67);
        assert_eq!(round_float(-2.567, 2), -2.57);
    }

    #[test]
    fn test_fractional_digit_corpus() {
        assert_eq!(round_float(22.222222, 1), 22.2);
        assert_eq!(round_float(2.67556756, 6), 2.675568);
    }

    #[test]
    fn test_precision_beyond_the_double() {
        // 40 digits exceed the value's fractional expansion near 2.68
        assert_eq!(round_float(2.67556757, 40), 2.67556757);
        assert_eq!(round_float(1.5, 2000), 1.5);
    }

    #[test]
    fn test_left_of_point() {
        assert_eq!(round_float(22.22222, -1), 20.0);
        assert_eq!(round_float(22.22222, -2), 0.0);
        assert_eq!(round_float(567.0, -1), 570.0);
        assert_eq!(round_float(567.0, -3), 1000.0);
        assert_eq!(round_float(-567.0, -1), -570.0);
    }

    #[test]
    fn test_left_of_point_half_to_even() {
        assert_eq!(round_float(25.0, -1), 20.0);
        assert_eq!(round_float(35.0, -1), 40.0);
        assert_eq!(round_float(250.0, -2), 200.0);
        // a nonzero tail anywhere below the tie digit rounds up
        assert_eq!(round_float(25.000001, -1), 30.0);
        assert_eq!(round_float(251.0, -2), 300.0);
    }

    #[test]
    fn test_large_negative_magnitudes_degrade_to_zero() {
        assert_eq!(round_float(123.456, -308), 0.0);
        assert_eq!(round_float(123.456, -700), 0.0);
        assert_eq!(round_float(123.456, i64::MIN), 0.0);
        assert!(round_float(-123.456, -700).is_sign_negative());
    }

    #[test]
    fn test_rounded_value_overflow() {
        let err = round(&Value::Float(f64::MAX), Some(&Value::Int(-308))).unwrap_err();
        assert!(matches!(err, NumericError::Overflow(_)));
        assert_eq!(err.message(), "rounded value too large to represent");
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert!(round_default(Value::Float(f64::NAN)).is_nan());
        assert_eq!(round_float(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_float(f64::NEG_INFINITY, -2), f64::NEG_INFINITY);
    }

    #[test]
    fn test_non_numeric_value() {
        let err = round(&Value::from("test"), None).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgumentType(_)));
        assert_eq!(err.message(), "a float is required");
    }

    #[test]
    fn test_float_ndigits_rejected() {
        let err = round(&Value::Int(-1), Some(&Value::Float(0.6))).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgumentType(_)));
        assert_eq!(
            err.message(),
            "'float' object cannot be interpreted as an index"
        );

        // whole-valued floats are still not an index
        let err = round(&Value::Int(-1), Some(&Value::Float(1.0))).unwrap_err();
        assert_eq!(
            err.message(),
            "'float' object cannot be interpreted as an index"
        );
    }

    #[test]
    fn test_value_is_checked_before_ndigits() {
        let err = round(&Value::from("test"), Some(&Value::Float(0.6))).unwrap_err();
        assert_eq!(err.message(), "a float is required");
    }

    proptest! {
        #[test]
        fn prop_round_is_idempotent(x in any::<f64>(), n in 0i64..=20) {
            prop_assume!(x.is_finite());
            let once = round_float(x, n);
            prop_assert_eq!(round_float(once, n), once);
        }

        #[test]
        fn prop_result_is_within_half_step(x in -1e9f64..1e9, n in 0i64..=6) {
            let rounded = round_float(x, n);
            let step = 10f64.powi(-(n as i32));
            // allow for the reparse landing one ulp off the decimal result
            let slack = (x.abs() + 1.0) * f64::EPSILON;
            prop_assert!((rounded - x).abs() <= step / 2.0 + slack);
        }
    }
}
