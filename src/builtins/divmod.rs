// ============================================================================
// Floor Division With Remainder
// ============================================================================

use crate::numeric::{promote_pair, DivModResult, Number, NumericError, NumericResult, Promoted, Value};

/// Compute the floor-division quotient and remainder of two values.
///
/// The quotient rounds toward negative infinity (not toward zero), which
/// makes the remainder zero or sign-matching the divisor. An Int/Int pair
/// yields an Int pair; any Float operand promotes both sides and yields a
/// Float pair.
///
/// # Errors
/// - `InvalidArgumentType` if either operand is non-numeric
/// - `DivisionByZero` if the divisor is zero
/// - `Overflow` for the single unrepresentable integer case
///   (`i64::MIN / -1`)
///
/// # Example
/// ```rust
/// use numeric_engine::prelude::*;
///
/// let result = divmod(&Value::Int(-20000), &Value::Int(999)).unwrap();
/// assert_eq!(result.into_pair(), (Number::Int(-21), Number::Int(979)));
/// ```
pub fn divmod(dividend: &Value, divisor: &Value) -> NumericResult<DivModResult> {
    let (Some(a), Some(b)) = (dividend.as_number(), divisor.as_number()) else {
        return Err(NumericError::unsupported_divmod_operands(
            dividend.type_name(),
            divisor.type_name(),
        ));
    };

    match promote_pair(a, b) {
        Promoted::Ints(x, y) => int_divmod(x, y),
        Promoted::Floats(x, y) => float_divmod(x, y),
    }
}

fn int_divmod(a: i64, b: i64) -> NumericResult<DivModResult> {
    if b == 0 {
        tracing::trace!(dividend = a, "integer divmod with zero divisor");
        return Err(NumericError::integer_division_by_zero());
    }
    if a == i64::MIN && b == -1 {
        return Err(NumericError::integer_division_overflow());
    }

    // Native division truncates toward zero; floor division rounds toward
    // negative infinity. Adjust when the truncated remainder disagrees in
    // sign with the divisor.
    let mut quotient = a / b;
    let mut remainder = a % b;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        quotient -= 1;
        remainder += b;
    }

    Ok(DivModResult::new(
        Number::Int(quotient),
        Number::Int(remainder),
    ))
}

fn float_divmod(a: f64, b: f64) -> NumericResult<DivModResult> {
    if b == 0.0 {
        tracing::trace!(dividend = a, "float divmod with zero divisor");
        return Err(NumericError::float_divmod_by_zero());
    }

    // IEEE remainder keeps the dividend's sign; fold it onto the divisor's
    // side and compensate the raw quotient before flooring.
    let mut remainder = a % b;
    let mut div = (a - remainder) / b;
    if remainder != 0.0 {
        if (b < 0.0) != (remainder < 0.0) {
            remainder += b;
            div -= 1.0;
        }
    } else {
        remainder = 0.0_f64.copysign(b);
    }

    let quotient = if div != 0.0 {
        let mut floored = div.floor();
        // div is within half an ulp of an integer here; snap back up if
        // flooring overshot.
        if div - floored > 0.5 {
            floored += 1.0;
        }
        floored
    } else {
        0.0_f64.copysign(a / b)
    };

    Ok(DivModResult::new(
        Number::Float(quotient),
        Number::Float(remainder),
    ))
}
