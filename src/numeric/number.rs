// ============================================================================
// Runtime Value Model
// Tagged unions for the values reaching the numeric built-ins
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A runtime value that may be passed to a numeric built-in.
///
/// The built-ins accept any runtime value and reject non-numeric operands
/// themselves, so the union carries a text variant alongside the numeric
/// ones.
///
/// # Example
/// ```rust
/// use numeric_engine::numeric::{Number, Value};
///
/// assert_eq!(Value::Int(2).as_number(), Some(Number::Int(2)));
/// assert_eq!(Value::from("test").as_number(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Native signed integer
    Int(i64),
    /// IEEE-754 double
    Float(f64),
    /// Text value; rejected by every numeric operation
    Str(String),
}

impl Value {
    /// Runtime type name, as spelled in operand error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
        }
    }

    /// Narrow to the numeric subset, if this value is numeric.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::Str(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

/// The numeric subset of [`Value`].
///
/// Operations promote a `Number` pair to a common representation at entry:
/// Int/Int stays integral, any Float operand coerces both sides to Float.
/// Equality is structural, so `Int(2)` and `Float(2.0)` are distinct
/// results.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// Native signed integer
    Int(i64),
    /// IEEE-754 double
    Float(f64),
}

impl Number {
    /// Promote to a double. Exact for floats; integers convert with the
    /// platform's int-to-double rounding.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Check whether this number carries the Float tag.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// Integers print without a decimal point; floats always carry one
/// (`2` vs `2.0`), except large magnitudes which keep the shortest form.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// A pair of operands promoted to a common representation.
pub(crate) enum Promoted {
    Ints(i64, i64),
    Floats(f64, f64),
}

/// Promote an operand pair at operation entry.
///
/// Mixed pairs coerce to Float; an Int/Int pair stays integral so the
/// operation can produce integer-tagged results.
pub(crate) fn promote_pair(a: Number, b: Number) -> Promoted {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => Promoted::Ints(x, y),
        (x, y) => Promoted::Floats(x.to_f64(), y.to_f64()),
    }
}

/// Result of a floor division with remainder: an ordered pair.
///
/// Invariants: `quotient * divisor + remainder == dividend` (up to
/// floating-point rounding when the operands were promoted), and the
/// remainder is zero or sign-matches the divisor. Both components are
/// `Int` iff both operands were `Int`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DivModResult {
    /// Floor-division quotient
    pub quotient: Number,
    /// Remainder, zero or sign-matching the divisor
    pub remainder: Number,
}

impl DivModResult {
    #[inline]
    pub const fn new(quotient: Number, remainder: Number) -> Self {
        Self {
            quotient,
            remainder,
        }
    }

    /// The (quotient, remainder) pair.
    #[inline]
    pub const fn into_pair(self) -> (Number, Number) {
        (self.quotient, self.remainder)
    }
}

impl fmt::Display for DivModResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.quotient, self.remainder)
    }
}

impl From<DivModResult> for (Number, Number) {
    fn from(result: DivModResult) -> Self {
        result.into_pair()
    }
}
