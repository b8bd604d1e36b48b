// ============================================================================
// Numeric Errors
// Error signaling for the numeric built-in operations
// ============================================================================

use std::fmt;

/// Errors raised by the numeric built-in operations.
///
/// Every variant carries the exact message text the runtime reports for
/// that failure. Callers asserting on failures match the variant for the
/// error kind and compare [`message`](NumericError::message) for the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Divisor was exactly zero
    DivisionByZero(String),
    /// Operand type not accepted by the operation
    InvalidArgumentType(String),
    /// Result not representable in the native numeric range
    Overflow(String),
}

impl NumericError {
    /// Zero divisor on the integer divmod path.
    pub fn integer_division_by_zero() -> Self {
        Self::DivisionByZero("integer division or modulo by zero".to_string())
    }

    /// Zero divisor on the float divmod path.
    pub fn float_divmod_by_zero() -> Self {
        Self::DivisionByZero("float divmod()".to_string())
    }

    /// Non-numeric value passed where a float is expected.
    pub fn float_required() -> Self {
        Self::InvalidArgumentType("a float is required".to_string())
    }

    /// Non-integer value passed where an index is expected.
    ///
    /// Floating-point values are rejected even when numerically whole.
    pub fn cannot_interpret_as_index(type_name: &str) -> Self {
        Self::InvalidArgumentType(format!(
            "'{}' object cannot be interpreted as an index",
            type_name
        ))
    }

    /// Non-numeric operand reaching divmod.
    pub fn unsupported_divmod_operands(lhs: &str, rhs: &str) -> Self {
        Self::InvalidArgumentType(format!(
            "unsupported operand type(s) for divmod(): '{}' and '{}'",
            lhs, rhs
        ))
    }

    /// Integer divmod result outside the native integer range.
    pub fn integer_division_overflow() -> Self {
        Self::Overflow("integer division result out of range".to_string())
    }

    /// Rounded value too large for a double.
    pub fn rounded_value_overflow() -> Self {
        Self::Overflow("rounded value too large to represent".to_string())
    }

    /// The exact message text for this error.
    pub fn message(&self) -> &str {
        match self {
            NumericError::DivisionByZero(msg)
            | NumericError::InvalidArgumentType(msg)
            | NumericError::Overflow(msg) => msg,
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
