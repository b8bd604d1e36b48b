// ============================================================================
// Numeric Engine Library
// Runtime semantics for the divmod and round numeric built-ins
// ============================================================================

//! # Numeric Engine
//!
//! Runtime semantics for two numeric built-in operations over a tagged
//! value union:
//!
//! - **divmod**: floor-division quotient and remainder, with the quotient
//!   rounded toward negative infinity and the remainder sign-matching the
//!   divisor
//! - **round**: decimal-digit rounding with round-half-to-even
//!   tie-breaking, computed against the exact binary value of the double
//!
//! Integer operand pairs stay integral; any float operand promotes both
//! sides. Invalid inputs fail with exact, stable error message text, so
//! callers can assert on failures.
//!
//! ## Example
//!
//! ```rust
//! use numeric_engine::prelude::*;
//!
//! let result = divmod(&Value::Int(-20000), &Value::Int(999)).unwrap();
//! assert_eq!(result.quotient, Number::Int(-21));
//! assert_eq!(result.remainder, Number::Int(979));
//!
//! let rounded = round(&Value::Float(2.675), Some(&Value::Int(2))).unwrap();
//! assert_eq!(rounded, Number::Float(2.67));
//!
//! let err = round(&Value::from("test"), None).unwrap_err();
//! assert_eq!(err.message(), "a float is required");
//! ```

pub mod builtins;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::builtins::{divmod, round};
    pub use crate::numeric::{DivModResult, Number, NumericError, NumericResult, Value};
}
