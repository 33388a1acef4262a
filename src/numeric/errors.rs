// ============================================================================
// Numeric Errors
// Failure taxonomy shared by the arithmetic, rounding, decimal and rule layers
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operand or result carried by a failure for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnitude {
    Signed(i64),
    Unsigned(u64),
    Decimal(Decimal),
}

impl From<i64> for Magnitude {
    #[inline]
    fn from(value: i64) -> Self {
        Magnitude::Signed(value)
    }
}

impl From<u64> for Magnitude {
    #[inline]
    fn from(value: u64) -> Self {
        Magnitude::Unsigned(value)
    }
}

impl From<Decimal> for Magnitude {
    #[inline]
    fn from(value: Decimal) -> Self {
        Magnitude::Decimal(value)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Signed(v) => write!(f, "{}", v),
            Magnitude::Unsigned(v) => write!(f, "{}", v),
            Magnitude::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// Arithmetic operator that overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    /// Operator symbol used in diagnostics
    pub const fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Stable, payload-free discriminant of a [`NumericError`].
///
/// Callers configuring or auditing rules match on this instead of the full
/// error so that diagnostic payloads can evolve without breaking them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ErrorKind {
    Overflow = 0,
    LimitExceeded = 1,
    InvalidPrecision = 2,
    InvalidRoundingMode = 3,
    DivisionByZero = 4,
    NegativeValue = 5,
    InvalidInput = 6,
}

/// Errors that can occur during checked arithmetic, rounding and rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// True result does not fit the target width (includes unsigned underflow)
    Overflow {
        op: ArithOp,
        lhs: Magnitude,
        rhs: Magnitude,
    },
    /// Result lies outside a caller-supplied upper limit or floor
    LimitExceeded {
        value: Magnitude,
        limit: Magnitude,
        operation: &'static str,
    },
    /// Negative decimal-digit count or non-positive rounding unit
    InvalidPrecision,
    /// Rounding mode outside the seven defined variants
    InvalidRoundingMode,
    /// Attempted division by zero
    DivisionByZero,
    /// Negative value where a non-negative one is required
    NegativeValue,
    /// Input string or float could not be turned into a decimal
    InvalidInput,
}

impl NumericError {
    /// Build an overflow failure for `lhs op rhs`.
    #[inline]
    pub fn overflow(op: ArithOp, lhs: impl Into<Magnitude>, rhs: impl Into<Magnitude>) -> Self {
        NumericError::Overflow {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Build a limit failure for a computed `value` that crossed `limit`.
    #[inline]
    pub fn limit_exceeded(
        value: impl Into<Magnitude>,
        limit: impl Into<Magnitude>,
        operation: &'static str,
    ) -> Self {
        NumericError::LimitExceeded {
            value: value.into(),
            limit: limit.into(),
            operation,
        }
    }

    /// Stable discriminant of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            NumericError::Overflow { .. } => ErrorKind::Overflow,
            NumericError::LimitExceeded { .. } => ErrorKind::LimitExceeded,
            NumericError::InvalidPrecision => ErrorKind::InvalidPrecision,
            NumericError::InvalidRoundingMode => ErrorKind::InvalidRoundingMode,
            NumericError::DivisionByZero => ErrorKind::DivisionByZero,
            NumericError::NegativeValue => ErrorKind::NegativeValue,
            NumericError::InvalidInput => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow { op, lhs, rhs } => {
                write!(f, "arithmetic overflow: {} {} {}", lhs, op, rhs)
            },
            NumericError::LimitExceeded {
                value,
                limit,
                operation,
            } => write!(f, "{} exceeds {} limit of {}", value, operation, limit),
            NumericError::InvalidPrecision => write!(f, "invalid precision"),
            NumericError::InvalidRoundingMode => write!(f, "invalid rounding mode"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeValue => write!(f, "negative value not allowed"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
