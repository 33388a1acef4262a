// ============================================================================
// Checked Unsigned Arithmetic
// Overflow-safe u64 operations; underflow is reported as Overflow
// ============================================================================

use super::errors::{ArithOp, NumericError, NumericResult};

/// Checked addition.
///
/// # Errors
/// Returns `Overflow` if `a + b > u64::MAX`.
#[inline]
pub fn add(a: u64, b: u64) -> NumericResult<u64> {
    if b > 0 && a > u64::MAX - b {
        return Err(NumericError::overflow(ArithOp::Add, a, b));
    }
    Ok(a + b)
}

/// Checked subtraction.
///
/// # Errors
/// Returns `Overflow` if `a < b` (the difference would be negative).
#[inline]
pub fn sub(a: u64, b: u64) -> NumericResult<u64> {
    if a < b {
        return Err(NumericError::overflow(ArithOp::Sub, a, b));
    }
    Ok(a - b)
}

/// Checked multiplication.
///
/// # Errors
/// Returns `Overflow` if `a * b > u64::MAX`.
#[inline]
pub fn mul(a: u64, b: u64) -> NumericResult<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    if a > u64::MAX / b {
        return Err(NumericError::overflow(ArithOp::Mul, a, b));
    }
    Ok(a * b)
}

/// Checked addition rejecting results above `limit`.
#[inline]
pub fn add_with_limit(a: u64, b: u64, limit: u64) -> NumericResult<u64> {
    let result = add(a, b)?;
    if result > limit {
        return Err(NumericError::limit_exceeded(result, limit, "addition"));
    }
    Ok(result)
}

/// Checked subtraction rejecting results below `floor`.
#[inline]
pub fn sub_with_floor(a: u64, b: u64, floor: u64) -> NumericResult<u64> {
    let result = sub(a, b)?;
    if result < floor {
        return Err(NumericError::limit_exceeded(
            result,
            floor,
            "subtraction floor",
        ));
    }
    Ok(result)
}

/// Checked multiplication rejecting results above `limit`.
#[inline]
pub fn mul_with_limit(a: u64, b: u64, limit: u64) -> NumericResult<u64> {
    let result = mul(a, b)?;
    if result > limit {
        return Err(NumericError::limit_exceeded(
            result,
            limit,
            "multiplication",
        ));
    }
    Ok(result)
}
