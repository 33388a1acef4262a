// ============================================================================
// Checked Signed Arithmetic
// Overflow-safe i64 operations without widening to i128
// ============================================================================
//
// Every overflow test is a single 64-bit comparison against a bound derived
// from i64::MAX / i64::MIN, so the checks hold over the full domain.

use super::errors::{ArithOp, NumericError, NumericResult};

/// Checked addition.
///
/// # Errors
/// Returns `Overflow` if `a + b` is outside `[i64::MIN, i64::MAX]`.
#[inline]
pub fn add(a: i64, b: i64) -> NumericResult<i64> {
    if b > 0 && a > i64::MAX - b {
        return Err(NumericError::overflow(ArithOp::Add, a, b));
    }
    if b < 0 && a < i64::MIN - b {
        return Err(NumericError::overflow(ArithOp::Add, a, b));
    }
    Ok(a + b)
}

/// Checked subtraction.
///
/// # Errors
/// Returns `Overflow` if `a - b` is outside `[i64::MIN, i64::MAX]`.
#[inline]
pub fn sub(a: i64, b: i64) -> NumericResult<i64> {
    // Very negative b pushes the difference past MAX
    if b < 0 && a > i64::MAX + b {
        return Err(NumericError::overflow(ArithOp::Sub, a, b));
    }
    // Very positive b pushes it below MIN
    if b > 0 && a < i64::MIN + b {
        return Err(NumericError::overflow(ArithOp::Sub, a, b));
    }
    Ok(a - b)
}

/// Checked multiplication.
///
/// Dispatches on the sign pair of the operands and compares one operand
/// against `MAX / other` or `MIN / other`. Integer division truncates toward
/// zero, which keeps each comparison exact for integer operands.
///
/// # Errors
/// Returns `Overflow` if `a * b` is outside `[i64::MIN, i64::MAX]`.
#[inline]
pub fn mul(a: i64, b: i64) -> NumericResult<i64> {
    // Zero short-circuit keeps the divisors below non-zero
    if a == 0 || b == 0 {
        return Ok(0);
    }

    let overflows = if a > 0 && b > 0 {
        a > i64::MAX / b
    } else if a < 0 && b < 0 {
        // Positive product; MAX / b is negative
        a < i64::MAX / b
    } else if a > 0 && b < 0 {
        b < i64::MIN / a
    } else {
        // a < 0 && b > 0
        a < i64::MIN / b
    };

    if overflows {
        return Err(NumericError::overflow(ArithOp::Mul, a, b));
    }
    Ok(a * b)
}

/// Checked addition rejecting results above `limit`.
///
/// # Errors
/// - `Overflow` from [`add`], unchanged
/// - `LimitExceeded` carrying the sum and `limit` if the sum is above `limit`
#[inline]
pub fn add_with_limit(a: i64, b: i64, limit: i64) -> NumericResult<i64> {
    let result = add(a, b)?;
    if result > limit {
        return Err(NumericError::limit_exceeded(result, limit, "addition"));
    }
    Ok(result)
}

/// Checked subtraction rejecting results below `floor`.
///
/// # Errors
/// - `Overflow` from [`sub`], unchanged
/// - `LimitExceeded` carrying the difference and `floor` if below `floor`
#[inline]
pub fn sub_with_floor(a: i64, b: i64, floor: i64) -> NumericResult<i64> {
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
///
/// # Errors
/// - `Overflow` from [`mul`], unchanged
/// - `LimitExceeded` carrying the product and `limit` if above `limit`
#[inline]
pub fn mul_with_limit(a: i64, b: i64, limit: i64) -> NumericResult<i64> {
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
