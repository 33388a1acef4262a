// ============================================================================
// Floating-Point Rounding
// Mode-driven rounding of an f64 to a number of fractional decimal digits
// ============================================================================
//
// Known limitation: rounding happens on `value * 10^decimals` in binary
// floating point. A decimal literal such as 2.675 is stored as
// 2.67499999999999982236431605997495353221893310546875, so after scaling it
// may not sit exactly on a .5 boundary and the half-* modes treat it as a
// non-tie. Use the integer path or `SafeDecimal` when ties must be exact.

use super::mode::{resolve, RoundingMode};
use crate::numeric::{NumericError, NumericResult};

/// Bias applied by `HalfDown` so that exact ties fall toward zero.
pub const HALF_DOWN_EPSILON: f64 = 1e-10;

/// 2^53: every f64 at or beyond this magnitude is already an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Powers of ten that are exactly representable in binary64
const EXACT_POWERS_OF_TEN: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

#[inline]
fn pow10(decimals: i32) -> f64 {
    usize::try_from(decimals)
        .ok()
        .and_then(|i| EXACT_POWERS_OF_TEN.get(i).copied())
        .unwrap_or_else(|| 10f64.powi(decimals))
}

/// Whether a fractional part lies exactly halfway between two integers.
///
/// This is an exact binary comparison; see the module notes for why decimal
/// ties may not satisfy it.
#[inline]
#[allow(clippy::float_cmp)]
pub fn is_exact_half(fraction: f64) -> bool {
    fraction.abs() == 0.5
}

/// Round `value` to `decimals` fractional digits.
///
/// `mode` is a [`RoundingMode`] or a raw tag / name to be validated.
/// NaN and infinities are returned unchanged.
///
/// # Errors
/// - `InvalidRoundingMode` if `mode` is not one of the seven modes (checked
///   before anything else)
/// - `InvalidPrecision` if `decimals` is negative
///
/// # Example
/// ```
/// use finarith::rounding::{round_f64, RoundingMode};
///
/// assert_eq!(round_f64(10.555, 2, RoundingMode::HalfUp), Ok(10.56));
/// assert_eq!(round_f64(10.555, 2, RoundingMode::Down), Ok(10.55));
/// ```
pub fn round_f64<M>(value: f64, decimals: i32, mode: M) -> NumericResult<f64>
where
    M: TryInto<RoundingMode>,
{
    let mode = resolve(mode)?;
    if decimals < 0 {
        return Err(NumericError::InvalidPrecision);
    }
    if !value.is_finite() {
        return Ok(value);
    }

    let multiplier = pow10(decimals);
    let scaled = value * multiplier;

    // Out of range, or no fractional digits left at this scale
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return Ok(value);
    }

    let rounded = match mode {
        RoundingMode::Down => scaled.trunc(),
        RoundingMode::Up => {
            if value >= 0.0 {
                scaled.ceil()
            } else {
                scaled.floor()
            }
        },
        RoundingMode::HalfUp => {
            if value >= 0.0 {
                (scaled + 0.5).floor()
            } else {
                (scaled - 0.5).ceil()
            }
        },
        RoundingMode::HalfDown => {
            if value >= 0.0 {
                (scaled + 0.5 - HALF_DOWN_EPSILON).floor()
            } else {
                (scaled - 0.5 + HALF_DOWN_EPSILON).ceil()
            }
        },
        RoundingMode::HalfEven => round_half_even(scaled),
        RoundingMode::Ceiling => scaled.ceil(),
        RoundingMode::Floor => scaled.floor(),
    };

    Ok(rounded / multiplier)
}

fn round_half_even(scaled: f64) -> f64 {
    let int_part = scaled.trunc();
    let fraction = scaled.fract();

    if !is_exact_half(fraction) {
        // f64::round breaks ties away from zero, but there are none here
        return scaled.round();
    }

    if int_part % 2.0 == 0.0 {
        int_part
    } else if int_part >= 0.0 {
        int_part + 1.0
    } else {
        int_part - 1.0
    }
}
