// ============================================================================
// Integer Rounding
// Exact mode-driven rounding of an i64 to a multiple of a positive unit
// ============================================================================
//
// Everything is derived from the truncating quotient and remainder of
// `value / unit`, so no intermediate leaves the i64 domain. Only the final
// step away from zero can overflow, and that is reported instead of wrapped.

use super::mode::{resolve, RoundingMode};
use crate::numeric::{ArithOp, NumericError, NumericResult};
use std::cmp::Ordering;

/// Round `value` to a multiple of `unit`.
///
/// `mode` is a [`RoundingMode`] or a raw tag / name to be validated.
///
/// # Errors
/// - `InvalidRoundingMode` if `mode` is not one of the seven modes (checked
///   before anything else)
/// - `InvalidPrecision` if `unit <= 0`
/// - `Overflow` if the rounded multiple lies outside the i64 range
///
/// # Example
/// ```
/// use finarith::rounding::{round_i64, RoundingMode};
///
/// assert_eq!(round_i64(155, 10, RoundingMode::HalfUp), Ok(160));
/// assert_eq!(round_i64(170, 20, RoundingMode::HalfEven), Ok(160));
/// ```
pub fn round_i64<M>(value: i64, unit: i64, mode: M) -> NumericResult<i64>
where
    M: TryInto<RoundingMode>,
{
    let mode = resolve(mode)?;
    if unit <= 0 {
        return Err(NumericError::InvalidPrecision);
    }

    let quotient = value / unit;
    let remainder = value % unit;

    // Already aligned: identical under every mode
    if remainder == 0 {
        return Ok(value);
    }

    // |quotient * unit| <= |value|, so this cannot overflow
    let toward_zero = quotient * unit;

    match mode {
        RoundingMode::Down => Ok(toward_zero),
        RoundingMode::Up => {
            // Negative values keep the truncated multiple: -155 -> -150
            if value > 0 {
                away_from_zero(value, quotient, unit)
            } else {
                Ok(toward_zero)
            }
        },
        RoundingMode::HalfUp => match compare_to_half(remainder, unit) {
            Ordering::Less => Ok(toward_zero),
            Ordering::Equal | Ordering::Greater => away_from_zero(value, quotient, unit),
        },
        RoundingMode::HalfDown => match compare_to_half(remainder, unit) {
            Ordering::Less | Ordering::Equal => Ok(toward_zero),
            Ordering::Greater => away_from_zero(value, quotient, unit),
        },
        RoundingMode::HalfEven => match compare_to_half(remainder, unit) {
            Ordering::Less => Ok(toward_zero),
            Ordering::Greater => away_from_zero(value, quotient, unit),
            Ordering::Equal if quotient % 2 == 0 => Ok(toward_zero),
            Ordering::Equal => away_from_zero(value, quotient, unit),
        },
        RoundingMode::Ceiling => {
            if value > 0 {
                away_from_zero(value, quotient, unit)
            } else {
                Ok(toward_zero)
            }
        },
        RoundingMode::Floor => {
            if value > 0 {
                Ok(toward_zero)
            } else {
                away_from_zero(value, quotient, unit)
            }
        },
    }
}

/// Compare `|remainder|` with `unit / 2` without halving (exact for odd units).
#[inline]
fn compare_to_half(remainder: i64, unit: i64) -> Ordering {
    let rem = remainder.unsigned_abs();
    let other = unit.unsigned_abs() - rem;
    rem.cmp(&other)
}

/// The multiple one step further from zero than the truncated quotient.
#[inline]
fn away_from_zero(value: i64, quotient: i64, unit: i64) -> NumericResult<i64> {
    // A non-zero remainder implies unit >= 2, so quotient +/- 1 stays in range
    let next = if value > 0 { quotient + 1 } else { quotient - 1 };
    next.checked_mul(unit)
        .ok_or_else(|| NumericError::overflow(ArithOp::Mul, next, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;
    use proptest::prelude::*;

    fn round(value: i64, unit: i64, mode: RoundingMode) -> i64 {
        round_i64(value, unit, mode).unwrap()
    }

    #[test]
    fn test_round_down() {
        assert_eq!(round(155, 10, RoundingMode::Down), 150);
        assert_eq!(round(-155, 10, RoundingMode::Down), -150);
        assert_eq!(round(-151, 10, RoundingMode::Down), -150);
    }

    #[test]
    fn test_round_up() {
        assert_eq!(round(155, 10, RoundingMode::Up), 160);
        assert_eq!(round(151, 10, RoundingMode::Up), 160);
        assert_eq!(round(-155, 10, RoundingMode::Up), -150);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(155, 10, RoundingMode::HalfUp), 160);
        assert_eq!(round(154, 10, RoundingMode::HalfUp), 150);
        assert_eq!(round(-155, 10, RoundingMode::HalfUp), -160);
        assert_eq!(round(-154, 10, RoundingMode::HalfUp), -150);
    }

    #[test]
    fn test_round_half_down() {
        assert_eq!(round(155, 10, RoundingMode::HalfDown), 150);
        assert_eq!(round(156, 10, RoundingMode::HalfDown), 160);
        assert_eq!(round(-155, 10, RoundingMode::HalfDown), -150);
        assert_eq!(round(-156, 10, RoundingMode::HalfDown), -160);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round(150, 20, RoundingMode::HalfEven), 160);
        assert_eq!(round(170, 20, RoundingMode::HalfEven), 160);
        assert_eq!(round(-150, 20, RoundingMode::HalfEven), -160);
        assert_eq!(round(-170, 20, RoundingMode::HalfEven), -160);
        assert_eq!(round(-10, 20, RoundingMode::HalfEven), 0);
        assert_eq!(round(171, 20, RoundingMode::HalfEven), 180);
        assert_eq!(round(169, 20, RoundingMode::HalfEven), 160);
    }

    #[test]
    fn test_odd_unit_has_no_ties() {
        // 7 is nearer 5 than 10, whatever the tie rule
        assert_eq!(round(7, 5, RoundingMode::HalfEven), 5);
        assert_eq!(round(7, 5, RoundingMode::HalfUp), 5);
        assert_eq!(round(8, 5, RoundingMode::HalfDown), 10);
    }

    #[test]
    fn test_round_ceiling_and_floor() {
        assert_eq!(round(151, 10, RoundingMode::Ceiling), 160);
        assert_eq!(round(-151, 10, RoundingMode::Ceiling), -150);
        assert_eq!(round(159, 10, RoundingMode::Floor), 150);
        assert_eq!(round(-151, 10, RoundingMode::Floor), -160);
        assert_eq!(round(-150, 10, RoundingMode::Floor), -150);
    }

    #[test]
    fn test_unit_one_is_identity() {
        for mode in RoundingMode::ALL {
            assert_eq!(round(i64::MAX, 1, mode), i64::MAX);
            assert_eq!(round(i64::MIN, 1, mode), i64::MIN);
            assert_eq!(round(-7, 1, mode), -7);
        }
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            round_i64(155, 0, RoundingMode::HalfUp),
            Err(NumericError::InvalidPrecision)
        );
        assert_eq!(
            round_i64(155, -10, RoundingMode::HalfUp),
            Err(NumericError::InvalidPrecision)
        );
        assert_eq!(round_i64(155, 10, 99i32), Err(NumericError::InvalidRoundingMode));
        assert_eq!(round_i64(155, 0, 99i32), Err(NumericError::InvalidRoundingMode));
        assert_eq!(
            round_i64(150, 20, "Round_Half_Even"),
            Err(NumericError::InvalidRoundingMode)
        );
    }

    #[test]
    fn test_overflow_at_domain_edges() {
        let err = round_i64(i64::MAX, 10, RoundingMode::Up).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        let err = round_i64(i64::MIN, 10, RoundingMode::Floor).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert_eq!(
            round_i64(i64::MAX, 10, RoundingMode::Down),
            Ok(9_223_372_036_854_775_800)
        );
    }

    proptest! {
        #[test]
        fn prop_aligned_values_unchanged(q in -1_000_000_000i64..1_000_000_000, unit in 1i64..1_000_000) {
            let value = q * unit;
            for mode in RoundingMode::ALL {
                prop_assert_eq!(round_i64(value, unit, mode), Ok(value));
            }
        }

        #[test]
        fn prop_results_are_neighbouring_multiples(value in -1_000_000_000_000i64..1_000_000_000_000, unit in 1i64..1_000_000) {
            let floor = round(value, unit, RoundingMode::Floor);
            let ceiling = round(value, unit, RoundingMode::Ceiling);
            prop_assert!(floor <= value && value <= ceiling);
            prop_assert!(ceiling - floor <= unit);
            for mode in RoundingMode::ALL {
                let r = round(value, unit, mode);
                prop_assert_eq!(r % unit, 0);
                prop_assert!(r == floor || r == ceiling);
            }
        }

        #[test]
        fn prop_half_even_ties_land_on_even_quotient(q in -1_000_000i64..1_000_000, half in 1i64..1_000_000) {
            let unit = half * 2;
            let value = q * unit + half;
            let r = round(value, unit, RoundingMode::HalfEven);
            prop_assert_eq!((r / unit) % 2, 0);
            prop_assert_eq!((r - value).abs(), half);
        }
    }
}
