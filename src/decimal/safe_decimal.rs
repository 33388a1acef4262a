// ============================================================================
// Safe Decimal
// Checked, mode-aware wrapper around rust_decimal::Decimal
// ============================================================================

use crate::numeric::{ArithOp, NumericError, NumericResult};
use crate::rounding::{resolve, RoundingMode};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal number for money amounts, rates and prices.
///
/// All arithmetic is delegated to `rust_decimal` (96-bit mantissa, scale up
/// to 28). This type only adds the overflow/zero/sign checks and the
/// limit-bounded operations, returning `NumericResult` instead of panicking.
///
/// # Example
/// ```
/// use finarith::decimal::SafeDecimal;
/// use finarith::rounding::RoundingMode;
///
/// let price: SafeDecimal = "19.99".parse().unwrap();
/// let qty = SafeDecimal::from_i64(3);
/// let total = price.checked_mul(qty).unwrap();
/// assert_eq!(total.to_string(), "59.97");
///
/// let third = total.div_round(qty, 1, RoundingMode::HalfEven).unwrap();
/// assert_eq!(third.to_string(), "20.0");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct SafeDecimal(Decimal);

impl From<RoundingMode> for RoundingStrategy {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

impl SafeDecimal {
    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1)
    pub const ONE: Self = Self(Decimal::ONE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap an existing decimal.
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from an integer value.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from a float, keeping the shortest decimal that round-trips.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN, infinities and values outside the
    /// decimal range.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        Decimal::from_f64(value)
            .map(Self)
            .ok_or(NumericError::InvalidInput)
    }

    /// Zero value
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// One (1)
    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the underlying `rust_decimal` value.
    #[inline]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Nearest f64 (lossy).
    pub fn to_f64(self) -> f64 {
        // Every Decimal is finite and well inside the f64 range
        self.0.to_f64().unwrap_or_default()
    }

    /// Integer part, truncated toward zero. `None` if it does not fit in i64.
    pub fn int_part(self) -> Option<i64> {
        self.0.trunc().to_i64()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum exceeds the decimal range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| NumericError::overflow(ArithOp::Add, self.0, rhs.0))
    }

    /// Checked subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| NumericError::overflow(ArithOp::Sub, self.0, rhs.0))
    }

    /// Checked multiplication.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs.0)
            .map(Self)
            .ok_or_else(|| NumericError::overflow(ArithOp::Mul, self.0, rhs.0))
    }

    /// Checked division.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient exceeds the decimal range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.0
            .checked_div(rhs.0)
            .map(Self)
            .ok_or_else(|| NumericError::overflow(ArithOp::Div, self.0, rhs.0))
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    // ========================================================================
    // Bounded Operations
    // ========================================================================

    /// Addition rejecting results above `limit`.
    pub fn add_with_limit(self, rhs: Self, limit: Self) -> NumericResult<Self> {
        let result = self.checked_add(rhs)?;
        if result > limit {
            return Err(NumericError::limit_exceeded(result.0, limit.0, "addition"));
        }
        Ok(result)
    }

    /// Subtraction rejecting results below `floor`.
    pub fn sub_with_floor(self, rhs: Self, floor: Self) -> NumericResult<Self> {
        let result = self.checked_sub(rhs)?;
        if result < floor {
            return Err(NumericError::limit_exceeded(
                result.0,
                floor.0,
                "subtraction floor",
            ));
        }
        Ok(result)
    }

    /// Subtraction that must not go negative.
    ///
    /// # Errors
    /// Returns `NegativeValue` if `self < rhs`.
    pub fn sub_non_negative(self, rhs: Self) -> NumericResult<Self> {
        let result = self.checked_sub(rhs)?;
        if result.is_negative() {
            return Err(NumericError::NegativeValue);
        }
        Ok(result)
    }

    /// Multiplication rejecting results above `limit`.
    pub fn mul_with_limit(self, rhs: Self, limit: Self) -> NumericResult<Self> {
        let result = self.checked_mul(rhs)?;
        if result > limit {
            return Err(NumericError::limit_exceeded(
                result.0,
                limit.0,
                "multiplication",
            ));
        }
        Ok(result)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `places` fractional digits with the given mode.
    ///
    /// Ties are decided on the exact decimal value, unlike
    /// [`round_f64`](crate::rounding::round_f64).
    ///
    /// # Errors
    /// - `InvalidRoundingMode` if `mode` is not one of the seven modes
    /// - `InvalidPrecision` if `places` is negative
    pub fn round<M>(self, places: i32, mode: M) -> NumericResult<Self>
    where
        M: TryInto<RoundingMode>,
    {
        let mode = resolve(mode)?;
        let places = u32::try_from(places).map_err(|_| NumericError::InvalidPrecision)?;
        Ok(Self(self.0.round_dp_with_strategy(places, mode.into())))
    }

    /// Divide by `rhs`, then round the quotient to `places` digits.
    ///
    /// # Errors
    /// `InvalidRoundingMode`, `InvalidPrecision`, then `DivisionByZero` or
    /// `Overflow` from the division.
    pub fn div_round<M>(self, rhs: Self, places: i32, mode: M) -> NumericResult<Self>
    where
        M: TryInto<RoundingMode>,
    {
        let mode = resolve(mode)?;
        if places < 0 {
            return Err(NumericError::InvalidPrecision);
        }
        self.checked_div(rhs)?.round(places, mode)
    }

    /// Drop digits beyond `places` (never rounds up).
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `places` is negative.
    pub fn truncate(self, places: i32) -> NumericResult<Self> {
        let places = u32::try_from(places).map_err(|_| NumericError::InvalidPrecision)?;
        Ok(Self(self.0.round_dp_with_strategy(places, RoundingStrategy::ToZero)))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Smaller of two values.
    #[inline]
    pub fn min_value(a: Self, b: Self) -> Self {
        if a < b {
            a
        } else {
            b
        }
    }

    /// Larger of two values.
    #[inline]
    pub fn max_value(a: Self, b: Self) -> Self {
        if a > b {
            a
        } else {
            b
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<Decimal> for SafeDecimal {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for SafeDecimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<SafeDecimal> for Decimal {
    #[inline]
    fn from(value: SafeDecimal) -> Self {
        value.0
    }
}

impl Neg for SafeDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl fmt::Display for SafeDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SafeDecimal {
    type Err = NumericError;

    /// Parse from a decimal string such as `"123.45"` or `"-0.001"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Tests
// ============================================================================
