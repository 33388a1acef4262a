// ============================================================================
// Finarith Library
// Overflow-safe arithmetic and configurable rounding for monetary values
// ============================================================================

//! # Finarith
//!
//! Checked arithmetic and rounding primitives for financial calculations.
//!
//! ## Features
//!
//! - **Checked 64-bit arithmetic** for signed and unsigned integers, detected
//!   without widening and reported as typed errors instead of wrapping
//! - **Bounded variants** that reject results above a limit or below a floor
//! - **Seven rounding modes** applied uniformly to `f64`, unit-multiple `i64`
//!   and decimal values
//! - **SafeDecimal**, a `rust_decimal` wrapper with the same error contract
//! - **Business rules** for transfers, pricing, discounts and tax
//!
//! ## Example
//!
//! ```rust
//! use finarith::prelude::*;
//!
//! // Integer arithmetic never wraps
//! assert!(signed::mul(i64::MAX / 10, 11).is_err());
//! assert_eq!(unsigned::add(u64::MAX, 0), Ok(u64::MAX));
//!
//! // Bounded addition reports the computed value and the limit
//! let err = signed::add_with_limit(10, 30, 30).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::LimitExceeded);
//!
//! // Rounding by mode, for floats and for integer units
//! assert_eq!(round_f64(10.555, 2, RoundingMode::HalfUp), Ok(10.56));
//! assert_eq!(round_i64(155, 10, RoundingMode::HalfUp), Ok(160));
//!
//! // Modes may also be named at the boundary
//! assert_eq!(round_i64(150, 20, "round_half_even"), Ok(160));
//! assert_eq!(
//!     round_i64(150, 20, "sideways"),
//!     Err(NumericError::InvalidRoundingMode)
//! );
//!
//! // Decimal tax computation
//! let rule = TaxRule::new(
//!     SafeDecimal::from_i64(10),
//!     SafeDecimal::from_i64(100),
//!     SafeDecimal::from_i64(1000),
//! );
//! let tax = rule.calculate_tax("123.45".parse().unwrap()).unwrap();
//! assert_eq!(tax.to_string(), "12.35");
//! ```

pub mod decimal;
pub mod numeric;
pub mod rounding;
pub mod rules;

// Re-exports for convenience
pub mod prelude {
    pub use crate::decimal::SafeDecimal;
    pub use crate::numeric::{
        signed, unsigned, ArithOp, CheckedArithmetic, ErrorKind, Magnitude, NumericError,
        NumericResult,
    };
    pub use crate::rounding::{round_f64, round_i64, RoundingMode};
    pub use crate::rules::{DiscountRule, PricingRule, TaxRule, TransferRule};
}
