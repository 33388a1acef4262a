// ============================================================================
// Numeric Module
// Overflow-safe fixed-width integer arithmetic for financial calculations
// ============================================================================
//
// This module provides:
// - signed: checked i64 add/sub/mul and their limit/floor-bounded variants
// - unsigned: the same operations over u64 (underflow reported as Overflow)
// - CheckedArithmetic: method-style access over both domains
// - NumericError: failure taxonomy shared with rounding, decimal and rules
//
// Design principles:
// - No widening to i128/u128 in the overflow checks
// - All arithmetic returns Result (no panics, no wraparound)
// - Pure functions over value types

mod errors;
mod traits;

pub mod signed;
pub mod unsigned;

pub use errors::{ArithOp, ErrorKind, Magnitude, NumericError, NumericResult};
pub use traits::CheckedArithmetic;
