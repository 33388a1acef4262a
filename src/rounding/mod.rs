// ============================================================================
// Rounding Module
// Mode-driven rounding over floating-point and integer magnitudes
// ============================================================================
//
// This module provides:
// - RoundingMode: the seven rounding disciplines, with raw-tag/name parsing
// - round_f64: round to N fractional decimal digits (binary floating point)
// - round_i64: round to the nearest multiple of a unit (exact)
//
// Both entry points validate the mode first, so a bad mode is always
// reported as InvalidRoundingMode whatever the other arguments are.

mod float;
mod integer;
mod mode;

pub use float::{is_exact_half, round_f64, HALF_DOWN_EPSILON};
pub use integer::round_i64;
pub use mode::RoundingMode;

pub(crate) use mode::resolve;
