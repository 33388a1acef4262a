// ============================================================================
// Decimal Module
// Finance-friendly decimal value type built on rust_decimal
// ============================================================================
//
// SafeDecimal forwards all decimal math to rust_decimal and adds:
// - checked arithmetic returning NumericResult (no panics)
// - limit/floor-bounded and non-negative variants
// - rounding with any of the seven RoundingMode variants

mod safe_decimal;

pub use safe_decimal::SafeDecimal;
