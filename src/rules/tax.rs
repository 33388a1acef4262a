// ============================================================================
// Tax Rule
// Percentage tax with threshold, cap and configurable rounding
// ============================================================================

use crate::decimal::SafeDecimal;
use crate::numeric::NumericResult;
use crate::rounding::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of fractional digits tax amounts are rounded to
pub const DEFAULT_TAX_PRECISION: i32 = 2;

/// Tax computation parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxRule {
    /// Tax rate as a percentage (e.g. 10 for 10%)
    pub tax_rate: SafeDecimal,

    /// Amounts below this are not taxed
    pub min_taxable_amount: SafeDecimal,

    /// Cap on the tax charged
    pub max_tax_amount: SafeDecimal,

    /// Rounding applied to the computed tax
    pub rounding_mode: RoundingMode,

    /// Fractional digits kept after rounding
    pub rounding_precision: i32,
}

impl TaxRule {
    /// Create a rule rounding half-up to two fractional digits.
    pub fn new(
        tax_rate: SafeDecimal,
        min_taxable_amount: SafeDecimal,
        max_tax_amount: SafeDecimal,
    ) -> Self {
        Self {
            tax_rate,
            min_taxable_amount,
            max_tax_amount,
            rounding_mode: RoundingMode::HalfUp,
            rounding_precision: DEFAULT_TAX_PRECISION,
        }
    }

    /// Builder method: Set rounding mode and precision
    pub fn with_rounding(mut self, mode: RoundingMode, precision: i32) -> Self {
        self.rounding_mode = mode;
        self.rounding_precision = precision;
        self
    }

    /// Validate the rule's own configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.tax_rate.is_negative() {
            return Err("Tax rate cannot be negative".to_string());
        }
        if self.max_tax_amount.is_negative() {
            return Err("Maximum tax amount cannot be negative".to_string());
        }
        if self.rounding_precision < 0 {
            return Err("Rounding precision cannot be negative".to_string());
        }
        Ok(())
    }

    /// Tax owed on `taxable_amount`.
    ///
    /// Zero below `min_taxable_amount`; otherwise
    /// `taxable_amount * tax_rate / 100`, rounded with the configured mode
    /// and precision, capped at `max_tax_amount`.
    ///
    /// # Errors
    /// `InvalidPrecision` for a negative configured precision, `Overflow`
    /// from the decimal arithmetic.
    pub fn calculate_tax(&self, taxable_amount: SafeDecimal) -> NumericResult<SafeDecimal> {
        if taxable_amount < self.min_taxable_amount {
            tracing::trace!(%taxable_amount, "below taxable minimum");
            return Ok(SafeDecimal::ZERO);
        }

        let tax = taxable_amount
            .checked_mul(self.tax_rate)?
            .div_round(
                SafeDecimal::from_i64(100),
                self.rounding_precision,
                self.rounding_mode,
            )?;

        if tax > self.max_tax_amount {
            tracing::debug!(%tax, cap = %self.max_tax_amount, "tax capped");
            return Ok(self.max_tax_amount);
        }
        Ok(tax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn dec(s: &str) -> SafeDecimal {
        s.parse().unwrap()
    }

    fn rule() -> TaxRule {
        TaxRule::new(dec("10.00"), dec("100.00"), dec("1000.00"))
    }

    #[test]
    fn test_rule_creation() {
        let rule = rule();
        assert_eq!(rule.tax_rate, dec("10"));
        assert_eq!(rule.rounding_mode, RoundingMode::HalfUp);
        assert_eq!(rule.rounding_precision, 2);
        assert!(rule.validate().is_ok());

        let bankers = rule.with_rounding(RoundingMode::HalfEven, 3);
        assert_eq!(bankers.rounding_mode, RoundingMode::HalfEven);
        assert_eq!(bankers.rounding_precision, 3);
    }

    #[test]
    fn test_calculate_tax() {
        let r = rule();
        assert_eq!(r.calculate_tax(dec("500.00")).unwrap(), dec("50"));
        assert_eq!(r.calculate_tax(dec("123.45")).unwrap(), dec("12.35"));
        assert_eq!(r.calculate_tax(dec("50.00")).unwrap(), SafeDecimal::ZERO);
        assert_eq!(r.calculate_tax(dec("20000.00")).unwrap(), dec("1000"));
    }

    #[test]
    fn test_rounding_mode_applied() {
        let down = rule().with_rounding(RoundingMode::Down, 2);
        assert_eq!(down.calculate_tax(dec("123.45")).unwrap(), dec("12.34"));

        // 12.345 is an exact tie; banker's rounding keeps the even 4
        let even = rule().with_rounding(RoundingMode::HalfEven, 2);
        assert_eq!(even.calculate_tax(dec("123.45")).unwrap(), dec("12.34"));

        let whole = rule().with_rounding(RoundingMode::Ceiling, 0);
        assert_eq!(whole.calculate_tax(dec("123.45")).unwrap(), dec("13"));
    }

    #[test]
    fn test_invalid_precision() {
        let bad = rule().with_rounding(RoundingMode::HalfUp, -1);
        assert!(bad.validate().is_err());
        assert_eq!(
            bad.calculate_tax(dec("500")),
            Err(NumericError::InvalidPrecision)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_config() {
        let json = serde_json::to_string(&rule().with_rounding(RoundingMode::HalfEven, 2)).unwrap();
        assert!(json.contains("\"rounding_mode\":\"round_half_even\""));
        let back: TaxRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rounding_mode, RoundingMode::HalfEven);
        assert_eq!(back.tax_rate, dec("10.00"));
    }
}
