// ============================================================================
// Discount Rule
// Percentage discounts with eligibility threshold and absolute cap
// ============================================================================

use crate::decimal::SafeDecimal;
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constraints on percentage discounts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscountRule {
    /// Largest discount percentage allowed (e.g. 30 for 30%)
    pub max_discount_percent: SafeDecimal,

    /// Smallest purchase eligible for a discount
    pub min_purchase_amount: SafeDecimal,

    /// Absolute cap on the discount amount
    pub max_discount_amount: SafeDecimal,
}

impl DiscountRule {
    /// Create a rule; percentages are whole-number percents (15 means 15%).
    pub fn new(
        max_discount_percent: SafeDecimal,
        min_purchase_amount: SafeDecimal,
        max_discount_amount: SafeDecimal,
    ) -> Self {
        Self {
            max_discount_percent,
            min_purchase_amount,
            max_discount_amount,
        }
    }

    /// Validate the rule's own configuration
    pub fn validate(&self) -> Result<(), String> {
        let hundred = SafeDecimal::from_i64(100);
        if self.max_discount_percent.is_negative() || self.max_discount_percent > hundred {
            return Err("Maximum discount percentage must be between 0 and 100".to_string());
        }
        if self.min_purchase_amount.is_negative() {
            return Err("Minimum purchase amount cannot be negative".to_string());
        }
        if self.max_discount_amount.is_negative() {
            return Err("Maximum discount amount cannot be negative".to_string());
        }
        Ok(())
    }

    /// Discount owed on `purchase_amount` at `discount_percent`.
    ///
    /// The result is `purchase_amount * discount_percent / 100`, capped at
    /// `max_discount_amount` (capping is not an error).
    ///
    /// # Errors
    /// - `LimitExceeded` labelled `"minimum purchase for discount"` or
    ///   `"maximum discount percentage"`
    /// - `NegativeValue` for a negative percentage
    /// - `Overflow` from the decimal arithmetic
    pub fn calculate_discount(
        &self,
        purchase_amount: SafeDecimal,
        discount_percent: SafeDecimal,
    ) -> NumericResult<SafeDecimal> {
        if purchase_amount < self.min_purchase_amount {
            return Err(reject(
                purchase_amount,
                self.min_purchase_amount,
                "minimum purchase for discount",
            ));
        }

        if discount_percent.is_negative() {
            tracing::debug!(%discount_percent, "negative discount rejected");
            return Err(NumericError::NegativeValue);
        }

        if discount_percent > self.max_discount_percent {
            return Err(reject(
                discount_percent,
                self.max_discount_percent,
                "maximum discount percentage",
            ));
        }

        let discount = purchase_amount
            .checked_mul(discount_percent)?
            .checked_div(SafeDecimal::from_i64(100))?;

        Ok(SafeDecimal::min_value(discount, self.max_discount_amount))
    }
}

fn reject(value: SafeDecimal, limit: SafeDecimal, operation: &'static str) -> NumericError {
    tracing::debug!(%value, %limit, operation, "discount rejected");
    NumericError::limit_exceeded(value.value(), limit.value(), operation)
}
