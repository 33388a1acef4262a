// ============================================================================
// Pricing Rule
// Price range with zero/negative price policy
// ============================================================================

use crate::decimal::SafeDecimal;
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounds a quoted price must respect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingRule {
    /// Smallest positive price allowed
    pub min_price: SafeDecimal,

    /// Largest price allowed
    pub max_price: SafeDecimal,

    /// Whether a price of exactly zero is accepted
    pub allow_zero_price: bool,

    /// Whether prices below zero are accepted
    pub allow_negative_price: bool,
}

impl PricingRule {
    /// Create a rule that rejects zero and negative prices.
    pub fn new(min_price: SafeDecimal, max_price: SafeDecimal) -> Self {
        Self {
            min_price,
            max_price,
            allow_zero_price: false,
            allow_negative_price: false,
        }
    }

    /// Builder method: Accept or reject a zero price
    pub fn with_zero_price(mut self, allow: bool) -> Self {
        self.allow_zero_price = allow;
        self
    }

    /// Builder method: Accept or reject negative prices
    pub fn with_negative_price(mut self, allow: bool) -> Self {
        self.allow_negative_price = allow;
        self
    }

    /// Validate the rule's own configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_price > self.max_price {
            return Err("Minimum price exceeds maximum price".to_string());
        }
        Ok(())
    }

    /// Check a price against the rule.
    ///
    /// The minimum only applies to positive prices; zero and negative
    /// prices are governed by their own flags.
    ///
    /// # Errors
    /// - `LimitExceeded` labelled `"minimum price"` or `"maximum price"`
    /// - `NegativeValue` for a negative price when those are not allowed
    pub fn validate_price(&self, price: SafeDecimal) -> NumericResult<()> {
        if price.is_zero() && !self.allow_zero_price {
            return Err(reject(price, self.min_price, "minimum price"));
        }

        if price.is_negative() && !self.allow_negative_price {
            tracing::debug!(%price, "negative price rejected");
            return Err(NumericError::NegativeValue);
        }

        if price.is_positive() && price < self.min_price {
            return Err(reject(price, self.min_price, "minimum price"));
        }

        if price > self.max_price {
            return Err(reject(price, self.max_price, "maximum price"));
        }

        Ok(())
    }
}

fn reject(price: SafeDecimal, limit: SafeDecimal, operation: &'static str) -> NumericError {
    tracing::debug!(%price, %limit, operation, "price rejected");
    NumericError::limit_exceeded(price.value(), limit.value(), operation)
}
