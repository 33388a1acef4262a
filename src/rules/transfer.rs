// ============================================================================
// Transfer Rule
// Per-transfer bounds, daily cap and balance sufficiency
// ============================================================================

use crate::decimal::SafeDecimal;
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Limits applied to a single money transfer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransferRule {
    /// Largest amount allowed for a single transfer
    pub max_amount: SafeDecimal,

    /// Smallest amount allowed for a single transfer
    pub min_amount: SafeDecimal,

    /// Largest total allowed per day, this transfer included
    pub daily_limit: SafeDecimal,

    /// Whether the source account may go below zero
    pub allow_negative_balance: bool,
}

impl TransferRule {
    /// Create a rule that rejects transfers overdrawing the source account.
    pub fn new(max_amount: SafeDecimal, min_amount: SafeDecimal, daily_limit: SafeDecimal) -> Self {
        Self {
            max_amount,
            min_amount,
            daily_limit,
            allow_negative_balance: false,
        }
    }

    /// Builder method: Allow or forbid overdrawing the source account
    pub fn with_negative_balance(mut self, allow: bool) -> Self {
        self.allow_negative_balance = allow;
        self
    }

    /// Validate the rule's own configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_amount.is_negative() {
            return Err("Minimum transfer amount cannot be negative".to_string());
        }
        if self.min_amount > self.max_amount {
            return Err("Minimum transfer amount exceeds maximum".to_string());
        }
        if self.daily_limit.is_negative() {
            return Err("Daily limit cannot be negative".to_string());
        }
        Ok(())
    }

    /// Check a transfer of `amount` from an account holding `source_balance`
    /// that has already sent `daily_total` today.
    ///
    /// # Errors
    /// `LimitExceeded` labelled `"minimum transfer"`, `"maximum transfer"`,
    /// `"daily transfer"` or `"available balance"`; `Overflow` if the daily
    /// total cannot be computed.
    pub fn validate_transfer(
        &self,
        amount: SafeDecimal,
        source_balance: SafeDecimal,
        daily_total: SafeDecimal,
    ) -> NumericResult<()> {
        if amount < self.min_amount {
            return Err(reject(amount, self.min_amount, "minimum transfer"));
        }
        if amount > self.max_amount {
            return Err(reject(amount, self.max_amount, "maximum transfer"));
        }

        let new_daily_total = daily_total.checked_add(amount)?;
        if new_daily_total > self.daily_limit {
            return Err(reject(new_daily_total, self.daily_limit, "daily transfer"));
        }

        if !self.allow_negative_balance {
            match source_balance.sub_non_negative(amount) {
                Ok(_) => {},
                Err(NumericError::NegativeValue) => {
                    return Err(reject(amount, source_balance, "available balance"));
                },
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

fn reject(value: SafeDecimal, limit: SafeDecimal, operation: &'static str) -> NumericError {
    tracing::debug!(%value, %limit, operation, "transfer rejected");
    NumericError::limit_exceeded(value.value(), limit.value(), operation)
}
