// ============================================================================
// Rules Module
// Business-rule validators for transfers, pricing, discounts and tax
// ============================================================================
//
// Every rule is a plain configuration struct:
// - `new` plus `with_*` builders
// - `validate()` for the rule's own configuration
// - one checking/computing operation returning NumericResult
//
// Rejections are logged at debug level through `tracing`.

mod discount;
mod pricing;
mod tax;
mod transfer;

pub use discount::DiscountRule;
pub use pricing::PricingRule;
pub use tax::{TaxRule, DEFAULT_TAX_PRECISION};
pub use transfer::TransferRule;
