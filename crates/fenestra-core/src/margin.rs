//! # Margin Calculator
//!
//! Converts a cost into a sales price via a profit-margin percentage:
//! `sales = cost / (1 − margin/100)`.
//!
//! Margin applies **only** to the combined model cost (profile + glass +
//! accessory). Services and adjustments are added after margin resolution
//! and must never pass through here. Color is already baked into the model
//! cost by the time margin runs, so the two factors never compound in an
//! unintended order.

use rust_decimal::prelude::*;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::PERCENT_DIVISOR;

/// Applies a profit margin to a cost.
///
/// Fails with [`PricingError::DivisionByZero`] when the margin is exactly
/// 100 (the divisor collapses to zero). The validation gate rejects that
/// input earlier with a clearer error; this check keeps the arithmetic
/// invariant even for direct callers.
///
/// ## Example
/// ```rust
/// use fenestra_core::margin::calculate_sales_price;
/// use fenestra_core::Money;
///
/// let cost = Money::new(100.0).unwrap();
/// let sales = calculate_sales_price(cost, 20.0).unwrap();
/// assert_eq!(sales, Money::new(125.0).unwrap());
/// ```
pub fn calculate_sales_price(cost: Money, margin_percentage: f64) -> PricingResult<Money> {
    let margin = Decimal::from_f64(margin_percentage).ok_or(PricingError::InvalidAmount {
        value: margin_percentage,
    })?;
    let divisor = Decimal::ONE - margin / PERCENT_DIVISOR;
    cost.divide_decimal(divisor)
}

// =============================================================================
// Unit Tests
// =============================================================================
