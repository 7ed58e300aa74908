//! # Accessory Calculator
//!
//! Flat accessory cost with the color surcharge applied. The aggregate only
//! calls this when the model actually has an accessory; absence skips the
//! component instead of billing zero.

use crate::error::PricingResult;
use crate::money::Money;

/// Accessory cost: accessory price × color multiplier.
pub fn calculate_accessory_cost(
    accessory_price: Money,
    color_multiplier: f64,
) -> PricingResult<Money> {
    accessory_price.multiply(color_multiplier)
}
