//! # Profile Calculator
//!
//! Cost of the frame/profile: a base price for the minimum billed
//! dimensions plus per-millimeter charges for everything beyond them, all
//! scaled by the color surcharge.

use crate::dimensions::Dimensions;
use crate::error::PricingResult;
use crate::money::Money;
use crate::types::ModelPrices;

/// Calculates the profile cost for one configuration.
///
/// ```text
/// base      = base_price × color
/// width     = (cost_per_mm_width  × color) × effective_width_mm
/// height    = (cost_per_mm_height × color) × effective_height_mm
/// profile   = base + width + height
/// ```
///
/// The color multiplier is folded into each per-mm rate *before* the rate
/// is multiplied by the extra millimeters. Each step rounds to 2 decimals,
/// so applying color once at the end would produce different cents on edge
/// cases; this order is the compatibility contract.
pub fn calculate_profile_cost(
    model: &ModelPrices,
    dimensions: &Dimensions,
    color_multiplier: f64,
) -> PricingResult<Money> {
    let base_cost = model.base_price.multiply(color_multiplier)?;

    let width_cost = model
        .cost_per_mm_width
        .multiply(color_multiplier)?
        .multiply(dimensions.effective_width())?;

    let height_cost = model
        .cost_per_mm_height
        .multiply(color_multiplier)?
        .multiply(dimensions.effective_height())?;

    Ok(base_cost + width_cost + height_cost)
}

// =============================================================================
// Unit Tests
// =============================================================================
