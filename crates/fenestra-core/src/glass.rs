//! # Glass Calculator
//!
//! Billable glass area and its cost.
//!
//! Glass is billed on a separate axis from the profile: it uses the
//! *actual* dimensions (the "minimum billed dimension" rule does not exist
//! here) minus the millimeters of each axis covered by the frame, and the
//! color surcharge is never applied to it.

use rust_decimal::prelude::*;

use crate::dimensions::Dimensions;
use crate::error::PricingResult;
use crate::money::{to_decimal, Money};
use crate::types::GlassPricing;
use crate::SQMM_PER_SQM;

/// Billable glass area in m².
///
/// `(width_mm − discount_width_mm) × (height_mm − discount_height_mm)`,
/// converted from mm² to m². Discounts default to zero when absent.
///
/// ## Example
/// ```rust
/// use fenestra_core::Dimensions;
/// use fenestra_core::glass::calculate_billable_area;
///
/// let dims = Dimensions::new(1000.0, 2000.0, 800.0, 800.0);
/// // Minimums play no role here: 1.0 m × 2.0 m = 2.0 m²
/// assert_eq!(calculate_billable_area(&dims, None, None).unwrap(), 2.0);
/// ```
pub fn calculate_billable_area(
    dimensions: &Dimensions,
    discount_width_mm: Option<f64>,
    discount_height_mm: Option<f64>,
) -> PricingResult<f64> {
    Ok(billable_area_decimal(dimensions, discount_width_mm, discount_height_mm)?
        .to_f64()
        .unwrap_or_default())
}

/// Same as [`calculate_billable_area`] but keeps the exact decimal so the
/// cost multiplication below doesn't round-trip through `f64`.
fn billable_area_decimal(
    dimensions: &Dimensions,
    discount_width_mm: Option<f64>,
    discount_height_mm: Option<f64>,
) -> PricingResult<Decimal> {
    let width = to_decimal(dimensions.width_mm)? - to_decimal(discount_width_mm.unwrap_or(0.0))?;
    let height =
        to_decimal(dimensions.height_mm)? - to_decimal(discount_height_mm.unwrap_or(0.0))?;
    Ok(width * height / SQMM_PER_SQM)
}

/// Glass cost: price per m² × billable area, rounded through `Money`.
///
/// No color surcharge is ever applied to glass.
pub fn calculate_glass_cost(
    pricing: &GlassPricing,
    dimensions: &Dimensions,
) -> PricingResult<Money> {
    let area = billable_area_decimal(
        dimensions,
        pricing.discount_width_mm,
        pricing.discount_height_mm,
    )?;
    Ok(pricing.price_per_sqm.multiply_decimal(area))
}

// =============================================================================
// Unit Tests
// =============================================================================
