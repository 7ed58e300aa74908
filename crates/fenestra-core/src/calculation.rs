//! # Price Calculation
//!
//! The aggregate that orchestrates every calculator into one breakdown,
//! and the use case that gates it behind input validation.
//!
//! ## Orchestration Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. profile_cost       ← profile (rates × mm, color folded in)         │
//! │  2. glass_cost         ← glass if priced, else zero                    │
//! │  3. accessory_cost     ← accessory if present, else zero               │
//! │  4. model_cost         = 1 + 2 + 3                                     │
//! │  5. model_sales_price  = margin(model_cost) if margin > 0              │
//! │  6. services           ← one line per service (no margin, no color)    │
//! │  7. adjustments        ← one signed line per adjustment                │
//! │  8. subtotal           = 5 + Σ(6) + Σ(7)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is part of the contract: margin sees only the model cost
//! (step 4), never service or adjustment amounts.

use crate::accessory::calculate_accessory_cost;
use crate::adjustment::calculate_adjustment_amount;
use crate::error::PricingResult;
use crate::glass::calculate_glass_cost;
use crate::margin::calculate_sales_price;
use crate::money::Money;
use crate::profile::calculate_profile_cost;
use crate::service::calculate_service_amount;
use crate::types::{PriceCalculationInput, PriceCalculationResult};
use crate::validation::validate_input;

/// Runs the aggregate calculation in strict order.
///
/// Has no failure modes of its own beyond what the calculators raise
/// (a non-finite number reaching `Money`, a zero margin divisor). Callers
/// normally go through [`calculate_item_price`], which validates first.
pub fn calculate(input: &PriceCalculationInput) -> PricingResult<PriceCalculationResult> {
    let profile_cost =
        calculate_profile_cost(&input.model, &input.dimensions, input.color_multiplier)?;

    let glass_cost = match &input.glass {
        Some(pricing) => calculate_glass_cost(pricing, &input.dimensions)?,
        None => Money::zero(),
    };

    let accessory_cost = match input.model.accessory_price {
        Some(price) => calculate_accessory_cost(price, input.color_multiplier)?,
        None => Money::zero(),
    };

    let model_cost = profile_cost + glass_cost + accessory_cost;

    let model_sales_price = match input.profit_margin_percentage {
        Some(margin) if margin > 0.0 => calculate_sales_price(model_cost, margin)?,
        _ => model_cost,
    };

    let services = input
        .services
        .iter()
        .map(|service| calculate_service_amount(service, &input.dimensions))
        .collect::<PricingResult<Vec<_>>>()?;

    let adjustments = input
        .adjustments
        .iter()
        .map(|adjustment| calculate_adjustment_amount(adjustment, &input.dimensions))
        .collect::<PricingResult<Vec<_>>>()?;

    let mut subtotal = model_sales_price;
    for line in &services {
        subtotal += line.amount;
    }
    for line in &adjustments {
        subtotal += line.amount;
    }

    Ok(PriceCalculationResult {
        profile_cost,
        glass_cost,
        accessory_cost,
        model_cost,
        model_sales_price,
        services,
        adjustments,
        subtotal,
    })
}

/// The use case: validate the input, then delegate to [`calculate`].
///
/// Any failure means "no price could be computed" - there are never
/// partial results. Validation errors are the caller's input to fix;
/// arithmetic errors indicate bad upstream data or a bug.
pub fn calculate_item_price(
    input: &PriceCalculationInput,
) -> PricingResult<PriceCalculationResult> {
    validate_input(input)?;
    calculate(input)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::Dimensions;
    use crate::error::{PricingError, ValidationError};
    use crate::types::{
        AdjustmentInput, GlassPricing, ModelPrices, ServiceInput, ServiceUnit,
    };

    fn base_input() -> PriceCalculationInput {
        PriceCalculationInput {
            dimensions: Dimensions::new(1000.0, 2000.0, 800.0, 800.0),
            model: ModelPrices {
                base_price: Money::new(100.0).unwrap(),
                cost_per_mm_width: Money::new(1.0).unwrap(),
                cost_per_mm_height: Money::new(1.0).unwrap(),
                accessory_price: None,
            },
            color_multiplier: 1.0,
            profit_margin_percentage: None,
            glass: None,
            services: vec![],
            adjustments: vec![],
        }
    }

    fn money(value: f64) -> Money {
        Money::new(value).unwrap()
    }

    #[test]
    fn test_profile_only_breakdown() {
        let result = calculate_item_price(&base_input()).unwrap();
        assert_eq!(result.profile_cost, money(1500.0));
        assert_eq!(result.glass_cost, Money::zero());
        assert_eq!(result.accessory_cost, Money::zero());
        assert_eq!(result.model_cost, money(1500.0));
        assert_eq!(result.model_sales_price, money(1500.0));
        assert!(result.services.is_empty());
        assert!(result.adjustments.is_empty());
        assert_eq!(result.subtotal, money(1500.0));
    }

    #[test]
    fn test_full_breakdown() {
        let mut input = base_input();
        input.model.accessory_price = Some(money(25.0));
        input.color_multiplier = 1.1;
        input.profit_margin_percentage = Some(20.0);
        input.glass = Some(GlassPricing {
            price_per_sqm: money(50.0),
            discount_width_mm: None,
            discount_height_mm: None,
        });
        input.services = vec![ServiceInput {
            id: "svc-1".to_string(),
            name: "Installation".to_string(),
            unit: ServiceUnit::Sqm,
            rate: money(10.0),
            minimum_billing_unit: Some(3.0),
            quantity_override: None,
        }];
        input.adjustments = vec![AdjustmentInput {
            id: "adj-1".to_string(),
            concept: "Commercial discount".to_string(),
            unit: ServiceUnit::Unit,
            value: money(50.0),
            is_positive: false,
        }];

        let result = calculate_item_price(&input).unwrap();

        // profile: (100×1.1) + (1.1×200) + (1.1×1200) = 1650.00
        assert_eq!(result.profile_cost, money(1650.0));
        // glass: 2.0 m² × 50, untouched by the color multiplier
        assert_eq!(result.glass_cost, money(100.0));
        // accessory: 25 × 1.1
        assert_eq!(result.accessory_cost, money(27.5));
        assert_eq!(result.model_cost, money(1777.5));
        // margin: 1777.50 / 0.8 = 2221.88 (half-up)
        assert_eq!(result.model_sales_price, money(2221.88));
        // service: raw 2.00 m² clamped to 3 → 30.00
        assert_eq!(result.services[0].amount, money(30.0));
        // adjustment: −50.00
        assert_eq!(result.adjustments[0].amount, money(-50.0));
        // subtotal: 2221.88 + 30 − 50
        assert_eq!(result.subtotal, money(2201.88));
    }

    #[test]
    fn test_margin_never_touches_services_or_adjustments() {
        let mut input = base_input();
        input.profit_margin_percentage = Some(50.0);
        input.services = vec![ServiceInput {
            id: "svc-1".to_string(),
            name: "Transport".to_string(),
            unit: ServiceUnit::Unit,
            rate: money(40.0),
            minimum_billing_unit: None,
            quantity_override: None,
        }];
        input.adjustments = vec![AdjustmentInput {
            id: "adj-1".to_string(),
            concept: "Goodwill".to_string(),
            unit: ServiceUnit::Unit,
            value: money(15.0),
            is_positive: false,
        }];

        let result = calculate_item_price(&input).unwrap();

        // subtotal − model_sales_price must equal the raw line sum exactly
        let line_sum = result.subtotal - result.model_sales_price;
        assert_eq!(line_sum, money(25.0)); // 40 − 15, no margin factor
    }

    #[test]
    fn test_glass_cost_independent_of_color() {
        let mut plain = base_input();
        plain.glass = Some(GlassPricing {
            price_per_sqm: money(50.0),
            discount_width_mm: Some(100.0),
            discount_height_mm: Some(100.0),
        });

        let mut colored = plain.clone();
        colored.color_multiplier = 1.5;

        let plain_result = calculate_item_price(&plain).unwrap();
        let colored_result = calculate_item_price(&colored).unwrap();

        assert_eq!(plain_result.glass_cost, colored_result.glass_cost);
        assert!(colored_result.profile_cost > plain_result.profile_cost);
    }

    #[test]
    fn test_zero_margin_leaves_model_cost_unchanged() {
        let mut input = base_input();
        input.profit_margin_percentage = Some(0.0);
        let result = calculate_item_price(&input).unwrap();
        assert_eq!(result.model_sales_price, result.model_cost);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let mut input = base_input();
        input.dimensions.width_mm = 0.0;
        assert!(matches!(
            calculate_item_price(&input),
            Err(PricingError::Validation(ValidationError::InvalidDimension { ref field }))
                if field == "width"
        ));

        let mut input = base_input();
        input.dimensions.height_mm = -10.0;
        assert!(matches!(
            calculate_item_price(&input),
            Err(PricingError::Validation(ValidationError::InvalidDimension { ref field }))
                if field == "height"
        ));
    }

    #[test]
    fn test_rejects_discount_color_multiplier() {
        let mut input = base_input();
        input.color_multiplier = 0.9;
        assert!(matches!(
            calculate_item_price(&input),
            Err(PricingError::Validation(
                ValidationError::InvalidColorMultiplier { .. }
            ))
        ));
    }

    #[test]
    fn test_rejects_full_margin_at_the_gate() {
        let mut input = base_input();
        input.profit_margin_percentage = Some(100.0);
        assert!(matches!(
            calculate_item_price(&input),
            Err(PricingError::Validation(
                ValidationError::InvalidMarginPercentage { .. }
            ))
        ));
    }

    #[test]
    fn test_deterministic() {
        let input = base_input();
        let a = calculate_item_price(&input).unwrap();
        let b = calculate_item_price(&input).unwrap();
        assert_eq!(a, b);
    }
}
