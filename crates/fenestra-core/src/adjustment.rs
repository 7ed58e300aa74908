//! # Adjustment Calculator
//!
//! Signed manual corrections (discounts or surcharges) on the subtotal.
//!
//! An adjustment derives its quantity exactly like a service of the same
//! unit, with two deliberate differences:
//!
//! - fixed-unit adjustments are always quantity 1 (no override field);
//! - the minimum-billing floor does not exist for adjustments.
//!
//! The amount is `value × quantity`, negated when `is_positive` is false.

use rust_decimal::prelude::*;

use crate::dimensions::Dimensions;
use crate::error::PricingResult;
use crate::service::derive_quantity;
use crate::types::{AdjustmentInput, AdjustmentLine};

/// Prices one adjustment into a signed line.
pub fn calculate_adjustment_amount(
    adjustment: &AdjustmentInput,
    dimensions: &Dimensions,
) -> PricingResult<AdjustmentLine> {
    let quantity = derive_quantity(adjustment.unit, dimensions, None)?;
    let amount = adjustment.value.multiply_decimal(quantity);
    let amount = if adjustment.is_positive { amount } else { -amount };

    Ok(AdjustmentLine {
        adjustment_id: adjustment.id.clone(),
        concept: adjustment.concept.clone(),
        unit: adjustment.unit,
        quantity: quantity.to_f64().unwrap_or_default(),
        amount,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ServiceUnit;

    fn adjustment(unit: ServiceUnit, value: f64, is_positive: bool) -> AdjustmentInput {
        AdjustmentInput {
            id: "adj-1".to_string(),
            concept: "Commercial discount".to_string(),
            unit,
            value: Money::new(value).unwrap(),
            is_positive,
        }
    }

    #[test]
    fn test_negative_fixed_adjustment() {
        // unit quantity is always 1: −50.00 regardless of dimensions
        let dims = Dimensions::new(4321.0, 1234.0, 0.0, 0.0);
        let line =
            calculate_adjustment_amount(&adjustment(ServiceUnit::Unit, 50.0, false), &dims)
                .unwrap();
        assert_eq!(line.quantity, 1.0);
        assert_eq!(line.amount, Money::new(-50.0).unwrap());
    }

    #[test]
    fn test_positive_area_adjustment() {
        // 1.0 × 2.0 = 2.00 m² × 12.5 = 25.00
        let dims = Dimensions::new(1000.0, 2000.0, 800.0, 800.0);
        let line =
            calculate_adjustment_amount(&adjustment(ServiceUnit::Sqm, 12.5, true), &dims).unwrap();
        assert_eq!(line.quantity, 2.0);
        assert_eq!(line.amount, Money::new(25.0).unwrap());
    }

    #[test]
    fn test_negative_perimeter_adjustment() {
        // 2 × (1.0 + 2.0) = 6.00 ml × 2 = 12.00, negated
        let dims = Dimensions::new(1000.0, 2000.0, 0.0, 0.0);
        let line =
            calculate_adjustment_amount(&adjustment(ServiceUnit::Ml, 2.0, false), &dims).unwrap();
        assert_eq!(line.quantity, 6.0);
        assert_eq!(line.amount, Money::new(-12.0).unwrap());
    }

    #[test]
    fn test_line_carries_identity_through() {
        let dims = Dimensions::new(1000.0, 1000.0, 0.0, 0.0);
        let line =
            calculate_adjustment_amount(&adjustment(ServiceUnit::Unit, 5.0, true), &dims).unwrap();
        assert_eq!(line.adjustment_id, "adj-1");
        assert_eq!(line.concept, "Commercial discount");
        assert_eq!(line.unit, ServiceUnit::Unit);
    }
}
