//! # Service Calculator
//!
//! Per-service quantity derivation and pricing.
//!
//! ## Quantity Derivation by Unit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit  → quantity_override ?? 1           (fixed)                       │
//! │  sqm   → width_m × height_m               (area, 2-dp half-up)          │
//! │  ml    → 2 × (width_m + height_m)         (perimeter, 2-dp half-up)     │
//! │                                                                         │
//! │  then: quantity = max(quantity, minimum_billing_unit)  (services only)  │
//! │  then: amount   = rate × quantity         (through Money)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities use *actual* dimensions - the profile's minimum-dimension
//! rule does not apply to services. Margin and color never touch service
//! amounts either; services are added to the subtotal after both.
//!
//! [`derive_quantity`] is shared with [`crate::adjustment`], which uses the
//! same unit enumeration but no override and no minimum floor.

use rust_decimal::prelude::*;

use crate::dimensions::Dimensions;
use crate::error::PricingResult;
use crate::money::to_decimal;
use crate::types::{ServiceInput, ServiceLine, ServiceUnit};
use crate::{MM_PER_METER, QUANTITY_SCALE};

/// Derives the raw billable quantity for a unit.
///
/// `quantity_override` only applies to [`ServiceUnit::Unit`]; area and
/// perimeter quantities are always computed from the dimensions and
/// rounded half-up to 2 decimals.
pub fn derive_quantity(
    unit: ServiceUnit,
    dimensions: &Dimensions,
    quantity_override: Option<f64>,
) -> PricingResult<Decimal> {
    match unit {
        ServiceUnit::Unit => match quantity_override {
            Some(quantity) => to_decimal(quantity),
            None => Ok(Decimal::ONE),
        },
        ServiceUnit::Sqm => {
            let width_m = to_decimal(dimensions.width_mm)? / MM_PER_METER;
            let height_m = to_decimal(dimensions.height_mm)? / MM_PER_METER;
            Ok(round_quantity(width_m * height_m))
        }
        ServiceUnit::Ml => {
            let width_m = to_decimal(dimensions.width_mm)? / MM_PER_METER;
            let height_m = to_decimal(dimensions.height_mm)? / MM_PER_METER;
            Ok(round_quantity(Decimal::TWO * (width_m + height_m)))
        }
    }
}

/// Raises a quantity to the minimum billing floor, if one is set.
///
/// A `None` or zero minimum is a no-op. This floor exists for services
/// only; adjustments never pass through here.
pub fn apply_minimum_billing_unit(
    quantity: Decimal,
    minimum: Option<f64>,
) -> PricingResult<Decimal> {
    match minimum {
        Some(minimum) if minimum > 0.0 => Ok(quantity.max(to_decimal(minimum)?)),
        _ => Ok(quantity),
    }
}

/// Prices one service: derive quantity, clamp to the minimum, multiply by
/// the rate through `Money`.
pub fn calculate_service_amount(
    service: &ServiceInput,
    dimensions: &Dimensions,
) -> PricingResult<ServiceLine> {
    let raw = derive_quantity(service.unit, dimensions, service.quantity_override)?;
    let quantity = apply_minimum_billing_unit(raw, service.minimum_billing_unit)?;
    let amount = service.rate.multiply_decimal(quantity);

    Ok(ServiceLine {
        service_id: service.id.clone(),
        name: service.name.clone(),
        unit: service.unit,
        quantity: quantity.to_f64().unwrap_or_default(),
        amount,
    })
}

fn round_quantity(quantity: Decimal) -> Decimal {
    quantity.round_dp_with_strategy(QUANTITY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn dims() -> Dimensions {
        Dimensions::new(1000.0, 2000.0, 800.0, 800.0)
    }

    fn service(unit: ServiceUnit, rate: f64) -> ServiceInput {
        ServiceInput {
            id: "svc-1".to_string(),
            name: "Installation".to_string(),
            unit,
            rate: Money::new(rate).unwrap(),
            minimum_billing_unit: None,
            quantity_override: None,
        }
    }

    #[test]
    fn test_unit_quantity_defaults_to_one() {
        let quantity = derive_quantity(ServiceUnit::Unit, &dims(), None).unwrap();
        assert_eq!(quantity, Decimal::ONE);
    }

    #[test]
    fn test_unit_quantity_override() {
        let quantity = derive_quantity(ServiceUnit::Unit, &dims(), Some(4.0)).unwrap();
        assert_eq!(quantity, Decimal::from(4));
    }

    #[test]
    fn test_sqm_quantity_uses_actual_dimensions() {
        // 1.0 m × 2.0 m = 2.00 m² - the 800 mm minimums play no role
        let quantity = derive_quantity(ServiceUnit::Sqm, &dims(), None).unwrap();
        assert_eq!(quantity.to_f64().unwrap(), 2.0);
    }

    #[test]
    fn test_sqm_quantity_rounds_half_up() {
        // 1.235 × 1.0 = 1.235 m² → 1.24
        let dims = Dimensions::new(1235.0, 1000.0, 0.0, 0.0);
        let quantity = derive_quantity(ServiceUnit::Sqm, &dims, None).unwrap();
        assert_eq!(quantity.to_f64().unwrap(), 1.24);
    }

    #[test]
    fn test_ml_quantity_is_perimeter() {
        // 2 × (1.0 + 2.0) = 6.00 linear meters
        let quantity = derive_quantity(ServiceUnit::Ml, &dims(), None).unwrap();
        assert_eq!(quantity.to_f64().unwrap(), 6.0);
    }

    #[test]
    fn test_ml_quantity_rounds_half_up() {
        // 2 × (0.6025 + 0.5) = 2.205 → 2.21
        let dims = Dimensions::new(602.5, 500.0, 0.0, 0.0);
        let quantity = derive_quantity(ServiceUnit::Ml, &dims, None).unwrap();
        assert_eq!(quantity.to_f64().unwrap(), 2.21);
    }

    #[test]
    fn test_minimum_billing_floor() {
        let two = Decimal::TWO;
        // Below the floor: billed exactly at the minimum
        let clamped = apply_minimum_billing_unit(two, Some(3.0)).unwrap();
        assert_eq!(clamped.to_f64().unwrap(), 3.0);

        // Above the floor: raw quantity wins
        let kept = apply_minimum_billing_unit(two, Some(1.5)).unwrap();
        assert_eq!(kept, two);

        // Absent or zero floor: no-op
        assert_eq!(apply_minimum_billing_unit(two, None).unwrap(), two);
        assert_eq!(apply_minimum_billing_unit(two, Some(0.0)).unwrap(), two);
    }

    #[test]
    fn test_service_amount_with_minimum() {
        // Raw 2.00 m² clamped to minimum 3 → 10 × 3 = 30.00
        let mut svc = service(ServiceUnit::Sqm, 10.0);
        svc.minimum_billing_unit = Some(3.0);
        let line = calculate_service_amount(&svc, &dims()).unwrap();
        assert_eq!(line.quantity, 3.0);
        assert_eq!(line.amount, Money::new(30.0).unwrap());
    }

    #[test]
    fn test_service_amount_fixed_unit() {
        let svc = service(ServiceUnit::Unit, 45.5);
        let line = calculate_service_amount(&svc, &dims()).unwrap();
        assert_eq!(line.quantity, 1.0);
        assert_eq!(line.amount, Money::new(45.5).unwrap());
        assert_eq!(line.service_id, "svc-1");
        assert_eq!(line.name, "Installation");
    }

    #[test]
    fn test_service_amount_perimeter() {
        // 6.00 ml × 2.5 = 15.00
        let svc = service(ServiceUnit::Ml, 2.5);
        let line = calculate_service_amount(&svc, &dims()).unwrap();
        assert_eq!(line.quantity, 6.0);
        assert_eq!(line.amount, Money::new(15.0).unwrap());
    }
}
