//! # Validation Module
//!
//! The input gate run by the use case before any arithmetic.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Quoting frontend                                              │
//! │  ├── Form-level checks, immediate user feedback                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - the engine's contract                          │
//! │  ├── width/height must be positive millimeters                         │
//! │  ├── color multiplier ≥ 1.0 (surcharge only, never a discount)         │
//! │  └── margin percentage in [0, 100) (100 would divide by zero)          │
//! │                                                                         │
//! │  Bad input FAILS here - it is never silently clamped into a price.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::PriceCalculationInput;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a full calculation input. Called by
/// [`calculate_item_price`](crate::calculate_item_price) before delegating
/// to the aggregate.
pub fn validate_input(input: &PriceCalculationInput) -> ValidationResult<()> {
    validate_dimension("width", input.dimensions.width_mm)?;
    validate_dimension("height", input.dimensions.height_mm)?;
    validate_color_multiplier(input.color_multiplier)?;

    if let Some(margin) = input.profit_margin_percentage {
        validate_margin_percentage(margin)?;
    }

    Ok(())
}

/// Validates one dimension in millimeters.
///
/// ## Rules
/// - Must be a finite number
/// - Must be strictly positive (a zero-width window is a caller bug,
///   not a free window)
pub fn validate_dimension(field: &str, value_mm: f64) -> ValidationResult<()> {
    if !value_mm.is_finite() || value_mm <= 0.0 {
        return Err(ValidationError::InvalidDimension {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the color surcharge multiplier.
///
/// ## Rules
/// - Must be a finite number
/// - Must be ≥ 1.0: the multiplier models a surcharge only; a value below
///   1.0 would smuggle a discount through a mechanism that doesn't
///   support one
pub fn validate_color_multiplier(multiplier: f64) -> ValidationResult<()> {
    if !multiplier.is_finite() || multiplier < 1.0 {
        return Err(ValidationError::InvalidColorMultiplier { value: multiplier });
    }

    Ok(())
}

/// Validates a profit margin percentage.
///
/// ## Rules
/// - Must be a finite number in `[0, 100)`
/// - Exactly 100 is rejected here rather than surfacing later as a generic
///   division-by-zero from the margin calculator
pub fn validate_margin_percentage(margin: f64) -> ValidationResult<()> {
    if !margin.is_finite() || !(0.0..100.0).contains(&margin) {
        return Err(ValidationError::InvalidMarginPercentage { value: margin });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
