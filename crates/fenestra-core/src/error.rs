//! # Error Types
//!
//! Domain-specific error types for fenestra-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fenestra-core errors (this file)                                      │
//! │  ├── PricingError     - Arithmetic/domain failures                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Hosting application errors (out of scope)                             │
//! │  └── whatever the caller maps these into (form errors, alerts)         │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → caller                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Any failure means "no price could be computed" - there are no
//!    partial results
//!
//! Validation errors are recoverable by the caller correcting its input;
//! arithmetic errors indicate bad upstream data (a non-finite rate, a 100%
//! margin reaching the divider) and should be logged and alerted on by the
//! hosting application.

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Engine-level errors.
///
/// Raised at the point of detection and propagated synchronously to the
/// caller of [`calculate_item_price`](crate::calculate_item_price). The
/// engine never retries and never returns a partial breakdown.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A monetary value or multiplier could not be represented as a finite
    /// decimal (NaN or infinity reached a `Money` construction path).
    #[error("invalid monetary amount: {value} is not a finite number")]
    InvalidAmount { value: f64 },

    /// A division had a zero divisor.
    ///
    /// ## When This Occurs
    /// - `Money::divide` called with 0
    /// - a 100% profit margin reaching the margin calculator, where the
    ///   `cost / (1 - margin/100)` divisor collapses to zero
    #[error("division by zero")]
    DivisionByZero,

    /// Input validation failure (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when the caller-supplied configuration doesn't meet the
/// engine's contract. Raised by the validation gate before any arithmetic
/// runs, so the caller can surface them as form-level feedback.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A dimension is zero, negative, or not a finite number.
    #[error("{field} must be a positive number of millimeters")]
    InvalidDimension { field: String },

    /// The color multiplier is below 1.0 (or not finite). The multiplier
    /// models a surcharge only; values below 1.0 would imply a discount,
    /// which this mechanism does not support.
    #[error("color multiplier must be at least 1.0, got {value}")]
    InvalidColorMultiplier { value: f64 },

    /// The profit margin percentage is outside `[0, 100)`. A margin of
    /// exactly 100 would make the sales-price divisor zero.
    #[error("profit margin percentage must be between 0 and 100 (exclusive), got {value}")]
    InvalidMarginPercentage { value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
