//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A quote chains dozens of multiplications (rates × millimeters ×       │
//! │  surcharges × margins). Raw float error compounds across the chain     │
//! │  and shows up as off-by-a-cent totals on real quotes.                  │
//! │                                                                         │
//! │  OUR SOLUTION: Fixed-Scale Decimal                                      │
//! │    Every Money is a rust_decimal value rounded HALF-UP to 2 decimals   │
//! │    at construction and after every operation. Intermediate values      │
//! │    are therefore already exact 2-decimal amounts, which keeps this     │
//! │    engine cent-for-cent compatible with the reference breakdowns.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fenestra_core::money::Money;
//!
//! // Half-up rounding happens at construction
//! let price = Money::new(1.005).unwrap();
//! assert_eq!(price.to_f64(), 1.01);
//!
//! // Arithmetic operations return new rounded instances
//! let total = price + Money::new(2.0).unwrap();
//! assert_eq!(total.to_f64(), 3.01);
//!
//! // Non-finite inputs are rejected, never silently zeroed
//! assert!(Money::new(f64::NAN).is_err());
//! ```

use rust_decimal::prelude::*;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use ts_rs::TS;

use crate::error::{PricingError, PricingResult};
use crate::MONEY_SCALE;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value with a fixed scale of 2 decimal places.
///
/// ## Design Decisions
/// - **rust_decimal payload**: exact decimal arithmetic, no binary-float drift
/// - **Half-up at every step**: construction, multiply, and divide all round
///   through [`MONEY_SCALE`] with `MidpointAwayFromZero`; rounding only at
///   the end would change results by cents on edge cases
/// - **Immutable**: every operation returns a new instance
/// - **Signed**: adjustments may subtract, so negative amounts are valid
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ModelPrices.base_price ──► profile cost ──► model cost ──► margin     │
/// │  GlassPricing.price_per_sqm ──► glass cost ──┘                         │
/// │  ServiceInput.rate × quantity ──► service line ──► subtotal            │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] Decimal);

impl Money {
    /// Creates a Money value from a raw number, rounding half-up to
    /// 2 decimal places.
    ///
    /// Fails with [`PricingError::InvalidAmount`] if the value is NaN or
    /// infinite - a non-finite amount always means corrupt upstream data.
    ///
    /// ## Example
    /// ```rust
    /// use fenestra_core::money::Money;
    ///
    /// let price = Money::new(10.994).unwrap();
    /// assert_eq!(price.to_f64(), 10.99);
    ///
    /// assert!(Money::new(f64::INFINITY).is_err());
    /// ```
    pub fn new(value: f64) -> PricingResult<Self> {
        Ok(Self::from_decimal(to_decimal(value)?))
    }

    /// Creates a Money value from an exact decimal, rounding half-up to
    /// 2 decimal places.
    ///
    /// This is the single rounding chokepoint: every construction path and
    /// every arithmetic result funnels through here.
    #[inline]
    pub fn from_decimal(amount: Decimal) -> Self {
        Money(amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use fenestra_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount (already 2-decimal rounded).
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies by a raw numeric factor, returning a new rounded instance.
    ///
    /// Fails with [`PricingError::InvalidAmount`] if the factor is not
    /// finite. Used wherever a caller-supplied number (color multiplier,
    /// effective millimeters, billable area) scales a rate.
    ///
    /// ## Example
    /// ```rust
    /// use fenestra_core::money::Money;
    ///
    /// let rate = Money::new(1.0).unwrap();
    /// let cost = rate.multiply(1.1).unwrap();
    /// assert_eq!(cost.to_f64(), 1.10);
    /// ```
    pub fn multiply(&self, factor: f64) -> PricingResult<Self> {
        Ok(self.multiply_decimal(to_decimal(factor)?))
    }

    /// Multiplies by an exact decimal factor, returning a new rounded
    /// instance. Infallible - used for quantities that were already derived
    /// in decimal space.
    #[inline]
    pub fn multiply_decimal(&self, factor: Decimal) -> Self {
        Self::from_decimal(self.0 * factor)
    }

    /// Divides by a raw numeric divisor, returning a new rounded instance.
    ///
    /// Fails with [`PricingError::DivisionByZero`] if the divisor is zero
    /// and [`PricingError::InvalidAmount`] if it is not finite.
    ///
    /// ## Example
    /// ```rust
    /// use fenestra_core::money::Money;
    ///
    /// let cost = Money::new(100.0).unwrap();
    /// assert_eq!(cost.divide(0.8).unwrap().to_f64(), 125.0);
    /// assert!(cost.divide(0.0).is_err());
    /// ```
    pub fn divide(&self, divisor: f64) -> PricingResult<Self> {
        self.divide_decimal(to_decimal(divisor)?)
    }

    /// Divides by an exact decimal divisor, returning a new rounded instance.
    /// Fails with [`PricingError::DivisionByZero`] on a zero divisor.
    pub fn divide_decimal(&self, divisor: Decimal) -> PricingResult<Self> {
        if divisor.is_zero() {
            return Err(PricingError::DivisionByZero);
        }
        Ok(Self::from_decimal(self.0 / divisor))
    }

    /// Returns the value as an `f64`.
    ///
    /// ## Note
    /// Lossy escape hatch for output/display only. Internal computation must
    /// stay in the decimal representation; converting back and forth inside
    /// a calculation would reintroduce the float drift this type exists to
    /// prevent.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

/// Converts a raw `f64` into an exact decimal, rejecting NaN/infinity.
///
/// The shared entry point for every caller-supplied number (amounts,
/// multipliers, millimeters, quantities) crossing into decimal space.
pub(crate) fn to_decimal(value: f64) -> PricingResult<Decimal> {
    Decimal::from_f64(value).ok_or(PricingError::InvalidAmount { value })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle currency/localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{:.2}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values (both already 2-decimal, result re-rounded
/// through the same chokepoint).
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_decimal(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_decimal(self.0 - other.0)
    }
}

/// Negation - used when an adjustment subtracts from the subtotal.
impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_decimal(-self.0)
    }
}

/// Serializes as a plain JSON number (e.g. `1500.0`), which is what the
/// quoting frontend consumes.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

/// Deserializes from a plain JSON number, applying the same construction
/// rules (half-up rounding, non-finite rejection) as [`Money::new`].
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::new(value).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
