//! # Dimensions Module
//!
//! The width/height value object every calculator reads from.
//!
//! Two different billing rules hang off the same pair of numbers:
//!
//! - **Profile billing** charges per millimeter *beyond* the included
//!   minimum - [`Dimensions::effective_width`] / [`Dimensions::effective_height`],
//!   clamped so an under-minimum product never produces a negative charge.
//! - **Glass billing** ignores minimums entirely and works from the *actual*
//!   dimensions (minus a frame-overlap discount, handled in [`crate::glass`]).
//!
//! `Dimensions` itself never fails: positivity checks belong to the
//! validation gate in [`crate::validation`], which runs before any
//! calculator sees this value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Immutable width/height pair with the minimum billed dimensions included
/// in the model's base price. All values are millimeters.
///
/// Created once per price calculation call; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimensions {
    /// Actual product width in millimeters.
    pub width_mm: f64,

    /// Actual product height in millimeters.
    pub height_mm: f64,

    /// Width already covered by the model's base price.
    pub min_width_mm: f64,

    /// Height already covered by the model's base price.
    pub min_height_mm: f64,
}

impl Dimensions {
    /// Creates a new dimensions value object.
    #[inline]
    pub const fn new(width_mm: f64, height_mm: f64, min_width_mm: f64, min_height_mm: f64) -> Self {
        Dimensions {
            width_mm,
            height_mm,
            min_width_mm,
            min_height_mm,
        }
    }

    /// Millimeters of width billed beyond the included minimum.
    ///
    /// Clamped at zero: a product narrower than the minimum still pays the
    /// base price, never a negative per-mm charge.
    ///
    /// ## Example
    /// ```rust
    /// use fenestra_core::Dimensions;
    ///
    /// let dims = Dimensions::new(1000.0, 2000.0, 800.0, 800.0);
    /// assert_eq!(dims.effective_width(), 200.0);
    ///
    /// let under = Dimensions::new(500.0, 500.0, 800.0, 800.0);
    /// assert_eq!(under.effective_width(), 0.0);
    /// ```
    #[inline]
    pub fn effective_width(&self) -> f64 {
        (self.width_mm - self.min_width_mm).max(0.0)
    }

    /// Millimeters of height billed beyond the included minimum.
    /// Clamped at zero like [`Dimensions::effective_width`].
    #[inline]
    pub fn effective_height(&self) -> f64 {
        (self.height_mm - self.min_height_mm).max(0.0)
    }

    /// Actual width in meters.
    #[inline]
    pub fn width_m(&self) -> f64 {
        self.width_mm / 1000.0
    }

    /// Actual height in meters.
    #[inline]
    pub fn height_m(&self) -> f64 {
        self.height_mm / 1000.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
