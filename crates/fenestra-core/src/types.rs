//! # Contract Types
//!
//! The in-process contract between the hosting application and the engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    PriceCalculationInput                                │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐                  │
//! │  │  Dimensions  │  │ ModelPrices  │  │ GlassPricing │ (optional)       │
//! │  │  mm + mins   │  │ base, per-mm │  │ €/m², frame  │                  │
//! │  └──────────────┘  │ rates, acc.  │  │ overlap mm   │                  │
//! │                    └──────────────┘  └──────────────┘                  │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐                                │
//! │  │ ServiceInput │  │ AdjustmentInput  │   color_multiplier ≥ 1.0       │
//! │  │ rate × qty   │  │ signed delta     │   margin ∈ [0, 100)            │
//! │  └──────────────┘  └──────────────────┘                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All catalog resolution (model rates, service rates, a color's surcharge
//! percentage) happens in the caller; the engine only consumes resolved
//! numeric values. Ids are carried through untouched so the caller can join
//! result lines back to its catalog.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dimensions::Dimensions;
use crate::money::Money;

// =============================================================================
// Service Unit
// =============================================================================

/// How a service or adjustment quantity is derived from the product.
///
/// A closed enumeration: adding a unit without updating the quantity
/// derivation in [`crate::service`] is a compile-time error, not a runtime
/// "unknown unit" failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceUnit {
    /// Fixed quantity (default 1, services may override it).
    Unit,
    /// Area in m² (width × height, meter scale).
    Sqm,
    /// Perimeter in linear meters (2 × (width + height), meter scale).
    Ml,
}

impl Default for ServiceUnit {
    fn default() -> Self {
        ServiceUnit::Unit
    }
}

// =============================================================================
// Model Prices
// =============================================================================

/// The profile/frame cost model for one product configuration.
///
/// Immutable per calculation call; resolved by the caller from its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelPrices {
    /// Cost of the profile at the minimum billed dimensions.
    pub base_price: Money,

    /// Cost per millimeter of width beyond the minimum.
    pub cost_per_mm_width: Money,

    /// Cost per millimeter of height beyond the minimum.
    pub cost_per_mm_height: Money,

    /// Flat accessory cost, if the model ships with an accessory.
    /// `None` means the model has no accessory - the component is skipped
    /// entirely, which is not the same as a zero-cost accessory.
    pub accessory_price: Option<Money>,
}

// =============================================================================
// Glass Pricing
// =============================================================================

/// Glass pricing for one product configuration.
///
/// The discounts are the millimeters of each axis covered by the frame;
/// they are subtracted from the *actual* (not effective) dimensions before
/// the billable area is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlassPricing {
    /// Price per square meter of billable glass.
    pub price_per_sqm: Money,

    /// Width covered by the frame, in millimeters.
    pub discount_width_mm: Option<f64>,

    /// Height covered by the frame, in millimeters.
    pub discount_height_mm: Option<f64>,
}

// =============================================================================
// Services
// =============================================================================

/// One resolved service to bill on this item (e.g. installation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceInput {
    /// Catalog identifier, carried through to the result line.
    pub id: String,

    /// Display name shown on the quote.
    pub name: String,

    /// How the billable quantity is derived.
    pub unit: ServiceUnit,

    /// Price per billed unit.
    pub rate: Money,

    /// Minimum quantity to bill. A computed quantity below this floor is
    /// raised to it; `None` (or zero) is a no-op.
    pub minimum_billing_unit: Option<f64>,

    /// Fixed-quantity override for [`ServiceUnit::Unit`] services.
    /// Ignored for area/perimeter units.
    pub quantity_override: Option<f64>,
}

/// One priced service line in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceLine {
    /// Catalog identifier of the service.
    pub service_id: String,

    /// Display name of the service.
    pub name: String,

    /// Unit the quantity is expressed in.
    pub unit: ServiceUnit,

    /// Billed quantity, after the minimum-billing floor.
    pub quantity: f64,

    /// Billed amount (rate × quantity, 2-decimal rounded).
    pub amount: Money,
}

// =============================================================================
// Adjustments
// =============================================================================

/// One manual correction (discount or surcharge) on this item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdjustmentInput {
    /// Identifier, carried through to the result line.
    pub id: String,

    /// Free-text concept shown on the quote ("commercial discount", ...).
    pub concept: String,

    /// How the quantity is derived - same enumeration as services.
    pub unit: ServiceUnit,

    /// Value per billed unit.
    pub value: Money,

    /// `true` adds to the subtotal, `false` subtracts.
    pub is_positive: bool,
}

/// One signed adjustment line in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdjustmentLine {
    /// Identifier of the adjustment.
    pub adjustment_id: String,

    /// Free-text concept.
    pub concept: String,

    /// Unit the quantity is expressed in.
    pub unit: ServiceUnit,

    /// Derived quantity (no minimum-billing floor for adjustments).
    pub quantity: f64,

    /// Signed amount: negative when the adjustment subtracts.
    pub amount: Money,
}

// =============================================================================
// Input / Result
// =============================================================================

/// Everything the engine needs to price one configured item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceCalculationInput {
    /// Actual and minimum billed dimensions, in millimeters.
    pub dimensions: Dimensions,

    /// Profile/frame cost model.
    pub model: ModelPrices,

    /// Color surcharge factor, ≥ 1.0. Applied to profile and accessory
    /// costs only - never glass, services, or adjustments.
    pub color_multiplier: f64,

    /// Profit margin percentage in `[0, 100)`, applied to the combined
    /// model cost via `cost / (1 - margin/100)`. `None` (or zero) leaves
    /// the model cost unchanged.
    pub profit_margin_percentage: Option<f64>,

    /// Glass pricing; `None` for configurations without glass.
    pub glass: Option<GlassPricing>,

    /// Resolved services to bill on this item.
    pub services: Vec<ServiceInput>,

    /// Resolved manual adjustments for this item.
    pub adjustments: Vec<AdjustmentInput>,
}

/// The fully itemized breakdown for one configured item.
///
/// Fully determined by its input - no hidden state, no randomness, no
/// wall-clock dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceCalculationResult {
    /// Frame cost: base price plus per-mm charges, color surcharge applied.
    pub profile_cost: Money,

    /// Glass cost, zero when the configuration has no glass.
    pub glass_cost: Money,

    /// Accessory cost, zero when the model has no accessory.
    pub accessory_cost: Money,

    /// profile_cost + glass_cost + accessory_cost.
    pub model_cost: Money,

    /// Model cost with the profit margin applied, or equal to
    /// `model_cost` when no margin was supplied.
    pub model_sales_price: Money,

    /// Itemized service lines.
    pub services: Vec<ServiceLine>,

    /// Itemized adjustment lines (amounts may be negative).
    pub adjustments: Vec<AdjustmentLine>,

    /// model_sales_price + Σ services + Σ adjustments (signed).
    pub subtotal: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
