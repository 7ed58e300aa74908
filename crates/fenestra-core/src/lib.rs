//! # fenestra-core: Pure Pricing Engine for Fenestra
//!
//! This crate is the **heart** of Fenestra's quoting system. It turns one
//! fully resolved product configuration (dimensions, profile rates, glass,
//! color surcharge, services, manual adjustments) into one itemized monetary
//! breakdown, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fenestra Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Quoting Application                           │   │
//! │  │   Catalog lookup ──► Wizard UI ──► Cart ──► Persistence        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PriceCalculationInput                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ fenestra-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │   money   │  │ dimensions │  │ calculators│  │validation│  │   │
//! │  │   │   Money   │  │ clamping   │  │ profile..  │  │  gate    │  │   │
//! │  │   └───────────┘  └────────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PriceCalculationResult                 │
//! │                                ▼                                        │
//! │                    itemized quote breakdown                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Fixed-scale decimal `Money` type (half-up, 2 decimals)
//! - [`dimensions`] - Width/height value object with minimum clamping
//! - [`types`] - The input/output contract (units, rates, line results)
//! - [`profile`], [`glass`], [`accessory`], [`margin`] - Cost calculators
//! - [`service`], [`adjustment`] - Line-item quantity and amount derivation
//! - [`calculation`] - The aggregate orchestration and its use case
//! - [`validation`] - Input validation gate
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input = same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: monetary math runs on `rust_decimal`, rounded half-up
//!    to 2 decimals at every step (never raw `f64` internally)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use fenestra_core::{calculate_item_price, Dimensions, ModelPrices, Money};
//! use fenestra_core::types::PriceCalculationInput;
//!
//! let input = PriceCalculationInput {
//!     dimensions: Dimensions::new(1000.0, 2000.0, 800.0, 800.0),
//!     model: ModelPrices {
//!         base_price: Money::new(100.0).unwrap(),
//!         cost_per_mm_width: Money::new(1.0).unwrap(),
//!         cost_per_mm_height: Money::new(1.0).unwrap(),
//!         accessory_price: None,
//!     },
//!     color_multiplier: 1.0,
//!     profit_margin_percentage: None,
//!     glass: None,
//!     services: vec![],
//!     adjustments: vec![],
//! };
//!
//! let result = calculate_item_price(&input).unwrap();
//! // base 100 + 1×200 extra width mm + 1×1200 extra height mm
//! assert_eq!(result.profile_cost, Money::new(1500.0).unwrap());
//! assert_eq!(result.subtotal, Money::new(1500.0).unwrap());
//! ```

use rust_decimal::Decimal;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accessory;
pub mod adjustment;
pub mod calculation;
pub mod dimensions;
pub mod error;
pub mod glass;
pub mod margin;
pub mod money;
pub mod profile;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fenestra_core::Money` instead of
// `use fenestra_core::money::Money`

pub use calculation::{calculate, calculate_item_price};
pub use dimensions::Dimensions;
pub use error::{PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of decimal places every monetary value is rounded to.
///
/// ## Why a constant?
/// Rounding scale and mode are process-wide policy, not per-call options.
/// Every `Money` construction path rounds through this scale, so two code
/// paths can never disagree about precision.
pub const MONEY_SCALE: u32 = 2;

/// Number of decimal places billable quantities (m², linear meters) are
/// rounded to before being priced.
pub const QUANTITY_SCALE: u32 = 2;

/// Millimeters per meter, as an exact decimal.
///
/// Dimension inputs arrive in millimeters; area and perimeter quantities are
/// billed in meter-scale units, so this divisor appears in every quantity
/// derivation.
pub const MM_PER_METER: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Square millimeters per square meter, as an exact decimal.
pub const SQMM_PER_SQM: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Divisor converting a percentage (e.g. `20`) into a fraction (`0.20`).
pub const PERCENT_DIVISOR: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
