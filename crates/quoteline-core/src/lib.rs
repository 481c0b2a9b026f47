//! # quoteline-core: Pure Business Logic for Quoteline
//!
//! This crate is the **heart** of Quoteline. It models priced line items in
//! a sales offer as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quoteline Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Outer Layers (catalog, offers, UI)                   │   │
//! │  │   product lookup ──► offer assembly ──► change detection        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ProductSnapshot in, totals out         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ quoteline-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────────┐  ┌───────────┐            │   │
//! │  │   │   money   │  │      offer      │  │   types   │            │   │
//! │  │   │   Money   │  │    OfferItem    │  │ Product-  │            │   │
//! │  │   │ Decimal   │  │ totals, same_as │  │ Snapshot  │            │   │
//! │  │   └───────────┘  └─────────────────┘  └───────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact-decimal monetary amounts tagged with a currency code
//! - [`types`] - The product snapshot contract consumed by offer items
//! - [`offer`] - Offer line items: totals, strict equality, fuzzy equivalence
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary math is exact base-10 (`rust_decimal`),
//!    never binary floating point
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quoteline_core::{OfferItem, ProductSnapshot};
//! use rust_decimal_macros::dec;
//!
//! let product = ProductSnapshot {
//!     id: Some("PROD-1".into()),
//!     name: Some("Widget".into()),
//!     kind: Some("STANDARD".into()),
//!     price: Some(dec!(19.99)),
//!     snapshot_date: None,
//! };
//!
//! // price × quantity − discount, computed exactly
//! let item = OfferItem::with_discount(product, 3, Some(dec!(5.00)), None, "USD")?;
//! assert_eq!(item.total_cost_value(), dec!(54.97));
//! # Ok::<(), quoteline_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod offer;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quoteline_core::Money` instead of
// `use quoteline_core::money::Money`

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use offer::OfferItem;
pub use types::ProductSnapshot;
