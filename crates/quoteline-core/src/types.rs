//! # Domain Types
//!
//! Core domain types used throughout Quoteline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────┐                      │
//! │  │ ProductSnapshot  │        │    OfferItem     │                      │
//! │  │  ──────────────  │──────► │  ──────────────  │                      │
//! │  │  id              │ frozen │  product         │                      │
//! │  │  name            │  into  │  quantity        │                      │
//! │  │  kind            │        │  discount        │                      │
//! │  │  price           │        │  total_cost      │                      │
//! │  │  snapshot_date   │        └──────────────────┘                      │
//! │  └──────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An offer keeps a frozen copy of product data captured when the line item
//! was created. Catalog edits after that point never change an existing
//! offer line.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Product Snapshot
// =============================================================================

/// A frozen copy of product data at the time an offer line was created.
///
/// Supplied by the catalog layer and consumed read-only here; this crate
/// never looks products up or refreshes them. Every field may be absent -
/// the snapshot source is outside our control, so absence is a defined state
/// rather than an error (the sole exception is `price`, which
/// [`OfferItem`](crate::offer::OfferItem) construction requires).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product identifier in the source catalog. Opaque to this crate.
    pub id: Option<String>,

    /// Display name at the time of capture.
    pub name: Option<String>,

    /// Product classification ("STANDARD", "FOOD", ...). Opaque to this crate.
    pub kind: Option<String>,

    /// Unit price at the time of capture. Exact decimal, expected >= 0 but
    /// not checked here.
    pub price: Option<Decimal>,

    /// When the snapshot was captured.
    pub snapshot_date: Option<DateTime<Utc>>,
}
