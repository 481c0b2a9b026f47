//! # Offer Line Items
//!
//! One priced line within a sales offer: product × quantity, minus discount.
//!
//! ## Construction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     OfferItem Construction                              │
//! │                                                                         │
//! │  ProductSnapshot ──► price (REQUIRED, else MissingProductPrice)        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Money::new(price, currency)                                            │
//! │        .multiply(quantity)      ◄── exact decimal throughout           │
//! │        .subtract(discount or 0)                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  total_cost - computed ONCE, frozen for the life of the item           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Notions of "Equal"
//! - `==` / `Hash`: strict snapshot comparison over every field. Used to
//!   detect that nothing at all changed between two offer versions.
//! - [`OfferItem::same_as`]: fuzzy equivalence that tolerates small
//!   total-cost drift, for detecting "practically unchanged" lines across
//!   offer edits (a price tweak within the tolerance is not a real change).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductSnapshot;

// =============================================================================
// Offer Item
// =============================================================================

/// A line item in a sales offer.
///
/// Immutable after construction: the product snapshot is frozen, and
/// `total_cost` is computed exactly once. If the catalog price changes later,
/// an existing item keeps the total it was built with.
///
/// Derived `PartialEq`/`Eq`/`Hash` compare the full snapshot: every product
/// field, quantity, discount, discount cause, and the total cost's amount and
/// currency. `Option` fields compare null-safely (absent equals absent,
/// absent never equals present).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferItem {
    product: ProductSnapshot,
    quantity: i64,
    discount: Option<Decimal>,
    discount_cause: Option<String>,
    total_cost: Money,
}

impl OfferItem {
    /// Creates an offer item with no discount.
    ///
    /// ## Example
    /// ```rust
    /// use quoteline_core::offer::OfferItem;
    /// use quoteline_core::types::ProductSnapshot;
    /// use rust_decimal_macros::dec;
    ///
    /// let product = ProductSnapshot {
    ///     id: Some("PROD-1".into()),
    ///     name: Some("Widget".into()),
    ///     kind: Some("STANDARD".into()),
    ///     price: Some(dec!(19.99)),
    ///     snapshot_date: None,
    /// };
    ///
    /// let item = OfferItem::new(product, 3, "USD")?;
    /// assert_eq!(item.total_cost_value(), dec!(59.97));
    /// # Ok::<(), quoteline_core::error::CoreError>(())
    /// ```
    ///
    /// ## Errors
    /// Returns [`CoreError::MissingProductPrice`] when the snapshot has no
    /// price - the only input this constructor rejects.
    pub fn new(
        product: ProductSnapshot,
        quantity: i64,
        currency: impl Into<String>,
    ) -> CoreResult<Self> {
        Self::with_discount(product, quantity, None, None, currency)
    }

    /// Creates an offer item with an optional discount.
    ///
    /// The total is `price × quantity − discount` (discount defaults to zero
    /// when absent), tagged with `currency`. `discount_cause` is carried for
    /// display and strict equality only; it never affects the math.
    ///
    /// Negative quantities and negative discounts are accepted without
    /// diagnostics (returns and credits are modelled upstream as negative
    /// lines). Callers needing stricter invariants enforce them before
    /// construction.
    ///
    /// ## Errors
    /// Returns [`CoreError::MissingProductPrice`] when the snapshot has no
    /// price.
    pub fn with_discount(
        product: ProductSnapshot,
        quantity: i64,
        discount: Option<Decimal>,
        discount_cause: Option<String>,
        currency: impl Into<String>,
    ) -> CoreResult<Self> {
        let price = product.price.ok_or_else(|| CoreError::MissingProductPrice {
            product_id: product.id.clone(),
        })?;

        let discount_value = discount.unwrap_or(Decimal::ZERO);
        let total_cost = Money::new(price, currency)
            .multiply(quantity)
            .subtract(discount_value);

        Ok(OfferItem {
            product,
            quantity,
            discount,
            discount_cause,
            total_cost,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors (pure read-through projections)
    // -------------------------------------------------------------------------

    /// Product identifier from the frozen snapshot.
    #[inline]
    pub fn product_id(&self) -> Option<&str> {
        self.product.id.as_deref()
    }

    /// Product name from the frozen snapshot.
    #[inline]
    pub fn product_name(&self) -> Option<&str> {
        self.product.name.as_deref()
    }

    /// Product classification from the frozen snapshot.
    #[inline]
    pub fn product_kind(&self) -> Option<&str> {
        self.product.kind.as_deref()
    }

    /// Unit price from the frozen snapshot.
    #[inline]
    pub fn product_price(&self) -> Option<Decimal> {
        self.product.price
    }

    /// When the product snapshot was captured.
    #[inline]
    pub fn product_snapshot_date(&self) -> Option<DateTime<Utc>> {
        self.product.snapshot_date
    }

    /// Quantity of units on this line.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Absolute discount applied to the line total, if any.
    #[inline]
    pub fn discount(&self) -> Option<Decimal> {
        self.discount
    }

    /// Free-text reason for the discount, if any.
    #[inline]
    pub fn discount_cause(&self) -> Option<&str> {
        self.discount_cause.as_deref()
    }

    /// The frozen line total.
    #[inline]
    pub fn total_cost(&self) -> &Money {
        &self.total_cost
    }

    /// Amount of the frozen line total.
    #[inline]
    pub fn total_cost_value(&self) -> Decimal {
        self.total_cost.amount()
    }

    /// Currency code of the frozen line total.
    #[inline]
    pub fn total_cost_currency(&self) -> &str {
        self.total_cost.currency()
    }

    // -------------------------------------------------------------------------
    // Fuzzy Equivalence
    // -------------------------------------------------------------------------

    /// Checks whether two offer lines are "practically the same" within a
    /// percentage tolerance on the total cost.
    ///
    /// ## Comparison Rules
    /// ```text
    /// product price  ──┐
    /// product name   ──┤  exact, null-safe: any mismatch (including
    /// product id     ──┤  one-sided absence) ⇒ NOT same
    /// product kind   ──┘
    /// quantity       ──── exact ⇒ mismatch is NOT same
    /// total cost     ──── tolerance check below
    /// discount(+cause) ── deliberately IGNORED: only the resulting total
    ///                     matters, not how it was composed
    /// ```
    ///
    /// ## Tolerance
    /// With `max`/`min` the larger/smaller of the two total amounts:
    ///
    /// `acceptable_delta = max × (delta_percent / 100)`
    ///
    /// and the result is `acceptable_delta > difference` - STRICT. A
    /// difference exactly at the tolerance is rejected, and the percentage is
    /// always taken relative to the LARGER total, never an average. Both
    /// choices are load-bearing for change detection and must not be replaced
    /// with a symmetric formula.
    ///
    /// Note: the two totals' currencies are not compared here, so totals in
    /// different currencies are tolerance-compared as bare magnitudes. Known
    /// gap, kept until product requirements say otherwise.
    pub fn same_as(&self, other: &OfferItem, delta_percent: Decimal) -> bool {
        if self.product.price != other.product.price {
            return false;
        }
        if self.product.name != other.product.name {
            return false;
        }
        if self.product.id != other.product.id {
            return false;
        }
        if self.product.kind != other.product.kind {
            return false;
        }
        if self.quantity != other.quantity {
            return false;
        }

        let (max, min) = if self.total_cost.amount() > other.total_cost.amount() {
            (self.total_cost.amount(), other.total_cost.amount())
        } else {
            (other.total_cost.amount(), self.total_cost.amount())
        };

        let difference = max - min;
        let acceptable_delta = max * (delta_percent / Decimal::ONE_HUNDRED);

        acceptable_delta > difference
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn widget() -> ProductSnapshot {
        ProductSnapshot {
            id: Some("PROD-1".to_string()),
            name: Some("Widget".to_string()),
            kind: Some("STANDARD".to_string()),
            price: Some(dec!(19.99)),
            snapshot_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        }
    }

    fn priced(price: Decimal) -> ProductSnapshot {
        ProductSnapshot {
            price: Some(price),
            ..widget()
        }
    }

    #[test]
    fn test_total_without_discount() {
        let item = OfferItem::new(widget(), 3, "USD").unwrap();
        assert_eq!(item.total_cost_value(), dec!(59.97));
        assert_eq!(item.total_cost_currency(), "USD");
        assert_eq!(item.discount(), None);
        assert_eq!(item.discount_cause(), None);
    }

    #[test]
    fn test_total_with_discount_is_exact() {
        // 19.99 × 3 − 5.00 = 54.97, no precision loss
        let item = OfferItem::with_discount(
            widget(),
            3,
            Some(dec!(5.00)),
            Some("loyal customer".to_string()),
            "USD",
        )
        .unwrap();
        assert_eq!(item.total_cost_value(), dec!(54.97));
        assert_eq!(item.discount(), Some(dec!(5.00)));
        assert_eq!(item.discount_cause(), Some("loyal customer"));
    }

    #[test]
    fn test_missing_price_is_rejected_by_both_constructors() {
        let unpriced = ProductSnapshot {
            price: None,
            ..widget()
        };

        let err = OfferItem::new(unpriced.clone(), 1, "USD").unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingProductPrice {
                product_id: Some(ref id)
            } if id == "PROD-1"
        ));

        let err =
            OfferItem::with_discount(unpriced, 1, Some(dec!(1)), None, "USD").unwrap_err();
        assert!(matches!(err, CoreError::MissingProductPrice { .. }));
    }

    #[test]
    fn test_negative_quantity_and_discount_accepted() {
        // Returns/credits arrive as negative lines; no validation here
        let credit = OfferItem::new(priced(dec!(10)), -2, "USD").unwrap();
        assert_eq!(credit.total_cost_value(), dec!(-20));

        let padded =
            OfferItem::with_discount(priced(dec!(10)), 1, Some(dec!(-5)), None, "USD").unwrap();
        assert_eq!(padded.total_cost_value(), dec!(15));
    }

    #[test]
    fn test_accessors_round_trip_the_snapshot() {
        let source = widget();
        let item = OfferItem::new(source.clone(), 4, "USD").unwrap();

        assert_eq!(item.product_id(), source.id.as_deref());
        assert_eq!(item.product_name(), source.name.as_deref());
        assert_eq!(item.product_kind(), source.kind.as_deref());
        assert_eq!(item.product_price(), source.price);
        assert_eq!(item.product_snapshot_date(), source.snapshot_date);
        assert_eq!(item.quantity(), 4);
    }

    #[test]
    fn test_total_is_frozen_at_construction() {
        // The item keeps its snapshot even if the caller's catalog moves on
        let item = OfferItem::new(widget(), 2, "USD").unwrap();
        let repriced = OfferItem::new(priced(dec!(25.00)), 2, "USD").unwrap();

        assert_eq!(item.total_cost_value(), dec!(39.98));
        assert_eq!(repriced.total_cost_value(), dec!(50.00));
    }

    // -------------------------------------------------------------------------
    // Strict equality and hashing
    // -------------------------------------------------------------------------

    fn hash_of(item: &OfferItem) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        item.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identical_inputs_are_equal_and_hash_alike() {
        let a = OfferItem::with_discount(
            widget(),
            3,
            Some(dec!(5)),
            Some("promo".to_string()),
            "USD",
        )
        .unwrap();
        let b = OfferItem::with_discount(
            widget(),
            3,
            Some(dec!(5)),
            Some("promo".to_string()),
            "USD",
        )
        .unwrap();

        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_is_strict_over_every_field() {
        let base = OfferItem::with_discount(
            widget(),
            3,
            Some(dec!(5)),
            Some("promo".to_string()),
            "USD",
        )
        .unwrap();

        // Different currency
        let other = OfferItem::with_discount(
            widget(),
            3,
            Some(dec!(5)),
            Some("promo".to_string()),
            "EUR",
        )
        .unwrap();
        assert_ne!(base, other);

        // Different discount cause (display-only field, still part of equality)
        let other = OfferItem::with_discount(
            widget(),
            3,
            Some(dec!(5)),
            Some("clearance".to_string()),
            "USD",
        )
        .unwrap();
        assert_ne!(base, other);

        // Absent vs present discount cause
        let other =
            OfferItem::with_discount(widget(), 3, Some(dec!(5)), None, "USD").unwrap();
        assert_ne!(base, other);

        // Different snapshot date
        let aged = ProductSnapshot {
            snapshot_date: Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
            ..widget()
        };
        let other = OfferItem::with_discount(
            aged,
            3,
            Some(dec!(5)),
            Some("promo".to_string()),
            "USD",
        )
        .unwrap();
        assert_ne!(base, other);
    }

    // -------------------------------------------------------------------------
    // Fuzzy equivalence (same_as)
    // -------------------------------------------------------------------------

    /// Builds an item whose total is exactly `total` (price = total, qty 1).
    fn item_with_total(total: Decimal, currency: &str) -> OfferItem {
        OfferItem::new(priced(total), 1, currency).unwrap()
    }

    #[test]
    fn test_same_as_within_tolerance() {
        // totals 100 vs 104, delta 5% of max ⇒ acceptable 5.2 > difference 4
        let a = item_with_total(dec!(100), "USD");

        // same_as compares product prices first, so drive b's total to 104
        // via a negative discount on the same 100-priced product
        let b = OfferItem::with_discount(priced(dec!(100)), 1, Some(dec!(-4)), None, "USD")
            .unwrap();
        assert_eq!(b.total_cost_value(), dec!(104));

        assert!(a.same_as(&b, dec!(5)));
        assert!(b.same_as(&a, dec!(5)));
    }

    #[test]
    fn test_same_as_rejects_exact_boundary() {
        // difference 4 == acceptable 4.0 ⇒ NOT same (strict inequality)
        let a = item_with_total(dec!(100), "USD");
        let b = OfferItem::with_discount(priced(dec!(100)), 1, Some(dec!(-4)), None, "USD")
            .unwrap();

        assert!(!a.same_as(&b, dec!(4)));
        assert!(!b.same_as(&a, dec!(4)));
    }

    #[test]
    fn test_same_as_zero_delta_rejects_even_identical_totals() {
        // acceptable 0 is not > difference 0 - strict inequality again
        let a = item_with_total(dec!(100), "USD");
        let b = item_with_total(dec!(100), "USD");

        assert!(!a.same_as(&b, dec!(0)));
        assert!(a.same_as(&b, dec!(1)));
    }

    #[test]
    fn test_same_as_tolerance_is_relative_to_larger_total() {
        // max 104: acceptable = 104 × 4% = 4.16 > 4 ⇒ same.
        // A min-relative (100 × 4% = 4.0) or average-relative formula would
        // reject this pair.
        let a = item_with_total(dec!(100), "USD");
        let b = OfferItem::with_discount(priced(dec!(100)), 1, Some(dec!(-4)), None, "USD")
            .unwrap();

        assert!(a.same_as(&b, dec!(4.16)));
    }

    #[test]
    fn test_same_as_ignores_discount_composition() {
        // Same product, same quantity, totals 100 vs 98 built differently:
        // one line has no discount, the other a caused discount
        let plain = OfferItem::new(priced(dec!(100)), 1, "USD").unwrap();
        let discounted = OfferItem::with_discount(
            priced(dec!(100)),
            1,
            Some(dec!(2)),
            Some("promo".to_string()),
            "USD",
        )
        .unwrap();

        assert_ne!(plain, discounted);
        assert!(plain.same_as(&discounted, dec!(5)));
    }

    #[test]
    fn test_same_as_requires_exact_product_match() {
        let base = OfferItem::new(widget(), 3, "USD").unwrap();

        let renamed = ProductSnapshot {
            name: Some("Widget v2".to_string()),
            ..widget()
        };
        let other = OfferItem::new(renamed, 3, "USD").unwrap();
        assert!(!base.same_as(&other, dec!(50)));

        let rebadged = ProductSnapshot {
            id: Some("PROD-2".to_string()),
            ..widget()
        };
        let other = OfferItem::new(rebadged, 3, "USD").unwrap();
        assert!(!base.same_as(&other, dec!(50)));

        let reclassified = ProductSnapshot {
            kind: Some("FOOD".to_string()),
            ..widget()
        };
        let other = OfferItem::new(reclassified, 3, "USD").unwrap();
        assert!(!base.same_as(&other, dec!(50)));
    }

    #[test]
    fn test_same_as_rejects_quantity_mismatch_regardless_of_totals() {
        let a = OfferItem::new(priced(dec!(10)), 10, "USD").unwrap();
        let b = OfferItem::with_discount(priced(dec!(10)), 9, Some(dec!(-10)), None, "USD")
            .unwrap();

        // Totals are both 100, but quantities differ
        assert_eq!(a.total_cost_value(), b.total_cost_value());
        assert!(!a.same_as(&b, dec!(50)));
    }

    #[test]
    fn test_same_as_one_sided_absence_is_a_mismatch() {
        let named = OfferItem::new(widget(), 3, "USD").unwrap();

        let nameless = ProductSnapshot {
            name: None,
            ..widget()
        };
        let anonymous = OfferItem::new(nameless.clone(), 3, "USD").unwrap();

        assert!(!named.same_as(&anonymous, dec!(50)));
        assert!(!anonymous.same_as(&named, dec!(50)));

        // Absent-vs-absent is a match, not a mismatch
        let also_anonymous = OfferItem::new(nameless, 3, "USD").unwrap();
        assert!(anonymous.same_as(&also_anonymous, dec!(1)));
    }

    #[test]
    fn test_same_as_does_not_compare_currencies() {
        // Documented gap: totals in different currencies are compared as
        // bare magnitudes
        let usd = item_with_total(dec!(100), "USD");
        let eur = item_with_total(dec!(100), "EUR");

        assert!(usd.same_as(&eur, dec!(1)));
    }
}
