//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  An offer total is built from chained operations:                      │
//! │    19.99 × 3 − 5.00 must be EXACTLY 54.97, not 54.970000000000006      │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal                                    │
//! │    Exact base-10 arithmetic end to end. Floats never enter the math.   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quoteline_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! // 3 units at 10.00, minus a 5.00 discount
//! let total = Money::new(dec!(10), "USD").multiply(3).subtract(dec!(5));
//!
//! assert_eq!(total.amount(), dec!(25));
//! assert_eq!(total.currency(), "USD");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// An exact decimal amount tagged with a currency code.
///
/// ## Design Decisions
/// - **Decimal amount**: exact base-10 arithmetic, no rounding drift across
///   chained operations
/// - **Opaque currency**: a short code string ("USD", "EUR", ...) that this
///   crate never validates or converts - currency semantics belong to callers
/// - **Immutable**: operations consume `self` and return a new value, so a
///   `Money` that has been shared can never change underneath a reader
///
/// `multiply`/`subtract` operate purely on the numeric component and do not
/// check currencies. Cross-currency rules live in a higher layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Creates a monetary value.
    ///
    /// Stores both fields verbatim: negative amounts and empty currency codes
    /// are accepted here (refunds and credits are legal amounts; input
    /// hygiene is the caller's job).
    ///
    /// ## Example
    /// ```rust
    /// use quoteline_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(10.99), "USD");
    /// assert_eq!(price.amount(), dec!(10.99));
    /// ```
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Money {
            amount,
            currency: currency.into(),
        }
    }

    /// Returns the decimal amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[inline]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Multiplies the amount by an integer quantity.
    ///
    /// The multiplier may be zero or negative; no domain check is applied.
    /// Consumes `self` and returns the scaled value, so calls chain:
    ///
    /// ## Example
    /// ```rust
    /// use quoteline_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let line = Money::new(dec!(2.99), "USD").multiply(3);
    /// assert_eq!(line.amount(), dec!(8.97));
    /// ```
    #[must_use]
    pub fn multiply(mut self, multiplier: i64) -> Self {
        self.amount *= Decimal::from(multiplier);
        self
    }

    /// Subtracts a decimal amount.
    ///
    /// Currency-agnostic: the subtrahend is a bare number, not a `Money`.
    ///
    /// ## Example
    /// ```rust
    /// use quoteline_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let after_discount = Money::new(dec!(8.97), "USD").subtract(dec!(1.00));
    /// assert_eq!(after_discount.amount(), dec!(7.97));
    /// ```
    #[must_use]
    pub fn subtract(mut self, subtrahend: Decimal) -> Self {
        self.amount -= subtrahend;
        self
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
