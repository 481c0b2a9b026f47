//! # Error Types
//!
//! Domain-specific error types for quoteline-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain logic failures. They should be caught and
/// translated to user-friendly messages by outer layers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product snapshot carries no price, so a line total cannot be computed.
    ///
    /// ## When This Occurs
    /// - The catalog exported an incomplete snapshot
    /// - A product was captured before pricing was assigned
    ///
    /// Deliberately the ONLY construction failure: negative quantities,
    /// negative discounts and unknown currency codes are accepted as-is, and
    /// rejecting them is an upstream concern.
    #[error("Product {} has no price, cannot compute offer total", .product_id.as_deref().unwrap_or("<unidentified>"))]
    MissingProductPrice {
        /// Identifier of the offending product, when the snapshot has one.
        product_id: Option<String>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
