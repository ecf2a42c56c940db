//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                          │
//! │  └── CoreError        - pricing-domain failures                         │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                  │
//! │  └── Box<dyn Error>   - at main(); CoreError bubbles up via `?`         │
//! │                                                                         │
//! │  Flow: Product::new / parse_price / tier parse → CoreError → caller     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending value)
//! 3. Errors are enum variants, never String
//!
//! Note how small this enum is: adding items to an order cannot fail, and
//! reading totals cannot fail. Every failure mode lives at the input
//! boundary.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing-domain errors.
///
/// These all arise from untrusted input (CLI flags, deserialized values).
/// Once a `Customer`, `Product`, or `Order` exists, every operation on it is
/// total.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary amount that the domain forbids.
    ///
    /// ## When This Occurs
    /// - Constructing a product with a negative price
    /// - A price literal that parses to a negative amount
    #[error("Invalid amount: {cents} cents is negative")]
    InvalidAmount { cents: i64 },

    /// A tier value outside the closed set.
    ///
    /// ## When This Occurs
    /// - `--tier` flag with a name that is not regular/premium/vip
    ///
    /// The closed enum makes this unreachable for constructed customers;
    /// only text input can produce it.
    #[error("Unknown customer tier: {value}")]
    InvalidTier { value: String },

    /// A price literal that is not a valid decimal amount.
    ///
    /// ## When This Occurs
    /// - `--item Laptop=abc` (not a number)
    /// - `--item Oil=1.999` (more than two decimal places)
    #[error("Invalid price '{input}': {reason}")]
    InvalidPrice { input: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
