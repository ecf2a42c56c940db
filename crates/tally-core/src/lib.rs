//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains all pricing logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (terminal)                          │   │
//! │  │    parse flags ──► build order ──► print receipt/invoice        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │  receipt  │  │   │
//! │  │   │ Customer  │  │   Money   │  │   Order   │  │  Summary  │  │   │
//! │  │   │  Product  │  │ Discounts │  │  totals   │  │  Invoice  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PRINTING • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, CustomerTier, Product, DiscountRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - Order accumulation with cached derived totals
//! - [`receipt`] - Order summaries, receipts, and invoices as plain values
//! - [`error`] - Domain error types
//! - [`validation`] - Input guards and price-literal parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Printing, file system, and network access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Customer, CustomerTier, Money, Order, OrderSummary, Product};
//!
//! let customer = Customer::new("John Doe", CustomerTier::Vip);
//! let mut order = Order::new(customer);
//!
//! order.add_item(Product::new("Laptop", Money::from_cents(100000))?);
//! order.add_item(Product::new("Mouse", Money::from_cents(5000))?);
//! order.add_item(Product::new("Keyboard", Money::from_cents(8000))?);
//!
//! // $1130.00 total, 20% VIP discount → $904.00
//! assert_eq!(order.total_price(), Money::from_cents(113000));
//! assert_eq!(order.discounted_price(), Money::from_cents(90400));
//!
//! let receipt = OrderSummary::from(&order);
//! assert_eq!(receipt.item_line(), "Laptop, Mouse, Keyboard");
//! # Ok::<(), tally_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use order::Order;
pub use receipt::{Invoice, OrderSummary};
pub use types::{Customer, CustomerTier, DiscountRate, Product};
