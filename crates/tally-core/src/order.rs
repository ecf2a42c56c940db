//! # Order Module
//!
//! A customer's order: an append-only sequence of line items with cached,
//! always-consistent totals.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order State Operations                             │
//! │                                                                         │
//! │  Caller Action            Order Method            State Change          │
//! │  ─────────────            ────────────            ────────────          │
//! │                                                                         │
//! │  Add product ────────────► add_item() ──────────► items.push(product)  │
//! │                                 │                                       │
//! │                                 └────────────────► recalculate totals   │
//! │                                                                         │
//! │  Read totals ────────────► total_price() ───────► (read only)          │
//! │                            discounted_price()                           │
//! │                                                                         │
//! │  Render receipt ─────────► OrderSummary::from ──► (read only)          │
//! │                                                                         │
//! │  There is no removal, update, or clear: the item sequence only grows.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items keep insertion order; duplicates are separate line items
//! - After every `add_item`, `total == Σ item prices` and
//!   `discounted == total − round(total × rate)`
//! - `discounted <= total` for any rate in [0%, 100%]

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::money::Money;
use crate::types::{Customer, Product};

/// A single customer's order.
///
/// Owns its customer and its items. The two cached totals are private and
/// recomputed inside every mutation, so readers always observe values
/// consistent with the current item sequence.
///
/// ## Concurrency
/// An `Order` is plain mutable state with no internal locking; it is meant
/// to be owned by exactly one logical operation at a time. A service holding
/// many orders across threads must wrap each one (`Arc<Mutex<_>>`) at the
/// application layer, outside this type.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// The customer this order belongs to.
    customer: Customer,

    /// Line items in insertion order. Duplicates allowed, never merged.
    items: Vec<Product>,

    /// Cached sum of item prices, in cents.
    total_cents: i64,

    /// Cached discounted total, in cents.
    discounted_cents: i64,

    /// When the order was opened.
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order for a customer.
    ///
    /// Both totals start at zero, which is also what they recompute to for
    /// an empty item sequence.
    pub fn new(customer: Customer) -> Self {
        Order {
            customer,
            items: Vec::new(),
            total_cents: 0,
            discounted_cents: 0,
            created_at: Utc::now(),
        }
    }

    /// Appends a product to the order and refreshes both totals.
    ///
    /// ## Behavior
    /// - The product is always accepted; the sequence is unbounded
    /// - Adding the same product twice produces two line items
    /// - Both cached totals are consistent before this returns
    ///
    /// ## User Workflow
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  add_item(Product("Mouse", $50.00))                                 │
    /// │       │                                                             │
    /// │       ▼                                                             │
    /// │  items: [Laptop $1000.00, Mouse $50.00]                             │
    /// │       │                                                             │
    /// │       ▼                                                             │
    /// │  total      = $1050.00   (re-summed over all items)                 │
    /// │  discounted = $840.00    (20% VIP rate applied to the new total)    │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn add_item(&mut self, product: Product) {
        self.items.push(product);
        self.recalculate();
    }

    /// Recomputes both cached totals from the item sequence.
    ///
    /// Deliberately a full re-sum rather than an incremental `+=`: the cost
    /// is O(n) per add, and in exchange the cached values can never drift
    /// from the items they are derived from.
    fn recalculate(&mut self) {
        let total: Money = self.items.iter().map(Product::price).sum();
        self.total_cents = total.cents();
        self.discounted_cents = total.apply_discount(self.customer.discount()).cents();
    }

    /// Returns the customer this order belongs to.
    #[inline]
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Returns the line items in insertion order.
    #[inline]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Returns the number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the order has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the sum of all line-item prices, before discount.
    #[inline]
    pub const fn total_price(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the total after the customer's tier discount.
    #[inline]
    pub const fn discounted_price(&self) -> Money {
        Money::from_cents(self.discounted_cents)
    }

    /// Returns when the order was opened.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
