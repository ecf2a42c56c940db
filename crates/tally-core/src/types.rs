//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │     Product     │   │  CustomerTier   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name           │   │  Regular   5%   │       │
//! │  │  tier           │   │  price_cents    │   │  Premium  10%   │       │
//! │  │  discount() ────┼──►│                 │   │  Vip      20%   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │  DiscountRate   │   Derived, never stored: a customer's rate is     │
//! │  │  ─────────────  │   recomputed from the tier on every call, so it   │
//! │  │  bps (u32)      │   can never go stale.                             │
//! │  │  2000 = 20%     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::Money;
use crate::validation::validate_price_cents;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (the VIP rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Customer Tier
// =============================================================================

/// Customer classification determining the discount rate.
///
/// This is a closed set: there is no runtime extension, and every tier has a
/// fixed rate. Widening the set means adding a variant here and a match arm
/// in [`CustomerTier::discount`]; the compiler flags every site that needs
/// updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    /// Standard customers: 5% discount.
    Regular,
    /// Loyalty-program customers: 10% discount.
    Premium,
    /// Top-spend customers: 20% discount.
    Vip,
}

impl CustomerTier {
    /// Returns the discount rate for this tier.
    ///
    /// The tier → rate table:
    ///
    /// | Tier    | Rate |
    /// |---------|------|
    /// | Regular | 5%   |
    /// | Premium | 10%  |
    /// | Vip     | 20%  |
    ///
    /// The match is total, so a tier without a rate cannot exist. Rates are
    /// derived here on every call and never cached on the customer.
    #[inline]
    pub const fn discount(&self) -> DiscountRate {
        match self {
            CustomerTier::Regular => DiscountRate::from_bps(500),
            CustomerTier::Premium => DiscountRate::from_bps(1000),
            CustomerTier::Vip => DiscountRate::from_bps(2000),
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CustomerTier::Regular => "Regular",
            CustomerTier::Premium => "Premium",
            CustomerTier::Vip => "VIP",
        };
        f.write_str(label)
    }
}

/// Parses a tier from user-supplied text (CLI flags, config values).
///
/// Matching is case-insensitive. Anything outside the closed set fails with
/// [`CoreError::InvalidTier`] instead of silently defaulting to 0%.
impl FromStr for CustomerTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(CustomerTier::Regular),
            "premium" => Ok(CustomerTier::Premium),
            "vip" => Ok(CustomerTier::Vip),
            _ => Err(CoreError::InvalidTier {
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer placing an order.
///
/// Constructed once and never mutated. The discount is intentionally not a
/// field: it is recomputed from the tier on every access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Display name shown on receipts and invoices.
    pub name: String,

    /// Tier determining the discount rate.
    pub tier: CustomerTier,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(name: impl Into<String>, tier: CustomerTier) -> Self {
        Customer {
            name: name.into(),
            tier,
        }
    }

    /// Returns the discount rate for this customer's tier.
    #[inline]
    pub const fn discount(&self) -> DiscountRate {
        self.tier.discount()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be added to an order.
///
/// A plain value object: two products are equal when name and price are
/// equal, and an order may contain the same product more than once (each
/// occurrence is its own line item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown on receipts.
    name: String,

    /// Price in cents (smallest currency unit). Never negative.
    price_cents: i64,
}

impl Product {
    /// Creates a new product.
    ///
    /// ## Errors
    /// Fails with [`CoreError::InvalidAmount`] when the price is negative.
    /// Zero is allowed (free items).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::Product;
    ///
    /// let laptop = Product::new("Laptop", Money::from_cents(100000)).unwrap();
    /// assert_eq!(laptop.price().cents(), 100000);
    ///
    /// assert!(Product::new("Broken", Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> Result<Self, CoreError> {
        validate_price_cents(price.cents())?;
        Ok(Product {
            name: name.into(),
            price_cents: price.cents(),
        })
    }

    /// Returns the product name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price as a Money type.
    #[inline]
    pub const fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(2000);
        assert_eq!(rate.bps(), 2000);
        assert!((rate.percentage() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_discount_rate_from_percentage() {
        let rate = DiscountRate::from_percentage(8.25);
        assert_eq!(rate.bps(), 825);
    }

    #[test]
    fn test_tier_discount_table() {
        assert_eq!(CustomerTier::Regular.discount().bps(), 500); // 5%
        assert_eq!(CustomerTier::Premium.discount().bps(), 1000); // 10%
        assert_eq!(CustomerTier::Vip.discount().bps(), 2000); // 20%
    }

    #[test]
    fn test_tier_discount_is_stable() {
        let customer = Customer::new("Jane", CustomerTier::Premium);
        let first = customer.discount();
        for _ in 0..10 {
            assert_eq!(customer.discount(), first);
        }
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(CustomerTier::Regular.to_string(), "Regular");
        assert_eq!(CustomerTier::Premium.to_string(), "Premium");
        assert_eq!(CustomerTier::Vip.to_string(), "VIP");
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("vip".parse::<CustomerTier>().unwrap(), CustomerTier::Vip);
        assert_eq!(
            "Premium".parse::<CustomerTier>().unwrap(),
            CustomerTier::Premium
        );
        assert_eq!(
            "  REGULAR ".parse::<CustomerTier>().unwrap(),
            CustomerTier::Regular
        );
    }

    #[test]
    fn test_tier_parse_rejects_unknown() {
        let err = "gold".parse::<CustomerTier>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidTier { .. }));
        assert_eq!(err.to_string(), "Unknown customer tier: gold");
    }

    #[test]
    fn test_tier_serde_representation() {
        let json = serde_json::to_string(&CustomerTier::Vip).unwrap();
        assert_eq!(json, "\"vip\"");

        let tier: CustomerTier = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(tier, CustomerTier::Premium);
    }

    #[test]
    fn test_product_new() {
        let product = Product::new("Mouse", Money::from_cents(5000)).unwrap();
        assert_eq!(product.name(), "Mouse");
        assert_eq!(product.price(), Money::from_cents(5000));
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let err = Product::new("Refund?", Money::from_cents(-100)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { cents: -100 }));
    }

    #[test]
    fn test_product_zero_price_allowed() {
        let freebie = Product::new("Sticker", Money::zero()).unwrap();
        assert!(freebie.price().is_zero());
    }

    #[test]
    fn test_product_equality_by_fields() {
        let a = Product::new("Laptop", Money::from_cents(100000)).unwrap();
        let b = Product::new("Laptop", Money::from_cents(100000)).unwrap();
        assert_eq!(a, b);
    }
}
