//! # Receipt Module
//!
//! Presentation values for an order: the four-fact summary, the printed
//! receipt, and the invoice.
//!
//! Nothing here writes to stdout. Rendering is a pure step that turns an
//! [`Order`] into a value; the caller decides whether to print, log, or
//! serialize it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Presentation Pipeline                             │
//! │                                                                         │
//! │  Order ──► OrderSummary ──┬──► Display        → terminal receipt       │
//! │            (four facts)   ├──► Invoice        → printed invoice        │
//! │                           └──► serde_json     → machine output         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::order::Order;
use crate::types::Product;

// =============================================================================
// Order Summary
// =============================================================================

/// The four facts a rendered order surfaces: who bought, what they bought,
/// what it costs, and what it costs after the tier discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Customer display name.
    pub customer_name: String,

    /// Item names in insertion order.
    pub items: Vec<String>,

    /// Pre-discount total in cents.
    pub total_cents: i64,

    /// Post-discount total in cents.
    pub discounted_cents: i64,
}

impl OrderSummary {
    /// Returns the pre-discount total as Money.
    #[inline]
    pub const fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the discounted total as Money.
    #[inline]
    pub const fn discounted(&self) -> Money {
        Money::from_cents(self.discounted_cents)
    }

    /// Item names comma-joined in insertion order.
    ///
    /// Empty string for an order with no items.
    pub fn item_line(&self) -> String {
        self.items.join(", ")
    }
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        OrderSummary {
            customer_name: order.customer().name.clone(),
            items: order
                .items()
                .iter()
                .map(Product::name)
                .map(str::to_string)
                .collect(),
            total_cents: order.total_price().cents(),
            discounted_cents: order.discounted_price().cents(),
        }
    }
}

/// The terminal receipt.
///
/// ```text
/// Customer: John Doe
/// Items: Laptop, Mouse, Keyboard
/// Total Price: $1130.00
/// Discounted Price: $904.00
/// ```
impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer: {}", self.customer_name)?;
        writeln!(f, "Items: {}", self.item_line())?;
        writeln!(f, "Total Price: {}", self.total())?;
        write!(f, "Discounted Price: {}", self.discounted())
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A printable invoice for a summarized order.
///
/// Same four facts as the receipt, in invoice order and wording, closed by a
/// thank-you line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Invoice {
    summary: OrderSummary,
}

impl Invoice {
    /// Returns the underlying summary.
    #[inline]
    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }
}

impl From<OrderSummary> for Invoice {
    fn from(summary: OrderSummary) -> Self {
        Invoice { summary }
    }
}

impl From<&Order> for Invoice {
    fn from(order: &Order) -> Self {
        Invoice {
            summary: OrderSummary::from(order),
        }
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer: {}", self.summary.customer_name)?;
        writeln!(f, "Total: {}", self.summary.total())?;
        writeln!(f, "Discounted Total: {}", self.summary.discounted())?;
        writeln!(f, "Items: {}", self.summary.item_line())?;
        write!(f, "Thank you for shopping with us!")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Customer, CustomerTier};

    fn demo_order() -> Order {
        let mut order = Order::new(Customer::new("John Doe", CustomerTier::Vip));
        order.add_item(Product::new("Laptop", Money::from_cents(100000)).unwrap());
        order.add_item(Product::new("Mouse", Money::from_cents(5000)).unwrap());
        order.add_item(Product::new("Keyboard", Money::from_cents(8000)).unwrap());
        order
    }

    #[test]
    fn test_summary_captures_order() {
        let order = demo_order();
        let summary = OrderSummary::from(&order);

        assert_eq!(summary.customer_name, "John Doe");
        assert_eq!(summary.items, ["Laptop", "Mouse", "Keyboard"]);
        assert_eq!(summary.total(), order.total_price());
        assert_eq!(summary.discounted(), order.discounted_price());
    }

    #[test]
    fn test_item_line() {
        let summary = OrderSummary::from(&demo_order());
        assert_eq!(summary.item_line(), "Laptop, Mouse, Keyboard");
    }

    #[test]
    fn test_item_line_empty_order() {
        let order = Order::new(Customer::new("Nobody", CustomerTier::Regular));
        let summary = OrderSummary::from(&order);
        assert_eq!(summary.item_line(), "");
    }

    #[test]
    fn test_receipt_rendering() {
        let receipt = OrderSummary::from(&demo_order()).to_string();
        assert_eq!(
            receipt,
            "Customer: John Doe\n\
             Items: Laptop, Mouse, Keyboard\n\
             Total Price: $1130.00\n\
             Discounted Price: $904.00"
        );
    }

    #[test]
    fn test_receipt_rendering_empty_order() {
        let order = Order::new(Customer::new("Nobody", CustomerTier::Regular));
        let receipt = OrderSummary::from(&order).to_string();
        assert_eq!(
            receipt,
            "Customer: Nobody\n\
             Items: \n\
             Total Price: $0.00\n\
             Discounted Price: $0.00"
        );
    }

    #[test]
    fn test_invoice_rendering() {
        let invoice = Invoice::from(&demo_order()).to_string();
        assert_eq!(
            invoice,
            "Customer: John Doe\n\
             Total: $1130.00\n\
             Discounted Total: $904.00\n\
             Items: Laptop, Mouse, Keyboard\n\
             Thank you for shopping with us!"
        );
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = OrderSummary::from(&demo_order());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["customerName"], "John Doe");
        assert_eq!(json["items"][0], "Laptop");
        assert_eq!(json["totalCents"], 113000);
        assert_eq!(json["discountedCents"], 90400);
    }
}
