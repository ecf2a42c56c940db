//! # Tally CLI
//!
//! Terminal order entry: build an order for one customer and print the
//! receipt (and optionally the invoice, or JSON for machines).
//!
//! ## Usage
//! ```bash
//! # Enter the demo order (John Doe, VIP, Laptop/Mouse/Keyboard)
//! cargo run -p tally-cli --bin tally
//!
//! # A custom order
//! cargo run -p tally-cli --bin tally -- \
//!     --customer "Ann Smith" --tier regular --item Book=20
//!
//! # With an invoice, or as JSON
//! cargo run -p tally-cli --bin tally -- --invoice
//! cargo run -p tally-cli --bin tally -- --json
//! ```
//!
//! Receipts go to stdout; logs go to stderr (`RUST_LOG` controls verbosity).

use std::env;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tally_core::validation::parse_price;
use tally_core::{
    CoreError, CoreResult, Customer, CustomerTier, Invoice, Order, OrderSummary, Product,
};

/// The demo order entered when no `--item` flags are given.
const DEMO_ITEMS: &[&str] = &["Laptop=1000", "Mouse=50", "Keyboard=80"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut customer_name = String::from("John Doe");
    let mut tier = CustomerTier::Vip;
    let mut item_specs: Vec<String> = Vec::new();
    let mut want_invoice = false;
    let mut want_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--customer" | "-c" => {
                if i + 1 < args.len() {
                    customer_name = args[i + 1].clone();
                    i += 1;
                }
            }
            "--tier" | "-t" => {
                if i + 1 < args.len() {
                    tier = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--item" | "-i" => {
                if i + 1 < args.len() {
                    item_specs.push(args[i + 1].clone());
                    i += 1;
                }
            }
            "--invoice" => want_invoice = true,
            "--json" => want_json = true,
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    if item_specs.is_empty() {
        item_specs = DEMO_ITEMS.iter().map(|s| s.to_string()).collect();
        info!("No items given, entering the demo order");
    }

    info!(customer = %customer_name, tier = %tier, "Processing order");

    let customer = Customer::new(customer_name, tier);
    let mut order = Order::new(customer);

    for spec in &item_specs {
        let product = parse_item(spec)?;
        debug!(name = %product.name(), price = %product.price(), "Adding item");
        order.add_item(product);
    }

    let summary = OrderSummary::from(&order);

    if want_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", summary);

    if want_invoice {
        info!("Generating invoice");
        println!();
        println!("{}", Invoice::from(summary));
    }

    Ok(())
}

/// Parses a `NAME=PRICE` item spec into a product.
///
/// The price is a decimal dollar amount ("1000", "10.99"); the name is free
/// text and may even be empty.
fn parse_item(spec: &str) -> CoreResult<Product> {
    let (name, price_text) = spec.rsplit_once('=').ok_or_else(|| CoreError::InvalidPrice {
        input: spec.to_string(),
        reason: "expected NAME=PRICE".to_string(),
    })?;

    Product::new(name, parse_price(price_text)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_cli=trace` - Show trace for this binary only
/// - Default: INFO level
///
/// Logs go to stderr so receipts on stdout stay pipeable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("Tally - terminal order entry");
    println!();
    println!("Usage: tally [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --customer <NAME>    Customer name (default: John Doe)");
    println!("  -t, --tier <TIER>        Customer tier: regular, premium, vip (default: vip)");
    println!("  -i, --item <NAME=PRICE>  Add a line item; repeatable (price in dollars)");
    println!("      --invoice            Also print an invoice after the receipt");
    println!("      --json               Print the order summary as JSON");
    println!("  -h, --help               Show this help message");
    println!();
    println!("With no --item flags a demo order is entered:");
    println!("  Laptop=1000 Mouse=50 Keyboard=80");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Money;

    #[test]
    fn test_parse_item() {
        let product = parse_item("Laptop=1000").unwrap();
        assert_eq!(product.name(), "Laptop");
        assert_eq!(product.price(), Money::from_cents(100000));
    }

    #[test]
    fn test_parse_item_decimal_price() {
        let product = parse_item("Coffee=4.50").unwrap();
        assert_eq!(product.price(), Money::from_cents(450));
    }

    #[test]
    fn test_parse_item_name_may_contain_equals() {
        // Only the LAST '=' splits name from price
        let product = parse_item("A=B Cable=9.99").unwrap();
        assert_eq!(product.name(), "A=B Cable");
        assert_eq!(product.price(), Money::from_cents(999));
    }

    #[test]
    fn test_parse_item_missing_price() {
        let err = parse_item("Laptop").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { .. }));
    }

    #[test]
    fn test_parse_item_negative_price() {
        let err = parse_item("Laptop=-1").unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
    }

    #[test]
    fn test_demo_items_parse() {
        let mut order = Order::new(Customer::new("John Doe", CustomerTier::Vip));
        for spec in DEMO_ITEMS {
            order.add_item(parse_item(spec).unwrap());
        }

        assert_eq!(order.total_price(), Money::from_cents(113000));
        assert_eq!(order.discounted_price(), Money::from_cents(90400));
    }
}
