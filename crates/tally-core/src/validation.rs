//! # Validation Module
//!
//! Input validation utilities for Tally.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Text input (CLI flags)                                       │
//! │  └── parse_price: decimal literal → cents, format checked              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (Product::new)                                  │
//! │  └── validate_price_cents: negative amounts rejected                   │
//! │                                                                         │
//! │  Past construction nothing validates: orders accept any sequence of    │
//! │  well-formed products, and reads cannot fail.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Customer and item names are deliberately NOT validated: they are free
//! text, and an empty name is legal input.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());  // $10.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> CoreResult<()> {
    if cents < 0 {
        return Err(CoreError::InvalidAmount { cents });
    }

    Ok(())
}

// =============================================================================
// Price Literal Parsing
// =============================================================================

/// Parses a decimal price literal into Money.
///
/// Accepts whole amounts ("1000"), one decimal place ("50.5" = $50.50), or
/// two ("10.99"). Everything is integer math; the literal never touches a
/// float.
///
/// ## Rules
/// - Digits with an optional single `.` separator
/// - At most two fraction digits
/// - Negative amounts are rejected with `InvalidAmount`
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::validation::parse_price;
///
/// assert_eq!(parse_price("1000").unwrap(), Money::from_cents(100000));
/// assert_eq!(parse_price("10.99").unwrap(), Money::from_cents(1099));
/// assert_eq!(parse_price("50.5").unwrap(), Money::from_cents(5050));
/// assert!(parse_price("1.999").is_err());
/// assert!(parse_price("free").is_err());
/// ```
pub fn parse_price(input: &str) -> CoreResult<Money> {
    let text = input.trim();

    let invalid = |reason: &str| CoreError::InvalidPrice {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (major_text, minor_text) = match unsigned.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (unsigned, ""),
    };

    if major_text.is_empty() || !major_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a decimal amount like 10.99"));
    }

    let minor = match minor_text.len() {
        0 if unsigned.contains('.') => {
            return Err(invalid("expected digits after the decimal point"))
        }
        0 => 0,
        1 | 2 if minor_text.bytes().all(|b| b.is_ascii_digit()) => {
            let digits: i64 = minor_text
                .parse()
                .map_err(|_| invalid("expected a decimal amount like 10.99"))?;
            // "5" after the point means 50 cents, not 5
            if minor_text.len() == 1 {
                digits * 10
            } else {
                digits
            }
        }
        1 | 2 => return Err(invalid("expected a decimal amount like 10.99")),
        _ => return Err(invalid("at most two decimal places allowed")),
    };

    let major: i64 = major_text
        .parse()
        .map_err(|_| invalid("amount is too large"))?;

    let cents = major
        .checked_mul(100)
        .and_then(|c| c.checked_add(minor))
        .ok_or_else(|| invalid("amount is too large"))?;

    let cents = if negative { -cents } else { cents };
    validate_price_cents(cents)?;

    Ok(Money::from_cents(cents))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_parse_price_whole() {
        assert_eq!(parse_price("1000").unwrap(), Money::from_cents(100000));
        assert_eq!(parse_price("0").unwrap(), Money::zero());
        assert_eq!(parse_price(" 80 ").unwrap(), Money::from_cents(8000));
    }

    #[test]
    fn test_parse_price_decimals() {
        assert_eq!(parse_price("10.99").unwrap(), Money::from_cents(1099));
        assert_eq!(parse_price("50.5").unwrap(), Money::from_cents(5050));
        assert_eq!(parse_price("0.05").unwrap(), Money::from_cents(5));
    }

    #[test]
    fn test_parse_price_rejects_malformed() {
        for bad in ["", "free", "1.999", "10.", ".99", "1,000", "1.9a", "--5"] {
            let err = parse_price(bad).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidPrice { .. }),
                "input {:?} gave {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_parse_price_rejects_negative() {
        let err = parse_price("-5").unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { cents: -500 }));
    }

    #[test]
    fn test_parse_price_rejects_overflow() {
        let err = parse_price("99999999999999999999").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { .. }));
    }
}
