//! Currency amount formatting and parsing
//!
//! Formatted amounts look like `$1,234.56`: the currency symbol, the integer
//! part grouped by thousands, and exactly two fraction digits.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Render an amount as `<symbol><grouped integer>.<2 digits>`
///
/// An empty symbol yields the bare form used in export files. Negative
/// amounts put the sign before the symbol (`-$20.00`).
pub fn format_amount(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(amount.units().unsigned_abs()),
        amount.cents_part()
    )
}

/// Parse a formatted or raw amount into money
///
/// Strips the currency symbol and group separators, then reads what remains
/// as a non-negative decimal.
pub fn parse_amount(text: &str, symbol: &str) -> LedgerResult<Money> {
    let trimmed = text.trim();
    let without_symbol = if symbol.is_empty() {
        trimmed
    } else {
        trimmed.strip_prefix(symbol).unwrap_or(trimmed)
    };
    let digits: String = without_symbol.chars().filter(|c| *c != ',').collect();

    Money::parse(&digits).map_err(|e| LedgerError::Parse(format!("'{}': {}", text.trim(), e)))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Money::from_cents(123456), "$"), "$1,234.56");
        assert_eq!(format_amount(Money::from_cents(120050), "$"), "$1,200.50");
        assert_eq!(format_amount(Money::from_cents(5), "€"), "€0.05");
        assert_eq!(format_amount(Money::zero(), "$"), "$0.00");
        assert_eq!(
            format_amount(Money::from_cents(123456789012), "£"),
            "£1,234,567,890.12"
        );
        assert_eq!(format_amount(Money::from_cents(99999), ""), "999.99");
        assert_eq!(format_amount(Money::from_cents(100000), ""), "1,000.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_amount(Money::from_cents(-200000), "$"), "-$2,000.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56", "$").unwrap().cents(), 123456);
        assert_eq!(parse_amount("1,234.56", "$").unwrap().cents(), 123456);
        assert_eq!(parse_amount("1200.5", "$").unwrap().cents(), 120050);
        assert_eq!(parse_amount(" €10 ", "€").unwrap().cents(), 1000);
        assert_eq!(parse_amount("₹0.99", "₹").unwrap().cents(), 99);
    }

    #[test]
    fn test_parse_amount_rejects() {
        assert!(parse_amount("ten", "$").unwrap_err().is_parse());
        assert!(parse_amount("", "$").unwrap_err().is_parse());
        assert!(parse_amount("$", "$").unwrap_err().is_parse());
        assert!(parse_amount("-5", "$").unwrap_err().is_parse());
        // A different currency's symbol is not stripped
        assert!(parse_amount("€5.00", "$").is_err());
    }

    #[test]
    fn test_round_trip() {
        for cents in [0, 1, 99, 100, 999, 1000, 99999, 100000, 123456789, 1000000000] {
            for symbol in ["$", "€", "£", "¥", "₹", ""] {
                let amount = Money::from_cents(cents);
                let text = format_amount(amount, symbol);
                assert_eq!(parse_amount(&text, symbol).unwrap(), amount, "{}", text);
            }
        }
    }
}
