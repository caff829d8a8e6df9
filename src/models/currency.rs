//! Currency model
//!
//! The ledger works in exactly one currency at a time, chosen from a fixed set.
//! There is no conversion between currencies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Dollar,
    #[serde(rename = "EUR")]
    Euro,
    #[serde(rename = "GBP")]
    Pound,
    #[serde(rename = "JPY")]
    Yen,
    #[serde(rename = "INR")]
    Rupee,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Dollar,
        Currency::Euro,
        Currency::Pound,
        Currency::Yen,
        Currency::Rupee,
    ];

    /// The symbol written in front of formatted amounts
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Dollar => "$",
            Self::Euro => "€",
            Self::Pound => "£",
            Self::Yen => "¥",
            Self::Rupee => "₹",
        }
    }

    /// ISO 4217 code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Dollar => "USD",
            Self::Euro => "EUR",
            Self::Pound => "GBP",
            Self::Yen => "JPY",
            Self::Rupee => "INR",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dollar => "Dollar",
            Self::Euro => "Euro",
            Self::Pound => "Pound",
            Self::Yen => "Yen",
            Self::Rupee => "Rupee",
        }
    }

    /// Look up a currency by symbol, code or name (case-insensitive)
    pub fn lookup(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|c| {
            input == c.symbol()
                || input.eq_ignore_ascii_case(c.code())
                || input.eq_ignore_ascii_case(c.name())
        })
    }

    /// Resolve user input to a currency, falling back to the default
    pub fn from_input(input: &str) -> Self {
        Self::lookup(input).unwrap_or_default()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.symbol())
    }
}
