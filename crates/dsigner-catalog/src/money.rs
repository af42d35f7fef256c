//! Money type for catalog prices.
//!
//! Prices are whole currency units; the catalog never deals in fractions.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A price with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create an amount in rupees.
    pub const fn inr(amount: i64) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Format with symbol and grouping (e.g., "₹2,99,999").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the grouped amount without symbol (e.g., "2,99,999").
    ///
    /// Rupees use Indian grouping (last three digits, then pairs);
    /// other currencies group in threes.
    pub fn display_amount(&self) -> String {
        let digits = self.amount.unsigned_abs().to_string();
        let grouped = match self.currency {
            Currency::INR => group_indian(&digits),
            Currency::USD => group_thousands(&digits),
        };
        if self.amount < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(",")
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(Money::inr(299999).display(), "\u{20b9}2,99,999");
        assert_eq!(Money::inr(4999).display(), "\u{20b9}4,999");
        assert_eq!(Money::inr(109999).display(), "\u{20b9}1,09,999");
        assert_eq!(Money::inr(12345678).display_amount(), "1,23,45,678");
        assert_eq!(Money::inr(999).display_amount(), "999");
        assert_eq!(Money::inr(0).display_amount(), "0");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(Money::new(1234567, Currency::USD).display(), "$1,234,567");
        assert_eq!(Money::new(100, Currency::USD).display(), "$100");
    }

    #[test]
    fn test_negative() {
        assert_eq!(Money::inr(-4999).display_amount(), "-4,999");
    }

    #[test]
    fn test_ordering_requires_same_currency() {
        assert!(Money::inr(4999) < Money::inr(5499));
        assert_eq!(
            Money::inr(1).partial_cmp(&Money::new(1, Currency::USD)),
            None
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
