//! Prices and their display form.
//!
//! Catalog prices arrive as decimal amounts but are held as integer minor
//! units so that the strikethrough price and the sale price always format
//! identically.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CardError;

/// Currencies the storefront sells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
    JPY,
}

/// Code, symbol and minor-unit digits, indexed by `Currency as usize`.
const CURRENCY_TABLE: [(Currency, &str, &str, u32); 5] = [
    (Currency::USD, "USD", "$", 2),
    (Currency::CAD, "CAD", "CA$", 2),
    (Currency::EUR, "EUR", "\u{20ac}", 2),
    (Currency::GBP, "GBP", "\u{00a3}", 2),
    (Currency::JPY, "JPY", "\u{00a5}", 0),
];

impl Currency {
    fn entry(&self) -> &'static (Currency, &'static str, &'static str, u32) {
        &CURRENCY_TABLE[*self as usize]
    }

    /// ISO code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.entry().1
    }

    /// Symbol placed before the amount.
    pub fn symbol(&self) -> &'static str {
        self.entry().2
    }

    /// Number of minor-unit digits.
    pub fn decimal_places(&self) -> u32 {
        self.entry().3
    }

    /// Parse a currency code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        CURRENCY_TABLE
            .iter()
            .find(|(_, c, _, _)| c.eq_ignore_ascii_case(code))
            .map(|(currency, _, _, _)| *currency)
    }
}

impl FromStr for Currency {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| CardError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A price in minor units of its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in minor units (cents for USD).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Build from a decimal catalog amount, rounding to the nearest minor unit.
    ///
    /// ```
    /// use shoe_card::money::{Currency, Money};
    /// let sale = Money::from_decimal(119.99, Currency::USD);
    /// assert_eq!(sale.amount_cents, 11999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Back to a decimal amount.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Display string with symbol, e.g. "$119.99".
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a price for the card.
pub fn format_price(price: &Money) -> String {
    price.display()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(119.99, Currency::USD).amount_cents, 11999);
        assert_eq!(Money::from_decimal(165.0, Currency::USD).amount_cents, 16500);
        assert_eq!(Money::from_decimal(0.005, Currency::USD).amount_cents, 1);
        assert_eq!(Money::from_decimal(12000.0, Currency::JPY).amount_cents, 12000);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&Money::new(16500, Currency::USD)), "$165.00");
        assert_eq!(format_price(&Money::new(11999, Currency::USD)), "$119.99");
        assert_eq!(format_price(&Money::new(12000, Currency::JPY)), "\u{00a5}12000");
        assert_eq!(format_price(&Money::zero(Currency::GBP)), "\u{00a3}0.00");
    }

    #[test]
    fn test_zero_is_a_valid_price() {
        let free = Money::zero(Currency::USD);
        assert!(free.is_zero());
        assert_eq!(free.to_string(), "$0.00");
    }

    #[test]
    fn test_currency_table_order() {
        for (currency, code, _, _) in CURRENCY_TABLE {
            assert_eq!(currency.code(), code);
            assert_eq!(Currency::from_code(code), Some(currency));
        }
        assert_eq!(Currency::CAD.symbol(), "CA$");
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(" eur ".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!(Currency::from_code("AUD"), None);
        assert!(matches!(
            "XYZ".parse::<Currency>(),
            Err(CardError::UnknownCurrency(code)) if code == "XYZ"
        ));
    }
}
