//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are plain decimal amounts in a single currency. Nothing is
//! rounded except where a caller asks for it (e.g. checkout tax).

use std::iter::Sum;
use std::ops::{Add, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// A zero USD price.
    #[must_use]
    pub const fn zero() -> Self {
        Self::usd(Decimal::ZERO)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format with two decimals (e.g., "$79.00").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }

    /// Format without decimals when the amount is whole (e.g., "$79"),
    /// otherwise with two decimals.
    #[must_use]
    pub fn display_compact(&self) -> String {
        if self.amount.fract().is_zero() {
            format!("{}{}", self.currency_code.symbol(), self.amount.trunc())
        } else {
            self.display()
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.currency_code, rhs.currency_code);
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.currency_code, rhs.currency_code);
        Self::new(self.amount - rhs.amount, self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    SAR,
    AED,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::SAR => "SAR ",
            Self::AED => "AED ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::usd(Decimal::new(79, 0)).display(), "$79.00");
        assert_eq!(Price::usd(Decimal::new(1299, 2)).display(), "$12.99");
    }

    #[test]
    fn test_display_compact() {
        assert_eq!(Price::usd(Decimal::new(79, 0)).display_compact(), "$79");
        assert_eq!(Price::usd(Decimal::new(7900, 2)).display_compact(), "$79");
        assert_eq!(
            Price::usd(Decimal::new(1250, 2)).display_compact(),
            "$12.50"
        );
    }

    #[test]
    fn test_times_and_sum() {
        let unit = Price::usd(Decimal::new(79, 0));
        let lines = [unit.times(2), Price::usd(Decimal::new(149, 0))];
        let total: Price = lines.into_iter().sum();
        assert_eq!(total, Price::usd(Decimal::new(307, 0)));
    }

    #[test]
    fn test_sub_is_direct() {
        let original = Price::usd(Decimal::new(129, 0));
        let price = Price::usd(Decimal::new(79, 0));
        assert_eq!((original - price).display_compact(), "$50");
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Price = std::iter::empty().sum();
        assert!(total.is_zero());
    }
}
