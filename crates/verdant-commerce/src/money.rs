//! Money type for representing monetary values.
//!
//! Amounts are stored in the smallest unit of the currency (paise for INR)
//! so that the pricing invariants hold exactly. All arithmetic is checked;
//! there are no panicking operators.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Supported currencies. The storefront trades in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are non-negative integers in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (paise for INR).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a rupee amount from paise.
    ///
    /// ```
    /// use verdant_commerce::money::Money;
    /// let price = Money::inr(149_900);
    /// assert_eq!(price.display(), "₹1,499.00");
    /// ```
    pub fn inr(paise: i64) -> Self {
        Self::new(paise, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Add another Money value.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` when the currencies differ and `Overflow`
    /// when the sum does not fit.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.check_currency(other)?;
        let amount = self
            .amount_minor
            .checked_add(other.amount_minor)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` when the currencies differ and `Overflow`
    /// when the difference does not fit.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, CommerceError> {
        self.check_currency(other)?;
        let amount = self
            .amount_minor
            .checked_sub(other.amount_minor)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar quantity.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when the product does not fit.
    pub fn try_multiply(&self, factor: i64) -> Result<Money, CommerceError> {
        let amount = self
            .amount_minor
            .checked_mul(factor)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Calculate a whole-number percentage of this amount, rounding half up
    /// on the minor unit. Amounts are assumed non-negative.
    ///
    /// ```
    /// use verdant_commerce::money::Money;
    /// // GST at 18% of ₹5,297.00 is exactly ₹953.46.
    /// assert_eq!(Money::inr(529_700).percent(18).unwrap(), Money::inr(95_346));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when the intermediate product does not fit.
    pub fn percent(&self, percent: i64) -> Result<Money, CommerceError> {
        let scaled = self
            .amount_minor
            .checked_mul(percent)
            .and_then(|v| v.checked_add(50))
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(scaled / 100, self.currency))
    }

    /// Sum an iterator of Money values in the given currency.
    ///
    /// # Errors
    ///
    /// Returns the first arithmetic or currency error encountered.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format as a display string with symbol (e.g., "₹1,23,456.78").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the amount without symbol, using Indian digit grouping for
    /// rupees (1,23,456.78) and western grouping otherwise.
    pub fn display_amount(&self) -> String {
        let negative = self.amount_minor < 0;
        let abs = self.amount_minor.unsigned_abs();
        let units = abs / 100;
        let fraction = abs % 100;
        let grouped = match self.currency {
            Currency::INR => group_indian(units),
            _ => group_western(units),
        };
        if negative {
            format!("-{}.{:02}", grouped, fraction)
        } else {
            format!("{}.{:02}", grouped, fraction)
        }
    }

    fn check_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            })
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group digits Indian style: the last three, then pairs (1,23,456).
fn group_indian(mut units: u64) -> String {
    let tail = units % 1000;
    units /= 1000;
    if units == 0 {
        return tail.to_string();
    }
    let mut pairs = Vec::new();
    while units > 0 {
        pairs.push(units % 100);
        units /= 100;
    }
    let mut out = String::new();
    // Highest pair keeps its natural width; the rest are zero-padded.
    for (i, pair) in pairs.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&pair.to_string());
        } else {
            out.push_str(&format!(",{:02}", pair));
        }
    }
    out.push_str(&format!(",{:03}", tail));
    out
}

/// Group digits western style in threes (1,234,567).
fn group_western(units: u64) -> String {
    let digits = units.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_paise() {
        let m = Money::inr(4999);
        assert_eq!(m.amount_minor, 4999);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_addition() {
        let a = Money::inr(1000);
        let b = Money::inr(500);
        assert_eq!(a.try_add(&b).unwrap().amount_minor, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::inr(1000);
        let b = Money::inr(300);
        assert_eq!(a.try_subtract(&b).unwrap().amount_minor, 700);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::inr(149_900);
        assert_eq!(m.try_multiply(2).unwrap().amount_minor, 299_800);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let inr = Money::inr(1000);
        let usd = Money::new(1000, Currency::USD);
        assert!(matches!(
            inr.try_add(&usd),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_money_overflow() {
        let m = Money::inr(i64::MAX);
        assert_eq!(m.try_add(&Money::inr(1)), Err(CommerceError::Overflow));
        assert_eq!(m.try_multiply(2), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_percent_exact() {
        // 18% of ₹300.00 is exactly ₹54.00.
        assert_eq!(Money::inr(30_000).percent(18).unwrap(), Money::inr(5_400));
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 18% of ₹300.01 is ₹54.0018, which rounds to ₹54.00.
        assert_eq!(Money::inr(30_001).percent(18).unwrap(), Money::inr(5_400));
        // 18% of ₹300.25 is ₹54.045, which rounds up to ₹54.05.
        assert_eq!(Money::inr(30_025).percent(18).unwrap(), Money::inr(5_405));
    }

    #[test]
    fn test_try_sum() {
        let amounts = [Money::inr(100), Money::inr(200), Money::inr(300)];
        let total = Money::try_sum(amounts.iter(), Currency::INR).unwrap();
        assert_eq!(total, Money::inr(600));
    }

    #[test]
    fn test_try_sum_empty_is_zero() {
        let total = Money::try_sum([].iter(), Currency::INR).unwrap();
        assert_eq!(total, Money::zero(Currency::INR));
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Money::inr(12_34_56_78).display(), "\u{20b9}1,23,456.78");
        assert_eq!(Money::inr(149_900).display(), "\u{20b9}1,499.00");
        assert_eq!(Money::inr(5_000).display(), "\u{20b9}50.00");
        assert_eq!(Money::inr(0).display(), "\u{20b9}0.00");
    }

    #[test]
    fn test_display_western_grouping() {
        let m = Money::new(123_456_789, Currency::USD);
        assert_eq!(m.display(), "$1,234,567.89");
    }
}
