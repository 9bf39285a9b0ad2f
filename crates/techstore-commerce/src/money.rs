//! Money and percentage types.
//!
//! Amounts are integers in the smallest currency unit (kopecks for RUB), so
//! catalog discounts like 15% off 54 990 ₽ stay exact. Percent math rounds
//! half-up to the smallest unit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Number of smallest units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A whole-number percentage in `0..=100`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const HUNDRED: Percent = Percent(100);

    /// Create a percentage, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self, CommerceError> {
        if value > 100 {
            return Err(CommerceError::InvalidPercent(value));
        }
        Ok(Self(value))
    }

    /// Create a percentage, clamping values above 100.
    pub const fn saturating(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    pub const fn get(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The share that remains after taking this percentage off.
    pub fn complement(&self) -> Percent {
        Percent(100 - self.0)
    }
}

impl TryFrom<u8> for Percent {
    type Error = CommerceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Percent::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> u8 {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// How amounts are rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// Inserted between groups of three integer digits.
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
    /// Separates the integer part from the fraction.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// Render the symbol after the amount (`1 000 ₽`) instead of before (`$1,000`).
    #[serde(default = "default_symbol_after")]
    pub symbol_after: bool,
}

fn default_group_separator() -> String {
    "\u{a0}".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_symbol_after() -> bool {
    true
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
            decimal_separator: default_decimal_separator(),
            symbol_after: default_symbol_after(),
        }
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., kopecks).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from smallest units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units (rubles, dollars).
    ///
    /// ```
    /// use techstore_commerce::money::{Currency, Money};
    /// let price = Money::from_major(89_990, Currency::RUB);
    /// assert_eq!(price.amount_minor, 8_999_000);
    /// ```
    pub fn from_major(units: i64, currency: Currency) -> Self {
        Self::new(units.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_minor.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Add another amount, returning None if currencies differ.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        ))
    }

    /// Subtract another amount, returning None if currencies differ.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.saturating_sub(other.amount_minor),
            self.currency,
        ))
    }

    /// The given share of this amount, rounded half-up.
    pub fn percentage(&self, percent: Percent) -> Money {
        let scaled = i128::from(self.amount_minor) * i128::from(percent.get());
        let rounded = (scaled + 50).div_euclid(100);
        Money::new(clamp_i64(rounded), self.currency)
    }

    /// This amount with the given percentage taken off.
    pub fn percent_off(&self, percent: Percent) -> Money {
        self.percentage(percent.complement())
    }

    /// Check that this amount is in `expected`.
    pub fn ensure_currency(&self, expected: Currency) -> Result<(), CommerceError> {
        if self.currency != expected {
            return Err(CommerceError::currency_mismatch(expected, self.currency));
        }
        Ok(())
    }

    /// Sum amounts that must all be in `currency`, saturating on overflow.
    ///
    /// Returns `CurrencyMismatch` at the first amount in another currency.
    pub fn try_sum<'a>(
        iter: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        let mut total = Money::zero(currency);
        for money in iter {
            money.ensure_currency(currency)?;
            total.amount_minor = total.amount_minor.saturating_add(money.amount_minor);
        }
        Ok(total)
    }

    /// Format using the given display settings.
    pub fn format_with(&self, format: &MoneyFormat) -> String {
        let amount = format_amount(self.amount_minor, self.currency.decimal_places(), format);
        if format.symbol_after {
            format!("{} {}", amount, self.currency.symbol())
        } else {
            format!("{}{}", self.currency.symbol(), amount)
        }
    }

    /// Format with the default (Russian-style) settings, e.g. `89 990 ₽`.
    pub fn display(&self) -> String {
        self.format_with(&MoneyFormat::default())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn clamp_i64(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Group the integer part and print only significant fraction digits.
fn format_amount(amount_minor: i64, places: u32, format: &MoneyFormat) -> String {
    let divisor = 10_u64.pow(places);
    let abs = amount_minor.unsigned_abs();
    let major = abs / divisor;
    let fraction = abs % divisor;

    let mut out = String::new();
    if amount_minor < 0 {
        out.push('-');
    }
    out.push_str(&group_digits(major, &format.group_separator));

    if fraction > 0 {
        let digits = format!("{:0width$}", fraction, width = places as usize);
        out.push_str(&format.decimal_separator);
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}
