//! Type-safe price representation using decimal arithmetic.
//!
//! Prices arrive from the product cards as Brazilian display strings
//! (`"R$ 1.234,56"`) and are parsed into an exact [`Decimal`] so cart totals
//! never accumulate floating point error.
//!
//! # Parsing policy
//!
//! - The `R$` marker is optional and may be followed by whitespace.
//! - The integer part is either plain digits (`1234`) or digits grouped in
//!   threes by `.` (`1.234`, `12.345.678`).
//! - The optional fraction is a `,` followed by one or two digits.
//! - The amount is at most [`Price::MAX_AMOUNT`] (`R$ 999.999.999,99`).
//!   Cart totals and the persisted JSON number stay exact at this size.
//!
//! Anything else is rejected with [`PriceError::InvalidPriceFormat`].

use core::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

static BRL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:R\$)?\s*(?P<int>\d{1,3}(?:\.\d{3})+|\d+)(?:,(?P<frac>\d{1,2}))?$")
        .unwrap_or_else(|e| unreachable!("BRL price pattern is valid: {e}"))
});

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a non-negative amount in the accepted format.
    #[error("invalid price format: {input:?}")]
    InvalidPriceFormat {
        /// The rejected input, as received.
        input: String,
    },
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Largest amount [`Price::parse_brl`] accepts: 999,999,999.99.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_215_752_191, 23, 0, false, 2);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in Brazilian reais.
    #[must_use]
    pub const fn brl(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::BRL)
    }

    /// Parse a Brazilian display string such as `"R$ 29,90"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::InvalidPriceFormat`] if the input has no digits,
    /// contains anything besides the `R$` marker and a pt-BR formatted
    /// amount, or exceeds [`Price::MAX_AMOUNT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jacare_core::Price;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Price::parse_brl("R$ 1.234,56").unwrap();
    /// assert_eq!(price.amount, Decimal::new(123_456, 2));
    ///
    /// assert!(Price::parse_brl("R$ --").is_err());
    /// assert!(Price::parse_brl("R$ 12.34").is_err());
    /// ```
    pub fn parse_brl(text: &str) -> Result<Self, PriceError> {
        let invalid = || PriceError::InvalidPriceFormat {
            input: text.to_owned(),
        };

        let captures = BRL_PATTERN.captures(text.trim()).ok_or_else(invalid)?;
        let int = captures.name("int").ok_or_else(invalid)?.as_str().replace('.', "");
        let normalized = match captures.name("frac") {
            Some(frac) => format!("{int}.{}", frac.as_str()),
            None => int,
        };

        let amount = Decimal::from_str(&normalized).map_err(|_| invalid())?;
        if amount > Self::MAX_AMOUNT {
            return Err(invalid());
        }
        Ok(Self::brl(amount))
    }

    /// Format for display using the currency's conventions (e.g. `"R$ 1.234,56"`).
    #[must_use]
    pub fn display(&self) -> String {
        let fixed = format!("{:.2}", self.amount.abs());
        let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() {
            "-"
        } else {
            ""
        };
        let (group, decimal) = self.currency_code.separators();
        format!(
            "{}{sign}{}{decimal}{frac}",
            self.currency_code.prefix(),
            group_thousands(int, group)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_brl(s)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display prefix, including the separating space where one is customary.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::BRL => "R$ ",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// The ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }

    /// Thousands and decimal separators.
    const fn separators(self) -> (char, char) {
        match self {
            Self::BRL | Self::EUR => ('.', ','),
            Self::USD => (',', '.'),
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
