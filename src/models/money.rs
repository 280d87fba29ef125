//! Money type for the salary amount
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues. Formats and parses Brazilian Real the way pt-BR does:
//! `R$ 1.234,50`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Currency symbol for Brazilian Real
pub const CURRENCY_SYMBOL: &str = "R$";

/// Represents a monetary amount stored as centavos
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use minha_nota::models::Money;
    /// let amount = Money::from_cents(123450);
    /// assert_eq!(amount.to_string(), "R$ 1.234,50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Convert a decimal number (as stored by the browser) to centavos,
    /// rounding half away from zero. Non-finite values become zero.
    pub fn from_decimal(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        Self((value * 100.0).round() as i64)
    }

    /// The amount as a decimal number of reais
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts pt-BR formats (`"1.234,50"`, `"R$ 1.234,50"`, `"-10,5"`), plain
    /// integers (`"1234"`) and a dot decimal with one or two fraction digits
    /// (`"1234.5"`). Dots are otherwise thousands separators.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let s = s.strip_prefix(CURRENCY_SYMBOL).unwrap_or(s).trim();
        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        if s.is_empty() {
            return Err(invalid());
        }

        let (whole, fraction) = if let Some((whole, fraction)) = s.rsplit_once(',') {
            (whole.replace('.', ""), fraction.to_string())
        } else {
            match s.rsplit_once('.') {
                Some((whole, fraction))
                    if !whole.contains('.') && (1..=2).contains(&fraction.len()) =>
                {
                    (whole.to_string(), fraction.to_string())
                }
                _ => (s.replace('.', ""), String::new()),
            }
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
            || fraction.len() > 2
        {
            return Err(invalid());
        }

        let reais: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let centavos: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let cents = reais
            .checked_mul(100)
            .and_then(|c| c.checked_add(centavos))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let reais = abs / 100;
        let centavos = abs % 100;

        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{} {},{:02}", sign, CURRENCY_SYMBOL, grouped, centavos)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Integer(reais) => Ok(reais
                .checked_mul(100)
                .map(Money)
                .unwrap_or_else(|| Money::from_decimal(reais as f64))),
            RawAmount::Number(value) => Ok(Money::from_decimal(value)),
            RawAmount::Text(text) => Money::parse(&text).map_err(de::Error::custom),
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
