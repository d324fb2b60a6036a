use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::QrBillError;

/// Maximum number of digits before the decimal point.
pub const MAX_INTEGER_DIGITS: usize = 9;

const AMOUNT_ERROR: &str =
    "the amount must match the pattern '###.##' and cannot be larger than 999'999'999.99";

/// Raw amount as supplied by a caller.
///
/// Floating point values are represented so they can be rejected with a
/// type error instead of being silently rounded.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Text(String),
    Decimal(Decimal),
    Integer(i128),
    Float(f64),
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for AmountInput {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

macro_rules! impl_integer_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AmountInput {
                fn from(value: $t) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_integer_input!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Payment amount in canonical payload form: 1-9 integer digits, a dot,
/// exactly two decimals (e.g. `1949.75`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(String);

impl Amount {
    /// Normalize a raw amount.
    ///
    /// Apostrophes (thousands separators) and surrounding whitespace are
    /// removed, missing decimals are filled in and leading zeros dropped.
    ///
    /// ```
    /// use qrbill::core::Amount;
    ///
    /// assert_eq!(Amount::normalize(".5").unwrap().as_str(), "0.50");
    /// assert_eq!(Amount::normalize("001'800").unwrap().formatted(), "1 800.00");
    /// assert!(Amount::normalize(1.35).is_err());
    /// ```
    pub fn normalize(input: impl Into<AmountInput>) -> Result<Self, QrBillError> {
        let raw = match input.into() {
            AmountInput::Text(text) => text,
            AmountInput::Decimal(value) => value.to_string(),
            AmountInput::Integer(value) => value.to_string(),
            AmountInput::Float(_) => {
                return Err(QrBillError::Type(
                    "amount can only be specified as string, integer or Decimal".into(),
                ));
            }
        };

        let mut amount = raw.replace('\'', "").trim().to_string();
        if amount.is_empty() {
            return Err(QrBillError::field("amount", AMOUNT_ERROR));
        }
        match amount.find('.') {
            None => amount.push_str(".00"),
            Some(dot) if amount.len() - dot - 1 == 1 => amount.push('0'),
            Some(_) => {}
        }
        let amount = amount.trim_start_matches('0');
        let amount = if amount.starts_with('.') {
            format!("0{amount}")
        } else {
            amount.to_string()
        };

        if !matches_amount_pattern(&amount) {
            return Err(QrBillError::field("amount", AMOUNT_ERROR));
        }
        Ok(Self(amount))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact decimal value.
    pub fn to_decimal(&self) -> Decimal {
        // Always parses: the pattern guarantees at most 9 + 2 digits.
        Decimal::from_str(&self.0).unwrap_or_default()
    }

    /// Display form with a space between thousands groups (`1 949.75`).
    pub fn formatted(&self) -> String {
        let (integer, decimals) = self.0.split_once('.').unwrap_or((&self.0, "00"));
        let digits: Vec<char> = integer.chars().collect();
        let head = digits.len() % 3;
        let mut groups = Vec::new();
        if head > 0 {
            groups.push(digits[..head].iter().collect::<String>());
        }
        groups.extend(digits[head..].chunks(3).map(|c| c.iter().collect::<String>()));
        format!("{}.{decimals}", groups.join(" "))
    }
}

/// `^\d{1,9}\.\d{2}$`
fn matches_amount_pattern(value: &str) -> bool {
    let Some((integer, decimals)) = value.split_once('.') else {
        return false;
    };
    (1..=MAX_INTEGER_DIGITS).contains(&integer.len())
        && integer.chars().all(|c| c.is_ascii_digit())
        && decimals.len() == 2
        && decimals.chars().all(|c| c.is_ascii_digit())
}

impl TryFrom<String> for Amount {
    type Error = QrBillError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::normalize(value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = QrBillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
