//! IBAN validation (ISO 13616) restricted to Swiss and Liechtenstein accounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::QrBillError;

/// Country prefixes a QR-bill account may carry.
pub const IBAN_ALLOWED_COUNTRIES: [&str; 2] = ["CH", "LI"];

/// Length of every CH / LI IBAN.
pub const IBAN_LENGTH: usize = 21;

/// Institution ids reserved for QR-IBANs (inclusive).
pub const QR_IID_RANGE: std::ops::RangeInclusive<u32> = 30000..=31999;

/// A validated CH or LI IBAN, stored without spaces.
///
/// ```
/// use qrbill::core::Iban;
///
/// let iban: Iban = "ch44 3199 9123 0008 8901 2".parse().unwrap();
/// assert_eq!(iban.as_str(), "CH4431999123000889012");
/// assert_eq!(iban.formatted(), "CH44 3199 9123 0008 8901 2");
/// assert!(iban.is_qr_iban());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Normalize and validate a raw account number.
    pub fn parse(raw: &str) -> Result<Self, QrBillError> {
        let iban: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if iban.len() < 5 || !iban.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(QrBillError::field("account", "the IBAN is not valid"));
        }

        let country = &iban[..2];
        let allowed = IBAN_ALLOWED_COUNTRIES.contains(&country);
        if allowed && iban.len() != IBAN_LENGTH {
            return Err(QrBillError::field(
                "account",
                format!("IBAN must have exactly {IBAN_LENGTH} characters"),
            ));
        }

        if !is_valid_checksum(&iban) {
            return Err(QrBillError::field("account", "the IBAN is not valid"));
        }

        if !allowed {
            return Err(QrBillError::field(
                "account",
                format!("IBAN must start with: {}", IBAN_ALLOWED_COUNTRIES.join(", ")),
            ));
        }

        Ok(Self(iban))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-letter country prefix.
    pub fn country(&self) -> &str {
        &self.0[..2]
    }

    /// Institution id: the five digits following the check digits.
    ///
    /// `None` when those positions are not numeric.
    pub fn institution_id(&self) -> Option<u32> {
        self.0.get(4..9)?.parse().ok()
    }

    /// Whether the institution id falls in the QR-IID range.
    pub fn is_qr_iban(&self) -> bool {
        self.institution_id()
            .is_some_and(|iid| QR_IID_RANGE.contains(&iid))
    }

    /// Groups of four characters separated by spaces, for printing.
    pub fn formatted(&self) -> String {
        group_chars(&self.0, 4)
    }
}

impl FromStr for Iban {
    type Err = QrBillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = QrBillError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ISO 13616 MOD-97: the first four characters are moved to the end,
/// letters become 10..=35, and the resulting number mod 97 must be 1.
pub fn is_valid_checksum(iban: &str) -> bool {
    if iban.len() < 5 || !iban.is_ascii() {
        return false;
    }
    let rearranged = iban[4..].chars().chain(iban[..4].chars());
    mod97(rearranged) == Some(1)
}

/// Remainder mod 97 of the number formed by mapping each character to
/// its digit value (0-9) or letter value (A=10 .. Z=35).
///
/// Computed digit by digit so arbitrarily long input never overflows.
pub(crate) fn mod97(chars: impl Iterator<Item = char>) -> Option<u32> {
    let mut remainder = 0u32;
    for c in chars {
        let value = c.to_digit(36)?;
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }
    Some(remainder)
}

/// Insert a space every `size` characters, counting from the left.
pub(crate) fn group_chars(value: &str, size: usize) -> String {
    value
        .chars()
        .collect::<Vec<_>>()
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
