//! Payment references: Swiss QR reference (QRR), ISO 11649 creditor
//! reference (SCOR), or none.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::QrBillError;
use super::iban::{group_chars, mod97};

/// Number of digits in a QR reference, check digit included.
pub const QR_REFERENCE_LENGTH: usize = 27;

/// Maximum length of an ISO 11649 creditor reference.
pub const CREDITOR_REFERENCE_MAX_LENGTH: usize = 25;

/// Transition table of the recursive modulo 10 algorithm used by
/// ESR / QR references.
const MOD10_TABLE: [[u8; 10]; 10] = [
    [0, 9, 4, 6, 8, 2, 7, 1, 3, 5],
    [9, 4, 6, 8, 2, 7, 1, 3, 5, 0],
    [4, 6, 8, 2, 7, 1, 3, 5, 0, 9],
    [6, 8, 2, 7, 1, 3, 5, 0, 9, 4],
    [8, 2, 7, 1, 3, 5, 0, 9, 4, 6],
    [2, 7, 1, 3, 5, 0, 9, 4, 6, 8],
    [7, 1, 3, 5, 0, 9, 4, 6, 8, 2],
    [1, 3, 5, 0, 9, 4, 6, 8, 2, 7],
    [3, 5, 0, 9, 4, 6, 8, 2, 7, 1],
    [5, 0, 9, 4, 6, 8, 2, 7, 1, 3],
];

/// Reference type code written to the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceType {
    /// QRR: QR reference, only valid with a QR-IBAN.
    Qrr,
    /// SCOR: ISO 11649 creditor reference.
    Scor,
    /// NON: no reference.
    Non,
}

impl ReferenceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Qrr => "QRR",
            Self::Scor => "SCOR",
            Self::Non => "NON",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "QRR" => Some(Self::Qrr),
            "SCOR" => Some(Self::Scor),
            "NON" => Some(Self::Non),
            _ => None,
        }
    }
}

/// A resolved payment reference, stored in its payload form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// 27 digits, zero-padded on the left.
    Qrr(String),
    /// Uppercase, without spaces, starting with `RF`.
    Scor(String),
    #[default]
    None,
}

impl Reference {
    /// Classify and validate a raw reference.
    ///
    /// Blank input means no reference. A valid creditor reference wins over
    /// a QR reference; anything else is rejected.
    ///
    /// ```
    /// use qrbill::core::*;
    ///
    /// let reference = Reference::resolve("18 78583").unwrap();
    /// assert_eq!(reference.ref_type(), ReferenceType::Qrr);
    /// assert_eq!(reference.value(), "000000000000000000001878583");
    /// assert_eq!(reference.formatted(), "00 00000 00000 00000 00018 78583");
    /// ```
    pub fn resolve(raw: &str) -> Result<Self, QrBillError> {
        let compact = compact(raw);
        if compact.is_empty() {
            return Ok(Self::None);
        }

        let upper = compact.to_ascii_uppercase();
        if is_valid_creditor_reference(&upper) {
            trace!(reference = %upper, "resolved creditor reference");
            return Ok(Self::Scor(upper));
        }

        if is_valid_qr_reference(&compact) {
            let padded = format!("{compact:0>width$}", width = QR_REFERENCE_LENGTH);
            trace!(reference = %padded, "resolved QR reference");
            return Ok(Self::Qrr(padded));
        }

        Err(QrBillError::field(
            "reference",
            format!("invalid reference '{}'", raw.trim()),
        ))
    }

    pub fn ref_type(&self) -> ReferenceType {
        match self {
            Self::Qrr(_) => ReferenceType::Qrr,
            Self::Scor(_) => ReferenceType::Scor,
            Self::None => ReferenceType::Non,
        }
    }

    /// Value as written to the payload; empty for [`Reference::None`].
    pub fn value(&self) -> &str {
        match self {
            Self::Qrr(v) | Self::Scor(v) => v,
            Self::None => "",
        }
    }

    /// Display form: SCOR in blocks of four, QRR grouped by five from the
    /// right (2-5-5-5-5-5).
    pub fn formatted(&self) -> String {
        match self {
            Self::Scor(v) => group_chars(v, 4),
            Self::Qrr(v) => {
                let padded = format!("{v:0>width$}", width = QR_REFERENCE_LENGTH);
                let head = padded.len() % 5;
                let mut groups = vec![&padded[..head]];
                groups.extend(
                    padded.as_bytes()[head..]
                        .chunks(5)
                        .filter_map(|c| std::str::from_utf8(c).ok()),
                );
                groups
                    .into_iter()
                    .filter(|g| !g.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            Self::None => String::new(),
        }
    }
}

fn compact(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check a QR reference (digits only, whitespace ignored): at most 27
/// digits, the last one being the recursive modulo 10 check digit.
pub fn is_valid_qr_reference(reference: &str) -> bool {
    let digits = compact(reference);
    if digits.len() < 2
        || digits.len() > QR_REFERENCE_LENGTH
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return false;
    }
    let (payload, check) = digits.split_at(digits.len() - 1);
    qr_reference_check_digit(payload).is_some_and(|expected| check.starts_with(expected))
}

/// Recursive modulo 10 check digit for a string of digits.
///
/// Returns `None` if `digits` contains anything but ASCII digits.
///
/// ```
/// use qrbill::core::qr_reference_check_digit;
///
/// assert_eq!(qr_reference_check_digit("187858"), Some('3'));
/// ```
pub fn qr_reference_check_digit(digits: &str) -> Option<char> {
    let mut carry = 0u8;
    for c in digits.chars() {
        let digit = c.to_digit(10)? as usize;
        carry = MOD10_TABLE[carry as usize][digit];
    }
    char::from_digit(u32::from((10 - carry) % 10), 10)
}

/// Check an ISO 11649 creditor reference (whitespace ignored,
/// case-insensitive): `RF`, two check digits, 1-21 alphanumerics, and
/// MOD 97-10 over the rearranged value equal to 1.
pub fn is_valid_creditor_reference(reference: &str) -> bool {
    let reference = compact(reference).to_ascii_uppercase();
    if !reference.is_ascii()
        || reference.len() < 5
        || reference.len() > CREDITOR_REFERENCE_MAX_LENGTH
    {
        return false;
    }
    if !reference.starts_with("RF")
        || !reference[2..4].chars().all(|c| c.is_ascii_digit())
        || !reference[4..].chars().all(|c| c.is_ascii_alphanumeric())
    {
        return false;
    }
    let rearranged = reference[4..].chars().chain(reference[..4].chars());
    mod97(rearranged) == Some(1)
}
