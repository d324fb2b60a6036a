use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::amount::Amount;
use super::builder::BillBuilder;
use super::error::QrBillError;
use super::iban::Iban;
use super::qr;
use super::reference::Reference;

/// A validated Swiss QR-bill.
///
/// Only [`BillBuilder::build`] creates one, so every `Bill` satisfies the
/// cross-field rules of the standard. To change a bill, go through
/// [`Bill::to_builder`] and build again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bill {
    pub(crate) account: Iban,
    pub(crate) creditor: Address,
    pub(crate) amount: Option<Amount>,
    pub(crate) currency: Currency,
    pub(crate) debtor: Option<Address>,
    pub(crate) reference: Reference,
    pub(crate) unstructured_message: Option<String>,
    pub(crate) billing_info: Option<String>,
    pub(crate) alternative_procedures: Vec<String>,
    pub(crate) due_date: Option<NaiveDate>,
    pub(crate) language: Language,
}

impl Bill {
    /// Creditor account (IBAN or QR-IBAN).
    pub fn account(&self) -> &Iban {
        &self.account
    }

    pub fn creditor(&self) -> &Address {
        &self.creditor
    }

    pub fn amount(&self) -> Option<&Amount> {
        self.amount.as_ref()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Ultimate debtor.
    pub fn debtor(&self) -> Option<&Address> {
        self.debtor.as_ref()
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Payment purpose or other free text for the payer.
    pub fn unstructured_message(&self) -> Option<&str> {
        self.unstructured_message.as_deref()
    }

    /// Coded information for automated booking (e.g. Swico `//S1/...`).
    pub fn billing_info(&self) -> Option<&str> {
        self.billing_info.as_deref()
    }

    /// Parameters of alternative payment procedures (at most two).
    pub fn alternative_procedures(&self) -> &[String] {
        &self.alternative_procedures
    }

    /// Due date, printed on the slip only.
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Payload text for the Swiss QR code.
    pub fn qr_data(&self) -> String {
        qr::qr_data(self)
    }

    pub fn formatted_amount(&self) -> Option<String> {
        self.amount.as_ref().map(Amount::formatted)
    }

    /// Due date as `DD.MM.YYYY`.
    pub fn formatted_due_date(&self) -> Option<String> {
        self.due_date.map(|d| d.format("%d.%m.%Y").to_string())
    }

    pub fn formatted_reference(&self) -> String {
        self.reference.formatted()
    }

    /// A builder holding this bill's values, for building a modified copy.
    pub fn to_builder(&self) -> BillBuilder {
        BillBuilder::from(self)
    }
}

/// Payment currency. The QR-bill only allows Swiss francs and euros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Chf,
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chf => "CHF",
            Self::Eur => "EUR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "CHF" => Some(Self::Chf),
            "EUR" => Some(Self::Eur),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = QrBillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| QrBillError::field("currency", "currency can only contain: CHF, EUR"))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Language of the printed labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    It,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::It => "it",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            "fr" => Some(Self::Fr),
            "it" => Some(Self::It),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = QrBillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            QrBillError::field("language", "language can only be 'en', 'de', 'fr' or 'it'")
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
