use chrono::NaiveDate;
use tracing::debug;

use super::address::{Address, AddressBuilder, non_blank};
use super::amount::{Amount, AmountInput};
use super::error::QrBillError;
use super::iban::Iban;
use super::reference::{Reference, ReferenceType};
use super::types::*;

/// Combined limit for unstructured message and billing information.
pub const MAX_ADDITIONAL_INFO_CHARS: usize = 140;

pub const MAX_ALTERNATIVE_PROCEDURES: usize = 2;

pub const MAX_ALTERNATIVE_PROCEDURE_CHARS: usize = 100;

/// Builder for constructing valid bills.
///
/// Raw values are stored as given; all validation happens in
/// [`BillBuilder::build`], which checks every field and every cross-field
/// rule on each call.
///
/// ```
/// use qrbill::core::*;
///
/// let bill = BillBuilder::new()
///     .account("CH53 8000 5000 0102 8366 4")
///     .creditor(AddressBuilder::new("Jane").postal_code("1000").city("Lausanne"))
///     .reference("RF18 5390 0754 7034")
///     .amount("42")
///     .currency(Currency::Eur)
///     .build()
///     .unwrap();
///
/// assert_eq!(bill.reference().ref_type(), ReferenceType::Scor);
/// assert_eq!(bill.amount().unwrap().as_str(), "42.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BillBuilder {
    account: Option<String>,
    creditor: Option<AddressBuilder>,
    ultimate_creditor: Option<AddressBuilder>,
    amount: Option<AmountInput>,
    currency: Currency,
    debtor: Option<AddressBuilder>,
    reference: Option<String>,
    unstructured_message: Option<String>,
    billing_info: Option<String>,
    alternative_procedures: Vec<String>,
    due_date: Option<NaiveDate>,
    language: Language,
}

impl BillBuilder {
    /// Empty builder: currency CHF, language English, no reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creditor IBAN or QR-IBAN, with or without spaces.
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn creditor(mut self, creditor: impl Into<AddressBuilder>) -> Self {
        self.creditor = Some(creditor.into());
        self
    }

    /// Reserved by the standard: setting it makes [`BillBuilder::build`] fail.
    pub fn ultimate_creditor(mut self, creditor: impl Into<AddressBuilder>) -> Self {
        self.ultimate_creditor = Some(creditor.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<AmountInput>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn clear_amount(mut self) -> Self {
        self.amount = None;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn debtor(mut self, debtor: impl Into<AddressBuilder>) -> Self {
        self.debtor = Some(debtor.into());
        self
    }

    pub fn clear_debtor(mut self) -> Self {
        self.debtor = None;
        self
    }

    /// QR reference or creditor reference; blank means none.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn unstructured_message(mut self, message: impl Into<String>) -> Self {
        self.unstructured_message = Some(message.into());
        self
    }

    pub fn billing_info(mut self, info: impl Into<String>) -> Self {
        self.billing_info = Some(info.into());
        self
    }

    pub fn add_alternative_procedure(mut self, parameters: impl Into<String>) -> Self {
        self.alternative_procedures.push(parameters.into());
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Validate every field and the cross-field rules, then build the bill.
    /// Fails on the first violation.
    pub fn build(self) -> Result<Bill, QrBillError> {
        match self.validate() {
            Ok(bill) => {
                debug!(
                    account = %bill.account,
                    reference_type = bill.reference.ref_type().code(),
                    amount = bill.amount.as_ref().map(Amount::as_str),
                    "built QR-bill"
                );
                Ok(bill)
            }
            Err(err) => {
                debug!(error = %err, "rejected QR-bill");
                Err(err)
            }
        }
    }

    fn validate(self) -> Result<Bill, QrBillError> {
        let account = self
            .account
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| QrBillError::Missing("account".into()))?;
        let account = Iban::parse(&account)?;

        let creditor = self
            .creditor
            .ok_or_else(|| QrBillError::Missing("creditor".into()))?
            .build()
            .map_err(|e| e.within("creditor"))?;

        if self.ultimate_creditor.is_some() {
            return Err(QrBillError::field(
                "ultimate_creditor",
                "is reserved for future use and must not be set",
            ));
        }

        let amount = self.amount.map(Amount::normalize).transpose()?;

        let debtor = self
            .debtor
            .map(|d| d.build().map_err(|e| e.within("debtor")))
            .transpose()?;

        let reference = match &self.reference {
            Some(raw) => Reference::resolve(raw)?,
            None => Reference::None,
        };
        check_reference_matches_account(&account, &reference)?;

        let unstructured_message = non_blank(self.unstructured_message);
        let billing_info = non_blank(self.billing_info);
        let additional_len = [&unstructured_message, &billing_info]
            .into_iter()
            .flatten()
            .map(|s| s.chars().count())
            .sum::<usize>();
        if additional_len > MAX_ADDITIONAL_INFO_CHARS {
            return Err(QrBillError::cross_field(
                "additional_information",
                format!(
                    "unstructured message and billing information cannot contain more than {MAX_ADDITIONAL_INFO_CHARS} characters"
                ),
            ));
        }

        let alternative_procedures: Vec<String> = self
            .alternative_procedures
            .into_iter()
            .filter_map(|p| non_blank(Some(p)))
            .collect();
        if alternative_procedures.len() > MAX_ALTERNATIVE_PROCEDURES {
            return Err(QrBillError::field(
                "alternative_procedures",
                format!("at most {MAX_ALTERNATIVE_PROCEDURES} alternative procedures are allowed"),
            ));
        }
        if alternative_procedures
            .iter()
            .any(|p| p.chars().count() > MAX_ALTERNATIVE_PROCEDURE_CHARS)
        {
            return Err(QrBillError::field(
                "alternative_procedures",
                format!(
                    "an alternative procedure cannot contain more than {MAX_ALTERNATIVE_PROCEDURE_CHARS} characters"
                ),
            ));
        }

        Ok(Bill {
            account,
            creditor,
            amount,
            currency: self.currency,
            debtor,
            reference,
            unstructured_message,
            billing_info,
            alternative_procedures,
            due_date: self.due_date,
            language: self.language,
        })
    }
}

/// A QR-IBAN requires a QR reference, and a QR reference requires a QR-IBAN.
fn check_reference_matches_account(
    account: &Iban,
    reference: &Reference,
) -> Result<(), QrBillError> {
    let is_qrr = reference.ref_type() == ReferenceType::Qrr;
    if account.is_qr_iban() && !is_qrr {
        return Err(QrBillError::cross_field(
            "reference",
            "a QR-IBAN requires a QRR reference",
        ));
    }
    if !account.is_qr_iban() && is_qrr {
        return Err(QrBillError::cross_field(
            "reference",
            "a QRR reference is only allowed with a QR-IBAN",
        ));
    }
    Ok(())
}

impl From<&Bill> for BillBuilder {
    fn from(bill: &Bill) -> Self {
        Self {
            account: Some(bill.account.as_str().to_string()),
            creditor: Some(AddressBuilder::from(&bill.creditor)),
            ultimate_creditor: None,
            amount: bill
                .amount
                .as_ref()
                .map(|a| AmountInput::Text(a.as_str().to_string())),
            currency: bill.currency,
            debtor: bill.debtor.as_ref().map(AddressBuilder::from),
            reference: Some(bill.reference.value().to_string()),
            unstructured_message: bill.unstructured_message.clone(),
            billing_info: bill.billing_info.clone(),
            alternative_procedures: bill.alternative_procedures.clone(),
            due_date: bill.due_date,
            language: bill.language,
        }
    }
}

impl From<Address> for AddressBuilder {
    fn from(address: Address) -> Self {
        Self::from(&address)
    }
}

impl From<&Address> for AddressBuilder {
    fn from(address: &Address) -> Self {
        match address {
            Address::Structured(a) => {
                let mut builder = AddressBuilder::new(a.name.clone())
                    .postal_code(a.postal_code.clone())
                    .city(a.city.clone())
                    .country(a.country.clone());
                if let Some(street) = &a.street {
                    builder = builder.street(street.clone());
                }
                if let Some(house_num) = &a.house_num {
                    builder = builder.house_num(house_num.clone());
                }
                builder
            }
            Address::Combined(a) => {
                let mut builder = AddressBuilder::new(a.name.clone())
                    .line2(a.line2.clone())
                    .country(a.country.clone());
                if let Some(line1) = &a.line1 {
                    builder = builder.line1(line1.clone());
                }
                builder
            }
        }
    }
}
