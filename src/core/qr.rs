//! QR payload serialization (Swiss Payments Code, version 0200).
//!
//! The payload is a fixed sequence of positional fields joined by CRLF.
//! Everything up to and including the `EPD` trailer is always present, so
//! consumers can split on CRLF and index fields by position. Billing
//! information and alternative procedures follow the trailer only when set.

use super::address::Address;
use super::types::Bill;

/// QR type: Swiss Payments Code.
pub const QR_TYPE: &str = "SPC";
/// Version of the implementation guidelines.
pub const QR_VERSION: &str = "0200";
/// Coding type 1: UTF-8 restricted to the Latin character set.
pub const CODING_TYPE: &str = "1";
/// End Payment Data.
pub const TRAILER: &str = "EPD";
pub const LINE_SEPARATOR: &str = "\r\n";

/// Number of fields from the header through the trailer.
pub const FIXED_FIELD_COUNT: usize = 31;

/// Number of fields per address block.
pub const ADDRESS_FIELD_COUNT: usize = 7;

/// Payload text for the Swiss QR code.
///
/// Pure: the same bill always yields the same text.
pub fn qr_data(bill: &Bill) -> String {
    qr_fields(bill).join(LINE_SEPARATOR)
}

/// Payload fields in their fixed order, before joining.
pub fn qr_fields(bill: &Bill) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIXED_FIELD_COUNT + 3);

    // Header
    fields.extend([QR_TYPE, QR_VERSION, CODING_TYPE].map(String::from));

    // Creditor information
    fields.push(bill.account().as_str().to_string());
    fields.extend(bill.creditor().to_fields());

    // Ultimate creditor, reserved
    fields.extend(std::iter::repeat_n(String::new(), ADDRESS_FIELD_COUNT));

    // Payment amount information
    fields.push(
        bill.amount()
            .map(|a| a.as_str().to_string())
            .unwrap_or_default(),
    );
    fields.push(bill.currency().code().to_string());

    // Ultimate debtor
    fields.extend(bill.debtor().map(Address::to_fields).unwrap_or_default());

    // Payment reference
    fields.push(bill.reference().ref_type().code().to_string());
    fields.push(bill.reference().value().to_string());

    // Additional information
    fields.push(bill.unstructured_message().unwrap_or_default().to_string());
    fields.push(TRAILER.to_string());

    if bill.billing_info().is_some() || !bill.alternative_procedures().is_empty() {
        fields.push(bill.billing_info().unwrap_or_default().to_string());
        fields.extend(bill.alternative_procedures().iter().cloned());
    }

    fields
}
