//! Edge cases around limits, whitespace and unusual but valid input.

use qrbill::core::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const IBAN: &str = "CH5380005000010283664";

fn jane() -> AddressBuilder {
    AddressBuilder::new("Jane").postal_code("1000").city("Lausanne")
}

fn bill(account: &str) -> BillBuilder {
    BillBuilder::new().account(account).creditor(jane())
}

// ---------------------------------------------------------------------------
// QR-IID range
// ---------------------------------------------------------------------------

#[test]
fn qr_iid_lower_and_upper_bound() {
    // IID 30000 and 31999 are QR-IBANs and need a QR reference
    for account in ["CH5730000123456789012", "CH4431999123456789012"] {
        let err = bill(account).build().unwrap_err();
        assert!(matches!(err, QrBillError::CrossField(_)), "{account}");
        assert!(bill(account).reference("1878583").build().is_ok(), "{account}");
    }
}

#[test]
fn just_outside_qr_iid_range() {
    for account in ["CH4929999123456789012", "CH5232000123456789012"] {
        assert!(bill(account).build().is_ok(), "{account}");
        let err = bill(account).reference("1878583").build().unwrap_err();
        assert!(matches!(err, QrBillError::CrossField(_)), "{account}");
    }
}

// ---------------------------------------------------------------------------
// Unicode and whitespace
// ---------------------------------------------------------------------------

#[test]
fn lengths_count_characters_not_bytes() {
    // 70 umlauts are 140 bytes but only 70 characters
    let name = "ä".repeat(70);
    let address = AddressBuilder::new(name.clone())
        .postal_code("1000")
        .city("Zürich")
        .build()
        .unwrap();
    assert_eq!(address.name(), name);

    let err = AddressBuilder::new("ä".repeat(71))
        .postal_code("1000")
        .city("Zürich")
        .build()
        .unwrap_err();
    assert_eq!(err.field_name(), Some("name"));
}

#[test]
fn additional_information_counts_characters() {
    let ok = bill(IBAN)
        .unstructured_message("é".repeat(70))
        .billing_info("ü".repeat(70))
        .build();
    assert!(ok.is_ok());
}

#[test]
fn reference_whitespace_variants() {
    for raw in ["RF18 5390 0754 7034", " RF18539007547034 ", "rf18\t5390 0754 7034"] {
        let bill = bill(IBAN).reference(raw).build().unwrap();
        assert_eq!(bill.reference(), &Reference::Scor("RF18539007547034".into()), "{raw:?}");
    }
}

#[test]
fn qr_reference_with_leading_zeros() {
    let bill = bill("CH4431999123000889012")
        .reference("00 00000 00000 00000 00018 78583")
        .build()
        .unwrap();
    assert_eq!(bill.reference().value(), "000000000000000000001878583");
}

#[test]
fn invalid_reference_keeps_raw_input_in_message() {
    let err = bill(IBAN).reference("RF00 1234").build().unwrap_err();
    assert_eq!(
        err,
        QrBillError::field("reference", "invalid reference 'RF00 1234'")
    );
}

// ---------------------------------------------------------------------------
// Amount boundaries
// ---------------------------------------------------------------------------

#[test]
fn largest_and_smallest_amount() {
    let bill_max = bill(IBAN).amount("999'999'999.99").build().unwrap();
    assert_eq!(bill_max.amount().unwrap().as_str(), "999999999.99");
    assert_eq!(bill_max.formatted_amount().as_deref(), Some("999 999 999.99"));

    let bill_zero = bill(IBAN).amount("0.00").build().unwrap();
    assert_eq!(bill_zero.amount().unwrap().as_str(), "0.00");

    let err = bill(IBAN).amount("1'000'000'000").build().unwrap_err();
    assert_eq!(err.field_name(), Some("amount"));
}

#[test]
fn blank_amount_is_rejected() {
    let err = bill(IBAN).amount("   ").build().unwrap_err();
    assert_eq!(err.field_name(), Some("amount"));
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

#[test]
fn combined_address_without_line1() {
    let bill = bill(IBAN)
        .debtor(AddressBuilder::new("Max Muster").line2("8000 Zürich").country("Switzerland"))
        .build()
        .unwrap();
    let debtor = bill.debtor().unwrap();
    assert_eq!(
        debtor.to_fields(),
        ["K", "Max Muster", "", "8000 Zürich", "", "", "CH"]
    );
    assert_eq!(debtor.as_paragraph(38), vec!["Max Muster", "8000 Zürich"]);
}

#[test]
fn foreign_debtor() {
    let bill = bill(IBAN)
        .debtor(
            AddressBuilder::new("Erika Mustermann")
                .street("Heidestraße")
                .house_num("17")
                .postal_code("51147")
                .city("Köln")
                .country("de"),
        )
        .build()
        .unwrap();
    assert_eq!(
        bill.debtor().unwrap().as_paragraph(72)[2],
        "DE-51147 Köln"
    );
}

#[test]
fn house_number_without_street() {
    let address = AddressBuilder::new("Jane")
        .house_num("12a")
        .postal_code("1000")
        .city("Lausanne")
        .build()
        .unwrap();
    assert_eq!(address.as_paragraph(38), vec!["Jane", "12a", "CH-1000 Lausanne"]);
}

#[test]
fn paragraph_with_tiny_limit() {
    let address = jane().build().unwrap();
    assert_eq!(address.as_paragraph(1), vec!["Jane", "CH-1000", "Lausanne"]);
}

#[test]
fn address_display() {
    let address = jane().street("Rue de Bourg").house_num("1").build().unwrap();
    assert_eq!(address.to_string(), "Jane, Rue de Bourg 1, CH-1000 Lausanne");
}

// ---------------------------------------------------------------------------
// Line breaks inside text fields
// ---------------------------------------------------------------------------

#[test]
fn line_breaks_do_not_shift_payload_fields() {
    let bill = BillBuilder::new()
        .account(IBAN)
        .creditor(AddressBuilder::new("Jane\r\nDoe").postal_code("1000").city("Lausanne"))
        .unstructured_message("line one\nline two\r\nline three")
        .build()
        .unwrap();
    let data = bill.qr_data();
    let lines: Vec<&str> = data.split("\r\n").collect();
    assert_eq!(lines.len(), 31);
    assert_eq!(lines[5], "Jane Doe");
    assert_eq!(lines[29], "line one line two line three");
    assert_eq!(lines[30], "EPD");
}

#[test]
fn line_breaks_in_debtor_and_trailer_fields() {
    let bill = bill(IBAN)
        .debtor(
            AddressBuilder::new("Pia\nRutschmann")
                .line1("Grosse\r\nMarktgasse 28")
                .line2("9400\rRorschach"),
        )
        .billing_info("//S1/10/\n10201409")
        .add_alternative_procedure("eBill/B/\r\n41010560425610173")
        .build()
        .unwrap();
    let data = bill.qr_data();
    let lines: Vec<&str> = data.split("\r\n").collect();
    assert_eq!(lines.len(), 33);
    assert_eq!(
        &lines[20..27],
        ["K", "Pia Rutschmann", "Grosse Marktgasse 28", "9400 Rorschach", "", "", "CH"]
    );
    assert_eq!(lines[30], "EPD");
    assert_eq!(lines[31], "//S1/10/ 10201409");
    assert_eq!(lines[32], "eBill/B/ 41010560425610173");
}

#[test]
fn country_by_alpha3_numeric_and_name() {
    for input in ["CHE", "756", "Switzerland", "switzerland"] {
        let address = jane().country(input).build().unwrap();
        assert_eq!(address.country(), "CH", "{input}");
    }
    let address = jane().country("Germany").build().unwrap();
    assert_eq!(address.country(), "DE");
    let address = jane().country("deu").build().unwrap();
    assert_eq!(address.country(), "DE");

    let err = jane().country("Atlantis").build().unwrap_err();
    assert_eq!(
        err,
        QrBillError::field("country", "the country code 'Atlantis' is not valid")
    );
}
