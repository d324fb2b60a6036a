use chrono::NaiveDate;
use qrbill::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn creditor() -> AddressBuilder {
    AddressBuilder::new("Robert Schneider AG")
        .street("Rue du Lac")
        .house_num("1268")
        .postal_code("2501")
        .city("Biel")
        .country("CH")
}

fn debtor() -> AddressBuilder {
    AddressBuilder::new("Pia-Maria Rutschmann-Schnyder")
        .street("Grosse Marktgasse")
        .house_num("28")
        .postal_code("9400")
        .city("Rorschach")
        .country("CH")
}

// --- Published examples ---

#[test]
fn minimal_bill_without_reference() {
    let bill = BillBuilder::new()
        .account("CH5380005000010283664")
        .creditor(AddressBuilder::new("Jane").postal_code("1000").city("Lausanne"))
        .build()
        .unwrap();

    let data = bill.qr_data();
    assert_eq!(data.split("\r\n").count(), 31);
    assert!(data.ends_with("CHF\r\n\r\n\r\n\r\n\r\n\r\n\r\n\r\nNON\r\n\r\n\r\nEPD"));
    assert!(!data.contains("None"));
}

#[test]
fn example_with_qr_reference() {
    let bill = BillBuilder::new()
        .account("CH4431999123000889012")
        .creditor(creditor())
        .amount("1949.75")
        .currency(Currency::Chf)
        .debtor(debtor())
        .reference("210000000003139471430009017")
        .unstructured_message("Order of 15 June 2020")
        .billing_info(
            "//S1/10/10201409/11/200701/20/140.000-53/30/102673831/31/200615/32/7.7/33/7.7:139.40/40/0:30",
        )
        .add_alternative_procedure("Name AV1: UV;UltraPay005;12345")
        .add_alternative_procedure("Name AV2: XY;XYService;54321")
        .due_date(date(2020, 6, 30))
        .language(Language::De)
        .build()
        .unwrap();

    let expected = [
        "SPC",
        "0200",
        "1",
        "CH4431999123000889012",
        "S",
        "Robert Schneider AG",
        "Rue du Lac",
        "1268",
        "2501",
        "Biel",
        "CH",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "1949.75",
        "CHF",
        "S",
        "Pia-Maria Rutschmann-Schnyder",
        "Grosse Marktgasse",
        "28",
        "9400",
        "Rorschach",
        "CH",
        "QRR",
        "210000000003139471430009017",
        "Order of 15 June 2020",
        "EPD",
        "//S1/10/10201409/11/200701/20/140.000-53/30/102673831/31/200615/32/7.7/33/7.7:139.40/40/0:30",
        "Name AV1: UV;UltraPay005;12345",
        "Name AV2: XY;XYService;54321",
    ]
    .join("\r\n");
    assert_eq!(bill.qr_data(), expected);

    assert_eq!(bill.account().formatted(), "CH44 3199 9123 0008 8901 2");
    assert_eq!(bill.formatted_amount().as_deref(), Some("1 949.75"));
    assert_eq!(bill.formatted_reference(), "21 00000 00003 13947 14300 09017");
    assert_eq!(bill.formatted_due_date().as_deref(), Some("30.06.2020"));
    assert_eq!(bill.language().code(), "de");
}

#[test]
fn example_with_creditor_reference() {
    let bill = BillBuilder::new()
        .account("CH58 0079 1123 0008 8901 2")
        .creditor(creditor())
        .amount(dec!(199.95))
        .debtor(debtor())
        .reference("RF18539007547034")
        .build()
        .unwrap();

    let data = bill.qr_data();
    let fields: Vec<&str> = data.split("\r\n").collect();
    assert_eq!(fields[18], "199.95");
    assert_eq!(fields[27], "SCOR");
    assert_eq!(fields[28], "RF18539007547034");
    assert_eq!(bill.formatted_reference(), "RF18 5390 0754 7034");
}

#[test]
fn short_qr_reference_normalizes() {
    let bill = BillBuilder::new()
        .account("CH44 3199 9123 0008 8901 2")
        .creditor(creditor())
        .reference("18 78583")
        .build()
        .unwrap();
    assert_eq!(bill.reference().ref_type(), ReferenceType::Qrr);
    assert_eq!(bill.formatted_reference(), "00 00000 00000 00000 00018 78583");
    assert!(bill.qr_data().contains("\r\nQRR\r\n000000000000000000001878583\r\n"));
}

// --- Accounts ---

#[test]
fn account_is_stored_unformatted() {
    let bill = BillBuilder::new()
        .account("CH 44 3199 9123 0008 89012")
        .creditor(creditor())
        .reference("18 78583")
        .build()
        .unwrap();
    assert_eq!(bill.account().as_str(), "CH4431999123000889012");
}

#[test]
fn account_errors() {
    let cases = [
        ("CH44319991230008890", "IBAN must have exactly 21 characters"),
        ("CH4431999123000899012", "the IBAN is not valid"),
        ("DE89370400440532013000", "IBAN must start with: CH, LI"),
    ];
    for (account, message) in cases {
        let err = BillBuilder::new()
            .account(account)
            .creditor(creditor())
            .build()
            .unwrap_err();
        assert_eq!(err, QrBillError::field("account", message), "{account}");
    }
}

#[test]
fn liechtenstein_account() {
    let bill = BillBuilder::new()
        .account("LI21 0881 0000 2324 013A A")
        .creditor(creditor().country("Fürstentum Liechtenstein"))
        .build()
        .unwrap();
    assert_eq!(bill.account().country(), "LI");
    assert_eq!(bill.creditor().country(), "LI");
}

// --- Countries ---

#[test]
fn creditor_country_names() {
    for name in ["Schweiz", "Suisse", "Svizzera", "Svizra", "Switzerland", "CH", "ch", ""] {
        let bill = BillBuilder::new()
            .account("CH5380005000010283664")
            .creditor(creditor().country(name))
            .build()
            .unwrap();
        assert_eq!(bill.creditor().country(), "CH", "{name:?}");
    }

    let err = BillBuilder::new()
        .account("CH5380005000010283664")
        .creditor(creditor().country("XY"))
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed: creditor.country: the country code 'XY' is not valid"
    );
}

// --- Amounts ---

#[test]
fn amount_inputs() {
    let cases: [(AmountInput, &str); 6] = [
        (".5".into(), "0.50"),
        ("42".into(), "42.00"),
        ("001'800".into(), "1800.00"),
        (" 3.45 ".into(), "3.45"),
        (dec!(35.9).into(), "35.90"),
        (1000u32.into(), "1000.00"),
    ];
    for (input, expected) in cases {
        let bill = BillBuilder::new()
            .account("CH5380005000010283664")
            .creditor(creditor())
            .amount(input)
            .build()
            .unwrap();
        assert_eq!(bill.amount().unwrap().as_str(), expected);
    }
}

#[test]
fn amount_errors() {
    for raw in ["1234567890.00", "1.001", "CHF800"] {
        let err = BillBuilder::new()
            .account("CH5380005000010283664")
            .creditor(creditor())
            .amount(raw)
            .build()
            .unwrap_err();
        assert_eq!(err.field_name(), Some("amount"), "{raw}");
    }

    let err = BillBuilder::new()
        .account("CH5380005000010283664")
        .creditor(creditor())
        .amount(1.35)
        .build()
        .unwrap_err();
    assert!(matches!(err, QrBillError::Type(_)));
}

// --- Currencies ---

#[test]
fn euro_bill() {
    let bill = BillBuilder::new()
        .account("CH5380005000010283664")
        .creditor(creditor())
        .currency("EUR".parse().unwrap())
        .build()
        .unwrap();
    assert_eq!(bill.currency(), Currency::Eur);
    assert!(bill.qr_data().contains("\r\nEUR\r\n"));
}

// --- Display ---

#[test]
fn paragraphs_for_receipt_and_payment_part() {
    let address = debtor().build().unwrap();
    assert_eq!(
        address.as_paragraph(72),
        vec![
            "Pia-Maria Rutschmann-Schnyder",
            "Grosse Marktgasse 28",
            "CH-9400 Rorschach"
        ]
    );
    assert_eq!(
        address.as_paragraph(20),
        vec![
            "Pia-Maria",
            "Rutschmann-Schnyder",
            "Grosse Marktgasse 28",
            "CH-9400 Rorschach"
        ]
    );
}

#[test]
fn bill_serializes_to_json() {
    let bill = BillBuilder::new()
        .account("CH4431999123000889012")
        .creditor(creditor())
        .amount("12")
        .reference("18 78583")
        .build()
        .unwrap();
    let json = serde_json::to_value(&bill).unwrap();
    assert_eq!(json["account"], "CH4431999123000889012");
    assert_eq!(json["amount"], "12.00");
    assert_eq!(json["currency"], "Chf");
    assert_eq!(json["reference"]["Qrr"], "000000000000000000001878583");
    assert_eq!(json["creditor"]["Structured"]["city"], "Biel");
}
