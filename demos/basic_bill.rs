use chrono::NaiveDate;
use qrbill::core::*;
use rust_decimal_macros::dec;

fn main() {
    // ── 1. QR-IBAN with a QR reference ────────────────────────────────
    let bill = BillBuilder::new()
        .account("CH44 3199 9123 0008 8901 2")
        .creditor(
            AddressBuilder::new("Robert Schneider AG")
                .street("Rue du Lac")
                .house_num("1268")
                .postal_code("2501")
                .city("Biel")
                .country("Schweiz"),
        )
        .amount(dec!(1949.75))
        .debtor(
            AddressBuilder::new("Pia-Maria Rutschmann-Schnyder")
                .street("Grosse Marktgasse")
                .house_num("28")
                .postal_code("9400")
                .city("Rorschach"),
        )
        .reference("21 00000 00003 13947 14300 09017")
        .unstructured_message("Order of 15 June 2020")
        .due_date(NaiveDate::from_ymd_opt(2020, 7, 31).unwrap())
        .language(Language::De)
        .build()
        .expect("valid bill");

    println!("=== Payment part ===");
    println!("Account:   {}", bill.account().formatted());
    println!("Payable to:");
    for line in bill.creditor().as_paragraph(MAX_LINE_CHARS) {
        println!("  {line}");
    }
    println!("Reference: {}", bill.formatted_reference());
    if let Some(amount) = bill.formatted_amount() {
        println!("Amount:    {} {}", bill.currency(), amount);
    }
    if let Some(due) = bill.formatted_due_date() {
        println!("Due:       {due}");
    }

    println!("\n=== QR payload ===");
    for (i, field) in bill.qr_data().split("\r\n").enumerate() {
        println!("{i:02} {field}");
    }

    // ── 2. Plain IBAN, creditor reference, open amount ────────────────
    let bill = BillBuilder::new()
        .account("CH93 0076 2011 6238 5295 7")
        .creditor(
            AddressBuilder::new("Verein Musterclub")
                .line1("Postfach 12")
                .line2("8000 Zürich"),
        )
        .reference("RF18 5390 0754 7034")
        .currency(Currency::Eur)
        .build()
        .expect("valid bill");

    println!("\n=== Open-amount bill ===");
    println!("Reference type: {}", bill.reference().ref_type().code());
    println!("Amount:         {:?}", bill.formatted_amount());

    // ── 3. Rebuild with an amount ─────────────────────────────────────
    let bill = bill
        .to_builder()
        .amount("1'200.5")
        .build()
        .expect("valid bill");
    println!("Rebuilt amount: {:?}", bill.formatted_amount());
}
