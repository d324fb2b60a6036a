//! Snapshot of a complete payload, one numbered field per line.

use qrbill::core::*;

fn numbered_fields(data: &str) -> String {
    data.split("\r\n")
        .enumerate()
        .map(|(i, field)| format!("{i:02}: {field:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn full_bill_payload_snapshot() {
    let bill = BillBuilder::new()
        .account("CH44 3199 9123 0008 8901 2")
        .creditor(
            AddressBuilder::new("Robert Schneider AG")
                .street("Rue du Lac")
                .house_num("1268")
                .postal_code("2501")
                .city("Biel"),
        )
        .amount("1'949.75")
        .debtor(
            AddressBuilder::new("Pia-Maria Rutschmann-Schnyder")
                .line1("Grosse Marktgasse 28")
                .line2("9400 Rorschach"),
        )
        .reference("21 00000 00003 13947 14300 09017")
        .unstructured_message("Order of 15 June 2020")
        .billing_info("//S1/10/10201409/11/200701/20/140.000-53")
        .add_alternative_procedure("Name AV1: UV;UltraPay005;12345")
        .build()
        .unwrap();

    insta::assert_snapshot!("full_bill_payload", numbered_fields(&bill.qr_data()));
}
