#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = s.split('|');
    let account = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    let reference = parts.next().unwrap_or_default();
    let message = parts.next().unwrap_or_default();
    let billing_info = parts.next().unwrap_or_default();
    let procedures: Vec<&str> = parts.take(2).collect();

    let mut builder = qrbill::BillBuilder::new()
        .account(account)
        .creditor(
            qrbill::AddressBuilder::new(name)
                .postal_code("1000")
                .city("Lausanne"),
        )
        .reference(reference)
        .unstructured_message(message)
        .billing_info(billing_info);
    for procedure in &procedures {
        builder = builder.add_alternative_procedure(*procedure);
    }

    // Fields are positional: EPD sits at index 30 and only the trailer follows.
    if let Ok(bill) = builder.build() {
        let payload = bill.qr_data();
        let lines: Vec<&str> = payload.split("\r\n").collect();
        assert_eq!(lines[30], qrbill::qr::TRAILER);

        let procedures = bill.alternative_procedures().len();
        let trailer = if bill.billing_info().is_some() || procedures > 0 {
            1 + procedures
        } else {
            0
        };
        assert_eq!(lines.len(), qrbill::qr::FIXED_FIELD_COUNT + trailer);
        assert!(lines.iter().all(|l| !l.contains(['\r', '\n'])));
    }
});
