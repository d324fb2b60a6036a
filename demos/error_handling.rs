use qrbill::core::*;
use tracing_subscriber::EnvFilter;

fn creditor() -> AddressBuilder {
    AddressBuilder::new("Robert Schneider AG")
        .street("Rue du Lac")
        .house_num("1268")
        .postal_code("2501")
        .city("Biel")
}

fn report(label: &str, result: Result<Bill, QrBillError>) {
    match result {
        Ok(_) => println!("  {label}: ok"),
        Err(QrBillError::Missing(field)) => println!("  {label}: missing '{field}'"),
        Err(QrBillError::Type(msg)) => println!("  {label}: type error: {msg}"),
        Err(e @ QrBillError::Field(_)) | Err(e @ QrBillError::CrossField(_)) => {
            println!(
                "  {label}: {} (field: {})",
                e,
                e.field_name().unwrap_or("?")
            )
        }
        Err(e) => println!("  {label}: {e}"),
    }
}

fn main() {
    // RUST_LOG=qrbill=trace shows each validation step.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ── 1. Missing mandatory fields ───────────────────────────────────
    println!("=== Missing ===");
    report("no account", BillBuilder::new().creditor(creditor()).build());
    report(
        "no creditor",
        BillBuilder::new().account("CH9300762011623852957").build(),
    );

    // ── 2. Single-field errors ────────────────────────────────────────
    println!("\n=== Field ===");
    report(
        "bad checksum",
        BillBuilder::new()
            .account("CH4431999123000899012")
            .creditor(creditor())
            .build(),
    );
    report(
        "foreign IBAN",
        BillBuilder::new()
            .account("DE89370400440532013000")
            .creditor(creditor())
            .build(),
    );
    report(
        "amount too large",
        BillBuilder::new()
            .account("CH9300762011623852957")
            .creditor(creditor())
            .amount("1000000000")
            .build(),
    );
    report(
        "unknown country",
        BillBuilder::new()
            .account("CH9300762011623852957")
            .creditor(creditor().country("XY"))
            .build(),
    );

    // ── 3. Type errors ────────────────────────────────────────────────
    println!("\n=== Type ===");
    report(
        "float amount",
        BillBuilder::new()
            .account("CH9300762011623852957")
            .creditor(creditor())
            .amount(12.5_f64)
            .build(),
    );

    // ── 4. Cross-field errors ─────────────────────────────────────────
    println!("\n=== Cross-field ===");
    report(
        "QR-IBAN without QRR",
        BillBuilder::new()
            .account("CH4431999123000889012")
            .creditor(creditor())
            .build(),
    );
    report(
        "QRR on plain IBAN",
        BillBuilder::new()
            .account("CH9300762011623852957")
            .creditor(creditor())
            .reference("210000000003139471430009017")
            .build(),
    );
    report(
        "additional info too long",
        BillBuilder::new()
            .account("CH9300762011623852957")
            .creditor(creditor())
            .unstructured_message("x".repeat(100))
            .billing_info("y".repeat(41))
            .build(),
    );
}
