//! # qrbill
//!
//! Validation and payload encoding for Swiss QR-bill payment slips, following
//! the Swiss Payments Council implementation guidelines (payload version `0200`).
//!
//! The crate covers the data side of a QR-bill: addresses, IBAN / QR-IBAN
//! handling, QRR and SCOR payment references, amount normalization, and the
//! CRLF-separated text that goes into the Swiss QR code. Rendering the slip and
//! drawing the QR symbol are left to other crates.
//!
//! Amounts are never taken from floating point values; pass a string, an
//! integer or a [`rust_decimal::Decimal`].
//!
//! ## Quick Start
//!
//! ```rust
//! use qrbill::core::*;
//!
//! let bill = BillBuilder::new()
//!     .account("CH44 3199 9123 0008 8901 2")
//!     .creditor(
//!         AddressBuilder::new("Robert Schneider AG")
//!             .street("Rue du Lac")
//!             .house_num("1268")
//!             .postal_code("2501")
//!             .city("Biel")
//!             .build()
//!             .unwrap(),
//!     )
//!     .amount("1'949.75")
//!     .reference("21 00000 00003 13947 14300 09017")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bill.formatted_amount().as_deref(), Some("1 949.75"));
//! assert!(bill.qr_data().starts_with("SPC\r\n0200\r\n1\r\nCH4431999123000889012\r\n"));
//! assert!(bill.qr_data().ends_with("\r\nEPD"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Bill types, validators, QR payload serializer |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
