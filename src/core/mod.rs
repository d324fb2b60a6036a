//! Core QR-bill types, validators and the QR payload serializer.
//!
//! Everything a renderer needs comes out of a validated [`Bill`]: the
//! payload text for the QR symbol plus the formatted strings printed next
//! to it.

mod address;
mod amount;
mod builder;
pub mod countries;
mod error;
mod iban;
pub mod qr;
mod reference;
mod types;

pub use address::*;
pub use amount::*;
pub use builder::*;
pub use error::*;
pub use iban::*;
pub use reference::*;
pub use types::*;
