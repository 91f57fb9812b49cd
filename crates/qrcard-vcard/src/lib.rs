//! vCard 3.0 payloads for QR codes.
//!
//! Formats a [`ContactRecord`] as `\n`-joined vCard 3.0 text. Pure
//! synchronous and stateless; rendering the QR image is left to the caller.
//!
//! # Quick start
//!
//! ```
//! use qrcard_vcard::{ContactRecord, PersonName, format_v3};
//!
//! let record = ContactRecord::new(PersonName::new("Jane", "Doe"));
//! let card = format_v3(&record).unwrap();
//! assert_eq!(card, "BEGIN:VCARD\nVERSION:3.0\nN:Doe;Jane;;;\nFN:Doe Jane\nEND:VCARD");
//! ```

mod date;
pub mod error;
mod format;
mod payload;

pub use error::{Error, RequiredField, Result};
pub use format::format_v3;
pub use payload::QrText;
pub use qrcard_core::{Address, AddressType, ContactRecord, EmailEntry, EmailType, PersonName};
