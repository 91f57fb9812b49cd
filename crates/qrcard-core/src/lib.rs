//! Contact record types for qrcard.
//!
//! Plain value objects describing a person to be rendered as a vCard. This
//! crate has no formatting logic; see `qrcard-vcard` for that.

pub mod contact;
pub mod error;
pub mod kind;

pub use contact::{Address, ContactRecord, EmailEntry, PersonName};
pub use error::{Error, Result};
pub use kind::{AddressType, EmailType};
