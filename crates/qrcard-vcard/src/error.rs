//! Error types for the qrcard-vcard formatter.

use strum::Display;
use thiserror::Error;

/// A field the formatter cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "camelCase")]
pub enum RequiredField {
  PersonName,
  FirstName,
  LastName,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("vCard3: {0} must be supplied")]
  MissingRequiredField(RequiredField),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
