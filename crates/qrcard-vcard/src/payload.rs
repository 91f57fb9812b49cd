//! Text handed to a QR encoder.

use std::fmt;

use qrcard_core::ContactRecord;

use crate::{error::Result, format::format_v3};

/// The string a QR code will carry: free text, a URL, or a vCard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrText(String);

impl QrText {
  /// Arbitrary text, taken verbatim.
  pub fn text(text: impl Into<String>) -> Self {
    Self(text.into())
  }

  /// A URL, taken verbatim. No scheme or syntax checks are applied.
  pub fn url(url: impl Into<String>) -> Self {
    Self(url.into())
  }

  /// A vCard 3.0 card built from `record`.
  pub fn vcard_v3(record: &ContactRecord) -> Result<Self> {
    format_v3(record).map(Self)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_string(self) -> String {
    self.0
  }
}

impl AsRef<str> for QrText {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for QrText {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
