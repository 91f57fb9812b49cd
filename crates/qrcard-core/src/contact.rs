//! The contact record handed to the vCard formatter.
//!
//! Every field is optional on the wire, including the ones the formatter
//! requires, so a record with a missing name still decodes and the formatter
//! can report exactly which field is absent.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::Result;

// ─── Lenient decoding ────────────────────────────────────────────────────────

/// Decode an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let value = Value::deserialize(deserializer)?;
  if value.is_null() {
    return Ok(None);
  }
  match serde_json::from_value(value) {
    Ok(decoded) => Ok(Some(decoded)),
    Err(err) => {
      tracing::debug!(error = %err, "dropping malformed optional field");
      Ok(None)
    }
  }
}

/// Decode an optional list, dropping elements of the wrong shape.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let Value::Array(items) = Value::deserialize(deserializer)? else {
    tracing::debug!("dropping list field that is not an array");
    return Ok(None);
  };
  let decoded = items
    .into_iter()
    .enumerate()
    .filter_map(|(idx, item)| match serde_json::from_value(item) {
      Ok(entry) => Some(entry),
      Err(err) => {
        tracing::debug!(index = idx, error = %err, "dropping malformed list entry");
        None
      }
    })
    .collect();
  Ok(Some(decoded))
}

// ─── Name ────────────────────────────────────────────────────────────────────

/// A structured person name (maps to vCard `N` and `FN`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonName {
  /// Required by the formatter.
  #[serde(deserialize_with = "lenient")]
  pub first_name:   Option<String>,
  /// Required by the formatter.
  #[serde(deserialize_with = "lenient")]
  pub last_name:    Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub other_name:   Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub name_prefix:  Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub name_suffix:  Option<String>,
  /// Overrides the computed `FN` value when non-empty.
  #[serde(deserialize_with = "lenient")]
  pub display_name: Option<String>,
}

impl PersonName {
  pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
    Self {
      first_name: Some(first_name.into()),
      last_name: Some(last_name.into()),
      ..Self::default()
    }
  }

  pub fn with_other_name(mut self, other_name: impl Into<String>) -> Self {
    self.other_name = Some(other_name.into());
    self
  }

  pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.name_prefix = Some(prefix.into());
    self
  }

  pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
    self.name_suffix = Some(suffix.into());
    self
  }

  pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
    self.display_name = Some(display_name.into());
    self
  }
}

// ─── Address ─────────────────────────────────────────────────────────────────

/// A postal address (maps to vCard `ADR`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
  /// Comma-separated address types, e.g. `"home,postal"`. Unrecognized
  /// entries are dropped by the formatter.
  #[serde(rename = "type", deserialize_with = "lenient")]
  pub kind:             Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub po_address:       Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub extended_address: Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub street:           Option<String>,
  /// City or locality.
  #[serde(deserialize_with = "lenient")]
  pub locality:         Option<String>,
  /// State, province, or region.
  #[serde(deserialize_with = "lenient")]
  pub region:           Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub postal_code:      Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub country:          Option<String>,
}

// ─── Email ───────────────────────────────────────────────────────────────────

/// One entry of [`ContactRecord::emails`].
///
/// Decodes from either a JSON string or an `{"email", "type"}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmailEntry {
  /// A bare address; always uses the default email type.
  Bare(String),
  /// An address with a caller-supplied type, resolved case-insensitively.
  Typed {
    #[serde(default, deserialize_with = "lenient")]
    email: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    kind:  Option<String>,
  },
}

impl EmailEntry {
  pub fn typed(email: impl Into<String>, kind: impl Into<String>) -> Self {
    EmailEntry::Typed {
      email: Some(email.into()),
      kind:  Some(kind.into()),
    }
  }
}

impl From<&str> for EmailEntry {
  fn from(address: &str) -> Self {
    EmailEntry::Bare(address.to_string())
  }
}

impl From<String> for EmailEntry {
  fn from(address: String) -> Self {
    EmailEntry::Bare(address)
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// Everything the formatter can put on a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
  /// Required by the formatter.
  #[serde(deserialize_with = "lenient")]
  pub person_name:       Option<PersonName>,
  #[serde(deserialize_with = "lenient")]
  pub address:           Option<Address>,
  /// Expected as `YYYY-MM-DD`; anything else is omitted from the card.
  #[serde(deserialize_with = "lenient")]
  pub birthday:          Option<String>,
  #[serde(deserialize_with = "lenient_list")]
  pub emails:            Option<Vec<EmailEntry>>,
  #[serde(deserialize_with = "lenient")]
  pub organisation_name: Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub job_title:         Option<String>,
}

impl ContactRecord {
  pub fn new(person_name: PersonName) -> Self {
    Self {
      person_name: Some(person_name),
      ..Self::default()
    }
  }

  /// Decode a record from its camelCase JSON form. Unknown keys are ignored.
  pub fn from_json(input: &str) -> Result<Self> {
    Ok(serde_json::from_str(input)?)
  }

  pub fn with_address(mut self, address: Address) -> Self {
    self.address = Some(address);
    self
  }

  pub fn with_birthday(mut self, birthday: impl Into<String>) -> Self {
    self.birthday = Some(birthday.into());
    self
  }

  /// Append one email entry, keeping input order.
  pub fn with_email(mut self, entry: impl Into<EmailEntry>) -> Self {
    self.emails.get_or_insert_with(Vec::new).push(entry.into());
    self
  }

  pub fn with_organisation(mut self, name: impl Into<String>) -> Self {
    self.organisation_name = Some(name.into());
    self
  }

  pub fn with_job_title(mut self, title: impl Into<String>) -> Self {
    self.job_title = Some(title.into());
    self
  }
}
