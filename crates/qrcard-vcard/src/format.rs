//! vCard 3.0 formatter.
//!
//! Produces `\n`-joined lines with no trailing newline, the shape QR encoders
//! expect for a `BEGIN:VCARD` payload. Values are written verbatim.

use qrcard_core::{Address, AddressType, ContactRecord, EmailEntry, EmailType, PersonName};

use crate::{
  date::is_date,
  error::{Error, RequiredField, Result},
};

// ─── Field helpers ────────────────────────────────────────────────────────────

/// Positional sub-field value; absent becomes the empty segment.
fn or_empty(value: &Option<String>) -> &str {
  value.as_deref().unwrap_or_default()
}

/// The value of an optional scalar property, if there is anything to emit.
fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

fn required(value: &Option<String>, field: RequiredField) -> Result<&str> {
  non_empty(value).ok_or(Error::MissingRequiredField(field))
}

// ─── Name ─────────────────────────────────────────────────────────────────────

fn push_name(lines: &mut Vec<String>, name: &PersonName) -> Result<()> {
  let first = required(&name.first_name, RequiredField::FirstName)?;
  let last  = required(&name.last_name, RequiredField::LastName)?;

  lines.push(format!(
    "N:{};{};{};{};{}",
    last,
    first,
    or_empty(&name.other_name),
    or_empty(&name.name_prefix),
    or_empty(&name.name_suffix),
  ));

  let full = match non_empty(&name.display_name) {
    Some(display) => display.to_string(),
    None          => format!("{last} {first}"),
  };
  lines.push(format!("FN:{full}"));
  Ok(())
}

// ─── Address ──────────────────────────────────────────────────────────────────

fn push_address(lines: &mut Vec<String>, address: &Address) {
  let types = AddressType::resolve_list(address.kind.as_deref());
  let type_str = types
    .iter()
    .map(|t| t.as_ref())
    .collect::<Vec<&str>>()
    .join(",");

  lines.push(format!(
    "ADR;TYPE={}:{};{};{};{};{};{};{}",
    type_str,
    or_empty(&address.po_address),
    or_empty(&address.extended_address),
    or_empty(&address.street),
    or_empty(&address.locality),
    or_empty(&address.region),
    or_empty(&address.postal_code),
    or_empty(&address.country),
  ));
}

// ─── Email ────────────────────────────────────────────────────────────────────

fn push_emails(lines: &mut Vec<String>, emails: &[EmailEntry]) {
  for (idx, entry) in emails.iter().enumerate() {
    match entry {
      EmailEntry::Typed { email, kind } => {
        let Some(address) = non_empty(email) else {
          tracing::debug!(index = idx, "skipping email entry without an address");
          continue;
        };
        let email_type = EmailType::resolve(kind.as_deref());
        lines.push(format!("EMAIL;{email_type};PREF,INTERNET:{address}"));
      }

      // Bare addresses carry no INTERNET attribute.
      EmailEntry::Bare(address) if !address.is_empty() => {
        lines.push(format!("EMAIL;{};PREF:{address}", EmailType::default()));
      }

      EmailEntry::Bare(_) => {
        tracing::debug!(index = idx, "skipping empty email entry");
      }
    }
  }
}

// ─── Public API ───────────────────────────────────────────────────────────────

/// Format `record` as a vCard 3.0 string.
///
/// Fails with [`Error::MissingRequiredField`] before producing anything when
/// the person name, first name or last name is absent or empty.
pub fn format_v3(record: &ContactRecord) -> Result<String> {
  let name = record
    .person_name
    .as_ref()
    .ok_or(Error::MissingRequiredField(RequiredField::PersonName))?;

  let mut lines: Vec<String> = Vec::new();
  lines.push("BEGIN:VCARD".to_string());
  lines.push("VERSION:3.0".to_string());

  push_name(&mut lines, name)?;

  if let Some(address) = &record.address {
    push_address(&mut lines, address);
  }

  if let Some(birthday) = &record.birthday {
    if is_date(birthday) {
      lines.push(format!("BDAY:{birthday}"));
    } else {
      tracing::debug!(birthday = %birthday, "omitting birthday not in YYYY-MM-DD form");
    }
  }

  if let Some(emails) = &record.emails {
    push_emails(&mut lines, emails);
  }

  if let Some(org) = non_empty(&record.organisation_name) {
    lines.push(format!("ORG:{org}"));
  }
  if let Some(role) = non_empty(&record.job_title) {
    lines.push(format!("ROLE:{role}"));
  }

  lines.push("END:VCARD".to_string());
  tracing::trace!(lines = lines.len(), "formatted vCard 3.0");

  Ok(lines.join("\n"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
