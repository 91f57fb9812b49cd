//! Closed sets of vCard `TYPE` values accepted by the formatter.
//!
//! Input strings that do not name a member are normalized to the defaults
//! rather than rejected.

use strum::{AsRefStr, Display, EnumString, VariantArray};

// ─── Email ───────────────────────────────────────────────────────────────────

/// The type attribute of an `EMAIL` line.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display,
  EnumString, VariantArray,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum EmailType {
  Home,
  Work,
  #[default]
  Other,
}

impl EmailType {
  /// Every accepted email type, in declaration order.
  pub fn allowed() -> &'static [EmailType] {
    Self::VARIANTS
  }

  /// Resolve a caller-supplied type, case-insensitively.
  ///
  /// `None` and unknown names both yield [`EmailType::Other`].
  pub fn resolve(raw: Option<&str>) -> EmailType {
    let Some(requested) = raw else {
      return EmailType::default();
    };
    requested.to_uppercase().parse().unwrap_or_else(|_| {
      tracing::debug!(requested = %requested, "unknown email type, using OTHER");
      EmailType::default()
    })
  }
}

// ─── Address ─────────────────────────────────────────────────────────────────

/// One element of the `TYPE=` list on an `ADR` line.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString,
  VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum AddressType {
  Dom,
  Intl,
  Postal,
  Parcel,
  Home,
  Work,
}

const DEFAULT_ADDRESS_TYPES: [AddressType; 3] =
  [AddressType::Intl, AddressType::Postal, AddressType::Parcel];

impl AddressType {
  /// Every accepted address type, in declaration order.
  pub fn allowed() -> &'static [AddressType] {
    Self::VARIANTS
  }

  /// Types used when the caller supplies none we recognize.
  pub fn defaults() -> &'static [AddressType] {
    &DEFAULT_ADDRESS_TYPES
  }

  /// Resolve a comma-separated type list.
  ///
  /// Matching is exact and case-sensitive. The result follows
  /// [`AddressType::allowed`] order with no duplicates; an empty match falls
  /// back to [`AddressType::defaults`].
  pub fn resolve_list(raw: Option<&str>) -> Vec<AddressType> {
    let requested: Vec<AddressType> = raw
      .map(|list| list.split(',').filter_map(|t| t.parse().ok()).collect())
      .unwrap_or_default();

    let resolved: Vec<AddressType> = Self::allowed()
      .iter()
      .copied()
      .filter(|t| requested.contains(t))
      .collect();

    if resolved.is_empty() {
      tracing::debug!(requested = ?raw, "no recognised address types, using defaults");
      Self::defaults().to_vec()
    } else {
      resolved
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn email_type_resolves_case_insensitively() {
    assert_eq!(EmailType::resolve(Some("work")), EmailType::Work);
    assert_eq!(EmailType::resolve(Some("Home")), EmailType::Home);
    assert_eq!(EmailType::resolve(Some("OTHER")), EmailType::Other);
  }

  #[test]
  fn email_type_falls_back_to_other() {
    assert_eq!(EmailType::resolve(None), EmailType::Other);
    assert_eq!(EmailType::resolve(Some("")), EmailType::Other);
    assert_eq!(EmailType::resolve(Some("personal")), EmailType::Other);
  }

  #[test]
  fn email_type_displays_uppercase() {
    assert_eq!(EmailType::Work.to_string(), "WORK");
    assert_eq!(EmailType::default().as_ref(), "OTHER");
  }

  #[test]
  fn allowed_lists_keep_declaration_order() {
    let names: Vec<&str> = AddressType::allowed().iter().map(|t| t.as_ref()).collect();
    assert_eq!(names, ["dom", "intl", "postal", "parcel", "home", "work"]);

    let names: Vec<&str> = EmailType::allowed().iter().map(|t| t.as_ref()).collect();
    assert_eq!(names, ["HOME", "WORK", "OTHER"]);
  }

  #[test]
  fn address_types_follow_allowed_order_without_duplicates() {
    let got = AddressType::resolve_list(Some("work,home,work,dom"));
    assert_eq!(got, [AddressType::Dom, AddressType::Home, AddressType::Work]);
  }

  #[test]
  fn unknown_address_types_are_dropped() {
    let got = AddressType::resolve_list(Some("bogus,home"));
    assert_eq!(got, [AddressType::Home]);
  }

  #[test]
  fn address_type_matching_is_case_sensitive() {
    let got = AddressType::resolve_list(Some("HOME, work"));
    assert_eq!(got, AddressType::defaults());
  }

  #[test]
  fn missing_or_empty_address_types_use_defaults() {
    assert_eq!(AddressType::resolve_list(None), AddressType::defaults());
    assert_eq!(AddressType::resolve_list(Some("")), AddressType::defaults());
    assert_eq!(AddressType::resolve_list(Some(",,")), AddressType::defaults());
  }
}
