//! `BDAY` value validation.

use chrono::NaiveDate;

const BDAY_FORMAT: &str = "%Y-%m-%d";

/// True when `value` is a real calendar date written exactly as `YYYY-MM-DD`.
///
/// The value must survive a parse/format round trip unchanged, which rejects
/// out-of-range days, unpadded fields and other separators.
pub(crate) fn is_date(value: &str) -> bool {
  NaiveDate::parse_from_str(value, BDAY_FORMAT)
    .is_ok_and(|d| d.format(BDAY_FORMAT).to_string() == value)
}
