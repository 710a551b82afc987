//! Input checks run before anything reaches storage.
//!
//! Every function returns the cleaned value (trimmed, normalised) so callers
//! store exactly what was validated.

use std::sync::LazyLock;

use aula_core::RESERVED_CHARS;
use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::{Failure, Outcome};

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("constant regex pattern is valid")
});

static EMAIL_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("constant regex pattern is valid"));

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate { Local::now().date_naive() }

/// Free text that will be written as one field: no delimiter, no line
/// breaks. Leading and trailing whitespace is dropped.
pub fn plain_text(field: &str, value: &str) -> Outcome<String> {
  if value.contains(RESERVED_CHARS) {
    return Err(Failure::validation(format!(
      "{field} may not contain '|' or line breaks"
    )));
  }
  Ok(value.trim().to_owned())
}

/// A key column: plain text that is not blank.
pub fn key(field: &str, value: &str) -> Outcome<String> {
  let value = plain_text(field, value)?;
  if value.is_empty() {
    return Err(Failure::validation(format!("{field} is required")));
  }
  Ok(value)
}

/// A first or last name: letters (accented ones included) and spaces, at
/// least two characters.
pub fn person_name(field: &str, value: &str) -> Outcome<String> {
  let value = plain_text(field, value)?;
  if value.chars().count() < 2 || !NAME_PATTERN.is_match(&value) {
    return Err(Failure::validation(format!(
      "{field} must be at least 2 letters and contain only letters and spaces"
    )));
  }
  Ok(value)
}

pub fn email(value: &str) -> Outcome<String> {
  let value = value.trim();
  if !EMAIL_PATTERN.is_match(value) {
    return Err(Failure::validation(format!("invalid email: {value:?}")));
  }
  Ok(value.to_owned())
}

/// An ISO `YYYY-MM-DD` calendar date.
pub fn iso_date(field: &str, value: &str) -> Outcome<NaiveDate> {
  NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
    .map_err(|_| Failure::validation(format!("{field} must be a YYYY-MM-DD date, got {value:?}")))
}

/// Empty (unknown), or an ISO date strictly before `today`.
pub fn birth_date(value: &str, today: NaiveDate) -> Outcome<String> {
  let value = value.trim();
  if value.is_empty() {
    return Ok(String::new());
  }
  let date = iso_date("birth date", value)?;
  if date >= today {
    return Err(Failure::validation("birth date must be in the past"));
  }
  Ok(date.format(DATE_FORMAT).to_string())
}

/// An ISO date, re-rendered in canonical form.
pub fn record_date(field: &str, value: &str) -> Outcome<String> {
  Ok(iso_date(field, value)?.format(DATE_FORMAT).to_string())
}

pub fn format_date(date: NaiveDate) -> String { date.format(DATE_FORMAT).to_string() }
