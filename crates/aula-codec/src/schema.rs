//! Versioned column layouts.
//!
//! Each entity declares every column it currently writes and the value a
//! column takes when an older, shorter line does not provide it. This is
//! the only place legacy-row compatibility is handled; record decoders read
//! through [`Row`] and never check line lengths themselves.

use crate::{DELIMITER, Error, Result};

/// The value a missing trailing column decodes to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
  Text(&'static str),
  Flag(bool),
  Integer(i64),
  Decimal(f64),
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
  /// Header name, also used in error messages.
  pub name:    &'static str,
  pub default: FieldDefault,
}

impl Column {
  pub const fn text(name: &'static str) -> Self {
    Self { name, default: FieldDefault::Text("") }
  }

  pub const fn new(name: &'static str, default: FieldDefault) -> Self {
    Self { name, default }
  }
}

#[derive(Debug)]
pub struct Schema {
  pub columns: &'static [Column],
  /// Indices of the columns that make up the record key. A line with any of
  /// them empty is skipped.
  pub key:     &'static [usize],
}

impl Schema {
  /// Number of columns in the current layout.
  pub const fn arity(&self) -> usize { self.columns.len() }

  /// The header line, identical on every write.
  pub fn header(&self) -> String {
    let names: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
    names.join(&DELIMITER.to_string())
  }
}

// ─── Row ─────────────────────────────────────────────────────────────────────

/// One split line, with typed access that falls back to the schema's
/// defaults for columns the line does not reach. Columns past the schema's
/// arity are ignored.
pub struct Row<'a> {
  schema: &'static Schema,
  fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
  pub(crate) fn split(schema: &'static Schema, line: &'a str) -> Self {
    let fields = line.split(DELIMITER).take(schema.arity()).collect();
    Self { schema, fields }
  }

  pub(crate) fn key_is_empty(&self) -> bool {
    self
      .schema
      .key
      .iter()
      .any(|&i| self.fields.get(i).is_none_or(|v| v.trim().is_empty()))
  }

  fn column(&self, index: usize) -> &'static Column { &self.schema.columns[index] }

  /// The raw value, or `None` when the line is too short or the value is
  /// blank.
  fn present(&self, index: usize) -> Option<&'a str> {
    self
      .fields
      .get(index)
      .copied()
      .filter(|v| !v.trim().is_empty())
  }

  pub fn text(&self, index: usize) -> String {
    match (self.fields.get(index), self.column(index).default) {
      (Some(v), _) => (*v).to_owned(),
      (None, FieldDefault::Text(d)) => d.to_owned(),
      (None, _) => String::new(),
    }
  }

  /// `"1"` is true, any other stored value is false.
  pub fn flag(&self, index: usize) -> bool {
    match (self.present(index), self.column(index).default) {
      (Some(v), _) => v.trim() == "1",
      (None, FieldDefault::Flag(d)) => d,
      (None, _) => false,
    }
  }

  pub fn integer(&self, index: usize) -> Result<i64> {
    let column = self.column(index);
    match (self.present(index), column.default) {
      (Some(v), _) => v.trim().parse().map_err(|_| Error::MalformedField {
        field: column.name,
        value: v.to_owned(),
      }),
      (None, FieldDefault::Integer(d)) => Ok(d),
      (None, _) => Ok(0),
    }
  }

  pub fn decimal(&self, index: usize) -> Result<f64> {
    let column = self.column(index);
    match (self.present(index), column.default) {
      (Some(v), _) => v.trim().parse().map_err(|_| Error::MalformedField {
        field: column.name,
        value: v.to_owned(),
      }),
      (None, FieldDefault::Decimal(d)) => Ok(d),
      (None, _) => Ok(0.0),
    }
  }

  pub(crate) fn malformed(&self, index: usize) -> Error {
    Error::MalformedField {
      field: self.column(index).name,
      value: self.fields.get(index).copied().unwrap_or_default().to_owned(),
    }
  }
}
