//! Pipe-delimited line codec for Aula records.
//!
//! Converts between single text lines and [`aula_core`] domain types. Pure
//! synchronous; no filesystem access.
//!
//! # Quick start
//!
//! ```
//! use aula_codec::{decode_line, encode_record};
//! use aula_core::course::Course;
//!
//! let course: Course = decode_line("MAT101|Calculo I|J. Perez|4").unwrap().unwrap();
//! assert_eq!(course.credits, 4);
//! assert_eq!(encode_record(&course).unwrap(), "MAT101|Calculo I|J. Perez|4");
//! ```

pub mod error;
mod records;
pub mod schema;

pub use aula_core::{DELIMITER, RESERVED_CHARS};
pub use error::{Error, Result};
pub use schema::{Column, FieldDefault, Row, Schema};

// ─── Codec trait ─────────────────────────────────────────────────────────────

/// A record with a line representation.
pub trait LineCodec: Sized {
  /// The current column layout and the defaults for older, shorter lines.
  const SCHEMA: &'static Schema;

  /// Build the record from a row whose key columns are known to be
  /// non-empty.
  fn from_row(row: &Row<'_>) -> Result<Self>;

  /// One string per schema column, in order.
  fn to_fields(&self) -> Vec<String>;
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Decode one data line.
///
/// Trailing whitespace, line ending included, is not part of the last field.
/// Returns `Ok(None)` for blank lines and lines with an empty key column;
/// such rows are dropped rather than reported.
pub fn decode_line<T: LineCodec>(line: &str) -> Result<Option<T>> {
  let line = line.trim_end();
  let row = Row::split(T::SCHEMA, line);
  if row.key_is_empty() {
    return Ok(None);
  }
  T::from_row(&row).map(Some)
}

/// Encode one record as a line, without the trailing newline.
///
/// Fails if any field contains the delimiter or a line break, since such a
/// value cannot be read back as the same record.
pub fn encode_record<T: LineCodec>(record: &T) -> Result<String> {
  let fields = record.to_fields();
  for (column, value) in T::SCHEMA.columns.iter().zip(&fields) {
    if value.contains(RESERVED_CHARS) {
      return Err(Error::DelimiterInField {
        field: column.name,
        value: value.clone(),
      });
    }
  }
  Ok(fields.join(&DELIMITER.to_string()))
}

/// The header line for `T`'s file.
pub fn header_line<T: LineCodec>() -> String { T::SCHEMA.header() }
