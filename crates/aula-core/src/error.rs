//! Error types for `aula-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{field} must be between 0 and 20, got {value}")]
  GradeOutOfRange { field: &'static str, value: f64 },

  #[error("unknown attendance status: {0:?}")]
  UnknownAttendanceStatus(String),

  #[error("{0}")]
  Validation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
