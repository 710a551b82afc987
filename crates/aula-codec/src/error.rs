//! Error types for the aula-codec line format.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{field} contains a delimiter or line break: {value:?}")]
  DelimiterInField { field: &'static str, value: String },

  #[error("malformed {field}: {value:?}")]
  MalformedField { field: &'static str, value: String },

  #[error(transparent)]
  Core(#[from] aula_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
