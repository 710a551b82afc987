//! The failure value every registry operation reports.

use aula_core::store::{FailureKind, StoreError};
use serde::Serialize;
use thiserror::Error;

/// Why an operation did not happen, in words a user can read.
///
/// This is the only error type that leaves the registry. Backend errors are
/// classified and flattened into it, so callers never see a storage error
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{reason}")]
pub struct Failure {
  pub kind:   FailureKind,
  pub reason: String,
}

impl Failure {
  pub fn new(kind: FailureKind, reason: impl Into<String>) -> Self {
    Self { kind, reason: reason.into() }
  }

  pub fn validation(reason: impl Into<String>) -> Self {
    Self::new(FailureKind::Validation, reason)
  }

  pub fn not_found(reason: impl Into<String>) -> Self {
    Self::new(FailureKind::NotFound, reason)
  }

  /// Classify and flatten a backend error.
  pub fn from_store<E: StoreError>(err: E) -> Self {
    let kind = err.kind();
    if kind == FailureKind::Storage {
      tracing::warn!(error = %err, "storage failure");
    }
    Self::new(kind, err.to_string())
  }
}

impl From<aula_core::Error> for Failure {
  fn from(err: aula_core::Error) -> Self { Self::validation(err.to_string()) }
}

/// The result of a registry operation.
pub type Outcome<T> = Result<T, Failure>;
