//! Error type for `aula-store-text`.

use std::{io, path::PathBuf};

use aula_core::store::{FailureKind, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error on {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("codec error: {0}")]
  Codec(#[from] aula_codec::Error),

  #[error(transparent)]
  Core(#[from] aula_core::Error),

  #[error("{entity} not found: {key}")]
  NotFound { entity: &'static str, key: String },

  #[error("student {student_id} is already enrolled in {course_code}")]
  DuplicateEnrollment {
    student_id:  String,
    course_code: String,
  },

  #[error("course code already exists: {0}")]
  DuplicateCourse(String),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
    let path = path.into();
    move |source| Self::Io { path, source }
  }
}

impl StoreError for Error {
  fn kind(&self) -> FailureKind {
    match self {
      Self::Io { .. } => FailureKind::Storage,
      Self::Codec(_) | Self::Core(_) => FailureKind::Validation,
      Self::NotFound { .. } => FailureKind::NotFound,
      Self::DuplicateEnrollment { .. } | Self::DuplicateCourse(_) => FailureKind::Duplicate,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
