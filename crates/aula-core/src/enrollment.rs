//! Enrollment of a student in a course.

use serde::{Deserialize, Serialize};

/// Period assumed for rows written before the column existed.
pub const DEFAULT_PERIOD: &str = "2024-1";

/// Status assumed for rows written before the column existed.
pub const DEFAULT_STATUS: &str = "Matriculado";

/// At most one row exists per `(student_id, course_code)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
  pub student_id:  String,
  pub course_code: String,
  /// ISO `YYYY-MM-DD`.
  pub date:        String,
  pub period:      String,
  pub status:      String,
}

impl Enrollment {
  pub fn new(
    student_id: impl Into<String>,
    course_code: impl Into<String>,
    date: impl Into<String>,
  ) -> Self {
    Self {
      student_id:  student_id.into(),
      course_code: course_code.into(),
      date:        date.into(),
      period:      DEFAULT_PERIOD.to_owned(),
      status:      DEFAULT_STATUS.to_owned(),
    }
  }

  pub fn is_for(&self, student_id: &str, course_code: &str) -> bool {
    self.student_id == student_id && self.course_code == course_code
  }
}
