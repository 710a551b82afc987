//! Attendance: one status per student, course and date.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Error, Result};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  AsRefStr,
  EnumString,
  EnumIter,
)]
pub enum AttendanceStatus {
  #[default]
  Presente,
  Tardanza,
  Ausente,
}

impl AttendanceStatus {
  /// Parse one of the three stored spellings exactly.
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s).map_err(|_| Error::UnknownAttendanceStatus(s.to_owned()))
  }
}

/// Keyed by `(student_id, course_code, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
  pub student_id:  String,
  pub course_code: String,
  /// ISO `YYYY-MM-DD`.
  pub date:        String,
  pub status:      AttendanceStatus,
}

impl Attendance {
  pub fn is_for(&self, student_id: &str, course_code: &str, date: &str) -> bool {
    self.student_id == student_id && self.course_code == course_code && self.date == date
  }
}
