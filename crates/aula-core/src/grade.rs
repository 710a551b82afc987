//! Grades: three scores per student and course, with a derived average.
//!
//! A [`Grade`] can only be built through [`Grade::new`], which rejects any
//! score outside `0..=20`. There is no way to hold an invalid grade.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{Error, Result};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 20.0;

/// Averages strictly below this are failing.
pub const PASSING_AVERAGE: f64 = 10.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum GradeStatus {
  Aprobado,
  Desaprobado,
}

impl GradeStatus {
  pub fn for_average(average: f64) -> Self {
    if average >= PASSING_AVERAGE { Self::Aprobado } else { Self::Desaprobado }
  }
}

/// Keyed by `(student_id, course_code)`; registering again for the same key
/// replaces the scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grade {
  student_id:  String,
  course_code: String,
  scores:      [f64; 3],
}

impl Grade {
  pub fn new(
    student_id: impl Into<String>,
    course_code: impl Into<String>,
    scores: [f64; 3],
  ) -> Result<Self> {
    const FIELDS: [&str; 3] = ["n1", "n2", "n3"];
    for (field, value) in FIELDS.into_iter().zip(scores) {
      if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(Error::GradeOutOfRange { field, value });
      }
    }
    Ok(Self {
      student_id: student_id.into(),
      course_code: course_code.into(),
      scores,
    })
  }

  pub fn student_id(&self) -> &str { &self.student_id }

  pub fn course_code(&self) -> &str { &self.course_code }

  pub fn scores(&self) -> [f64; 3] { self.scores }

  /// Mean of the three scores rounded to two decimals.
  pub fn average(&self) -> f64 {
    let mean = self.scores.iter().sum::<f64>() / 3.0;
    (mean * 100.0).round() / 100.0
  }

  pub fn status(&self) -> GradeStatus { GradeStatus::for_average(self.average()) }

  pub fn is_for(&self, student_id: &str, course_code: &str) -> bool {
    self.student_id == student_id && self.course_code == course_code
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn average_is_rounded_to_two_decimals() {
    let g = Grade::new("2024001", "MAT101", [10.0, 11.0, 11.0]).unwrap();
    assert_eq!(g.average(), 10.67);
    assert_eq!(g.status(), GradeStatus::Aprobado);
  }

  #[test]
  fn out_of_range_scores_are_rejected() {
    let err = Grade::new("2024001", "MAT101", [10.0, 20.5, 3.0]).unwrap_err();
    assert!(matches!(err, Error::GradeOutOfRange { field: "n2", .. }));

    let err = Grade::new("2024001", "MAT101", [-1.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(err, Error::GradeOutOfRange { field: "n1", .. }));

    assert!(Grade::new("2024001", "MAT101", [f64::NAN, 0.0, 0.0]).is_err());
  }

  #[test]
  fn bounds_are_inclusive() {
    let g = Grade::new("2024001", "MAT101", [0.0, 20.0, 20.0]).unwrap();
    assert_eq!(g.average(), 13.33);
  }

  #[test]
  fn failing_below_threshold() {
    let g = Grade::new("2024001", "MAT101", [10.0, 10.0, 11.0]).unwrap();
    assert_eq!(g.average(), 10.33);
    assert_eq!(g.status(), GradeStatus::Desaprobado);
  }
}
