//! The summary shown on the landing screen.

use aula_core::{grade::PASSING_AVERAGE, store::AcademicStore, view::GradeView};
use serde::Serialize;

use crate::Registry;

/// How many of the latest grade rows the summary carries.
pub const RECENT_GRADES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
  pub active_students: usize,
  pub courses:         usize,
  /// Mean of every grade row's average, two decimals; `0.0` with no grades.
  pub overall_average: f64,
  /// Grade rows whose average is below the passing mark.
  pub at_risk:         usize,
  /// The last rows of the grades file, newest first.
  pub recent_grades:   Vec<GradeView>,
}

impl<S: AcademicStore> Registry<S> {
  pub fn dashboard(&self) -> Dashboard {
    let grades = self.list_grades();
    let overall_average = if grades.is_empty() {
      0.0
    } else {
      let mean = grades.iter().map(|g| g.average).sum::<f64>() / grades.len() as f64;
      (mean * 100.0).round() / 100.0
    };
    let at_risk = grades.iter().filter(|g| g.average < PASSING_AVERAGE).count();
    let recent_grades = grades.into_iter().rev().take(RECENT_GRADES).collect();

    Dashboard {
      active_students: self.list_students(true).len(),
      courses: self.store.list_courses().len(),
      overall_average,
      at_risk,
      recent_grades,
    }
  }
}
