//! Grade registration and grade reports.

use aula_core::{course::normalize_code, grade::Grade, store::AcademicStore, view::GradeView};

use crate::{Failure, Outcome, Registry, search_or_all, validate};

impl<S: AcademicStore> Registry<S> {
  /// Record the three scores for a student in a course, replacing any
  /// earlier scores for the same pair. Each score must be within `0..=20`.
  pub fn register_grade(
    &self,
    student_id: &str,
    course_code: &str,
    scores: [f64; 3],
  ) -> Outcome<Grade> {
    let student_id = validate::key("student id", student_id)?;
    let course_code = normalize_code(&validate::key("course code", course_code)?);
    let grade = Grade::new(student_id, course_code, scores)?;
    self.store.upsert_grade(grade).map_err(Failure::from_store)
  }

  /// Every grade with names, average and pass status.
  pub fn list_grades(&self) -> Vec<GradeView> {
    let directory = self.directory();
    self
      .store
      .list_grades()
      .into_iter()
      .map(|g| directory.grade(g))
      .collect()
  }

  pub fn grades_for_course(&self, course_code: &str) -> Vec<GradeView> {
    let code = normalize_code(course_code);
    self
      .list_grades()
      .into_iter()
      .filter(|g| g.grade.course_code() == code)
      .collect()
  }

  pub fn grades_for_student(&self, student_id: &str) -> Vec<GradeView> {
    let id = student_id.trim();
    self
      .list_grades()
      .into_iter()
      .filter(|g| g.grade.student_id() == id)
      .collect()
  }

  pub fn search_grades(&self, term: &str) -> Vec<GradeView> {
    search_or_all(self.list_grades(), term)
  }

  pub fn delete_grade(&self, student_id: &str, course_code: &str) -> Outcome<Grade> {
    self
      .store
      .remove_grade(student_id.trim(), &normalize_code(course_code))
      .map_err(Failure::from_store)
  }
}
