//! Enrollment registration.

use aula_core::{
  course::normalize_code,
  enrollment::{DEFAULT_PERIOD, DEFAULT_STATUS, Enrollment},
  store::AcademicStore,
  view::EnrollmentView,
};
use serde::Deserialize;

use crate::{Failure, Outcome, Registry, search_or_all, validate};

/// Input to [`Registry::register_enrollment`]. Omitted or blank optional
/// fields take their defaults: today's date, period `2024-1`, status
/// `Matriculado`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnrollmentRequest {
  pub student_id:  String,
  pub course_code: String,
  pub date:        Option<String>,
  pub period:      Option<String>,
  pub status:      Option<String>,
}

impl EnrollmentRequest {
  pub fn new(student_id: impl Into<String>, course_code: impl Into<String>) -> Self {
    Self {
      student_id: student_id.into(),
      course_code: course_code.into(),
      ..Self::default()
    }
  }
}

fn text_or(field: &str, value: Option<&str>, default: &str) -> Outcome<String> {
  let value = validate::plain_text(field, value.unwrap_or_default())?;
  Ok(if value.is_empty() { default.to_owned() } else { value })
}

impl<S: AcademicStore> Registry<S> {
  /// Enroll a student in a course. A second enrollment for the same pair is
  /// refused and the existing row is kept.
  pub fn register_enrollment(&self, request: EnrollmentRequest) -> Outcome<Enrollment> {
    let student_id = validate::key("student id", &request.student_id)?;
    let course_code = normalize_code(&validate::key("course code", &request.course_code)?);
    let date = match request.date.as_deref().map(str::trim) {
      Some(d) if !d.is_empty() => validate::record_date("enrollment date", d)?,
      _ => validate::format_date(validate::today()),
    };

    let enrollment = Enrollment {
      student_id,
      course_code,
      date,
      period: text_or("period", request.period.as_deref(), DEFAULT_PERIOD)?,
      status: text_or("status", request.status.as_deref(), DEFAULT_STATUS)?,
    };
    self.store.add_enrollment(enrollment).map_err(Failure::from_store)
  }

  pub fn enrollment_exists(&self, student_id: &str, course_code: &str) -> bool {
    self
      .store
      .enrollment_exists(student_id.trim(), &normalize_code(course_code))
  }

  /// Every enrollment with student and course names resolved.
  pub fn list_enrollments(&self) -> Vec<EnrollmentView> {
    let directory = self.directory();
    self
      .store
      .list_enrollments()
      .into_iter()
      .map(|e| directory.enrollment(e))
      .collect()
  }

  /// Enrollments whose ids, names, period or status contain `term`.
  pub fn search_enrollments(&self, term: &str) -> Vec<EnrollmentView> {
    search_or_all(self.list_enrollments(), term)
  }

  pub fn delete_enrollment(&self, student_id: &str, course_code: &str) -> Outcome<Enrollment> {
    self
      .store
      .remove_enrollment(student_id.trim(), &normalize_code(course_code))
      .map_err(Failure::from_store)
  }
}
