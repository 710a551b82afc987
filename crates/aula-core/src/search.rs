//! Case-insensitive substring search over a fixed set of text fields.

use crate::{
  course::Course,
  student::Student,
  view::{AttendanceView, EnrollmentView, GradeView},
};

/// A record that declares which of its fields a search term is matched
/// against.
pub trait Searchable {
  fn search_fields(&self) -> Vec<&str>;
}

/// True when the lower-cased, trimmed `term` is a substring of any search
/// field. An empty term matches everything; callers that want something else
/// must check for it first.
pub fn matches<T: Searchable + ?Sized>(item: &T, term: &str) -> bool {
  let term = term.trim().to_lowercase();
  matches_lowered(item, &term)
}

fn matches_lowered<T: Searchable + ?Sized>(item: &T, term: &str) -> bool {
  item
    .search_fields()
    .into_iter()
    .any(|field| field.to_lowercase().contains(term))
}

/// Keep the items matching `term`, preserving their order.
pub fn search<T: Searchable>(items: impl IntoIterator<Item = T>, term: &str) -> Vec<T> {
  let term = term.trim().to_lowercase();
  items
    .into_iter()
    .filter(|item| matches_lowered(item, &term))
    .collect()
}

// ─── Impls ───────────────────────────────────────────────────────────────────

impl Searchable for Student {
  fn search_fields(&self) -> Vec<&str> {
    vec![
      self.person.id.as_str(),
      self.person.first_name.as_str(),
      self.person.last_name.as_str(),
      self.major.as_str(),
      self.email.as_str(),
    ]
  }
}

impl Searchable for Course {
  fn search_fields(&self) -> Vec<&str> {
    vec![self.code.as_str(), self.name.as_str(), self.instructor.as_str()]
  }
}

impl Searchable for EnrollmentView {
  fn search_fields(&self) -> Vec<&str> {
    vec![
      self.enrollment.student_id.as_str(),
      self.enrollment.course_code.as_str(),
      self.student_name.as_str(),
      self.course_name.as_str(),
      self.enrollment.period.as_str(),
      self.enrollment.status.as_str(),
    ]
  }
}

impl Searchable for GradeView {
  fn search_fields(&self) -> Vec<&str> {
    vec![
      self.grade.student_id(),
      self.grade.course_code(),
      self.student_name.as_str(),
      self.course_name.as_str(),
    ]
  }
}

impl Searchable for AttendanceView {
  fn search_fields(&self) -> Vec<&str> {
    vec![
      self.attendance.student_id.as_str(),
      self.attendance.course_code.as_str(),
      self.attendance.date.as_str(),
      self.student_name.as_str(),
      self.course_name.as_str(),
      self.attendance.status.as_ref(),
    ]
  }
}
