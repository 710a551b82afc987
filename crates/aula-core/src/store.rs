//! The `AcademicStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `aula-store-text`).
//! The registry layer depends on this abstraction, not on any concrete
//! backend.
//!
//! Reads never fail: a backend that cannot read its data logs the problem
//! and returns an empty result. Writes return `Result` and classify their
//! errors through [`StoreError`] so callers can report them without knowing
//! the backend's error type.

use serde::Serialize;
use strum::Display;

use crate::{
  attendance::Attendance,
  course::Course,
  enrollment::Enrollment,
  grade::Grade,
  student::{NewStudent, Student},
};

// ─── Error classification ────────────────────────────────────────────────────

/// The broad category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
  /// A caller-supplied value is out of domain.
  Validation,
  /// The key is already taken.
  Duplicate,
  /// No record has the given key.
  NotFound,
  /// The backing storage could not be read or written.
  Storage,
}

pub trait StoreError: std::error::Error {
  fn kind(&self) -> FailureKind;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an academic records backend.
pub trait AcademicStore {
  type Error: StoreError + Send + Sync + 'static;

  // ── Students ──────────────────────────────────────────────────────────

  /// The id the next [`AcademicStore::add_student`] will assign.
  fn next_student_id(&self) -> Result<String, Self::Error>;

  /// Assign an id and persist a new student.
  fn add_student(&self, input: NewStudent) -> Result<Student, Self::Error>;

  /// All students in storage order.
  fn list_students(&self) -> Vec<Student>;

  fn get_student(&self, id: &str) -> Option<Student> {
    self.list_students().into_iter().find(|s| s.id() == id)
  }

  /// Replace the stored student with the same id.
  fn update_student(&self, student: Student) -> Result<Student, Self::Error>;

  fn remove_student(&self, id: &str) -> Result<Student, Self::Error>;

  // ── Courses ───────────────────────────────────────────────────────────

  /// Persist a new course. Fails if the code is already taken.
  fn add_course(&self, course: Course) -> Result<Course, Self::Error>;

  fn list_courses(&self) -> Vec<Course>;

  fn get_course(&self, code: &str) -> Option<Course> {
    self.list_courses().into_iter().find(|c| c.code == code)
  }

  /// Replace the stored course with the same code.
  fn update_course(&self, course: Course) -> Result<Course, Self::Error>;

  fn remove_course(&self, code: &str) -> Result<Course, Self::Error>;

  // ── Enrollments ───────────────────────────────────────────────────────

  fn enrollment_exists(&self, student_id: &str, course_code: &str) -> bool {
    self
      .list_enrollments()
      .iter()
      .any(|e| e.is_for(student_id, course_code))
  }

  /// Persist a new enrollment. Fails if the pair is already enrolled; the
  /// existing row is left as it was.
  fn add_enrollment(&self, enrollment: Enrollment) -> Result<Enrollment, Self::Error>;

  fn list_enrollments(&self) -> Vec<Enrollment>;

  fn remove_enrollment(
    &self,
    student_id: &str,
    course_code: &str,
  ) -> Result<Enrollment, Self::Error>;

  // ── Grades ────────────────────────────────────────────────────────────

  /// Insert the grade, or replace the one with the same student and course.
  fn upsert_grade(&self, grade: Grade) -> Result<Grade, Self::Error>;

  fn list_grades(&self) -> Vec<Grade>;

  fn remove_grade(&self, student_id: &str, course_code: &str) -> Result<Grade, Self::Error>;

  // ── Attendance ────────────────────────────────────────────────────────

  /// Insert the record, or replace the one with the same student, course and
  /// date.
  fn upsert_attendance(&self, attendance: Attendance) -> Result<Attendance, Self::Error>;

  fn list_attendance(&self) -> Vec<Attendance>;

  fn remove_attendance(
    &self,
    student_id: &str,
    course_code: &str,
    date: &str,
  ) -> Result<Attendance, Self::Error>;

  // ── Reference data ────────────────────────────────────────────────────

  /// Majors offered to students, in display order.
  fn list_majors(&self) -> Vec<String>;
}
