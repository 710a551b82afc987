//! Attendance roll-call.

use aula_core::{
  attendance::{Attendance, AttendanceStatus},
  course::normalize_code,
  store::AcademicStore,
  view::AttendanceView,
};

use crate::{Failure, Outcome, Registry, search_or_all, validate};

impl<S: AcademicStore> Registry<S> {
  /// Mark a student for one course session. `status` must be one of
  /// `Presente`, `Tardanza` or `Ausente`; marking the same session again
  /// replaces the earlier status.
  pub fn register_attendance(
    &self,
    student_id: &str,
    course_code: &str,
    date: &str,
    status: &str,
  ) -> Outcome<Attendance> {
    let attendance = Attendance {
      student_id:  validate::key("student id", student_id)?,
      course_code: normalize_code(&validate::key("course code", course_code)?),
      date:        validate::record_date("attendance date", date)?,
      status:      AttendanceStatus::parse(status.trim())?,
    };
    self
      .store
      .upsert_attendance(attendance)
      .map_err(Failure::from_store)
  }

  /// The status already recorded for a session, if any.
  pub fn attendance_status(
    &self,
    student_id: &str,
    course_code: &str,
    date: &str,
  ) -> Option<AttendanceStatus> {
    let code = normalize_code(course_code);
    self
      .store
      .list_attendance()
      .into_iter()
      .find(|a| a.is_for(student_id.trim(), &code, date.trim()))
      .map(|a| a.status)
  }

  pub fn list_attendance(&self) -> Vec<AttendanceView> {
    let directory = self.directory();
    self
      .store
      .list_attendance()
      .into_iter()
      .map(|a| directory.attendance(a))
      .collect()
  }

  /// The roll for one course session.
  pub fn attendance_for_course(&self, course_code: &str, date: &str) -> Vec<AttendanceView> {
    let code = normalize_code(course_code);
    let date = date.trim();
    self
      .list_attendance()
      .into_iter()
      .filter(|a| a.attendance.course_code == code && a.attendance.date == date)
      .collect()
  }

  pub fn search_attendance(&self, term: &str) -> Vec<AttendanceView> {
    search_or_all(self.list_attendance(), term)
  }

  pub fn delete_attendance(
    &self,
    student_id: &str,
    course_code: &str,
    date: &str,
  ) -> Outcome<Attendance> {
    self
      .store
      .remove_attendance(student_id.trim(), &normalize_code(course_code), date.trim())
      .map_err(Failure::from_store)
  }
}
