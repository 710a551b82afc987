//! Display-ready read models.
//!
//! Views join foreign keys (student id, course code) onto names. They are
//! computed per query from the current students and courses and are never
//! stored. A key with no match (a student deleted after enrolling, say)
//! shows up as the raw key instead of a name.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{
  attendance::{Attendance, AttendanceStatus},
  course::Course,
  enrollment::Enrollment,
  grade::{Grade, GradeStatus},
  student::Student,
};

// ─── Directory ───────────────────────────────────────────────────────────────

/// Lookup tables from student id to full name and from course code to name.
#[derive(Debug, Clone, Default)]
pub struct Directory {
  students: HashMap<String, String>,
  courses:  HashMap<String, String>,
}

impl Directory {
  pub fn new(students: &[Student], courses: &[Course]) -> Self {
    Self {
      students: students
        .iter()
        .map(|s| (s.id().to_owned(), s.full_name()))
        .collect(),
      courses:  courses
        .iter()
        .map(|c| (c.code.clone(), c.name.clone()))
        .collect(),
    }
  }

  /// The student's full name, or `id` itself when no student has that id.
  pub fn student_name<'a>(&'a self, id: &'a str) -> &'a str {
    self.students.get(id).map_or(id, String::as_str)
  }

  /// The course name, or `code` itself when no course has that code.
  pub fn course_name<'a>(&'a self, code: &'a str) -> &'a str {
    self.courses.get(code).map_or(code, String::as_str)
  }

  pub fn enrollment(&self, enrollment: Enrollment) -> EnrollmentView {
    EnrollmentView {
      student_name: self.student_name(&enrollment.student_id).to_owned(),
      course_name: self.course_name(&enrollment.course_code).to_owned(),
      enrollment,
    }
  }

  pub fn grade(&self, grade: Grade) -> GradeView {
    GradeView {
      student_name: self.student_name(grade.student_id()).to_owned(),
      course_name: self.course_name(grade.course_code()).to_owned(),
      average: grade.average(),
      status: grade.status(),
      grade,
    }
  }

  pub fn attendance(&self, attendance: Attendance) -> AttendanceView {
    AttendanceView {
      student_name: self.student_name(&attendance.student_id).to_owned(),
      course_name: self.course_name(&attendance.course_code).to_owned(),
      attendance,
    }
  }
}

// ─── Composite rows ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollmentView {
  #[serde(flatten)]
  pub enrollment:   Enrollment,
  pub student_name: String,
  pub course_name:  String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeView {
  #[serde(flatten)]
  pub grade:        Grade,
  pub student_name: String,
  pub course_name:  String,
  pub average:      f64,
  pub status:       GradeStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceView {
  #[serde(flatten)]
  pub attendance:   Attendance,
  pub student_name: String,
  pub course_name:  String,
}

// ─── Student profile ─────────────────────────────────────────────────────────

/// A student together with their per-course averages and attendance history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
  pub student:    Student,
  /// Course code to average for that course.
  pub grades:     BTreeMap<String, f64>,
  pub attendance: Vec<Attendance>,
}

impl StudentProfile {
  /// Build the profile of `student` from every grade and attendance row,
  /// keeping only the ones that belong to it.
  pub fn assemble(
    student: Student,
    grades: impl IntoIterator<Item = Grade>,
    attendance: impl IntoIterator<Item = Attendance>,
  ) -> Self {
    let grades = grades
      .into_iter()
      .filter(|g| g.student_id() == student.id())
      .map(|g| (g.course_code().to_owned(), g.average()))
      .collect();
    let attendance = attendance
      .into_iter()
      .filter(|a| a.student_id == student.id())
      .collect();
    Self { student, grades, attendance }
  }

  /// Mean of the per-course averages; `0.0` with no grades.
  pub fn average(&self) -> f64 {
    if self.grades.is_empty() {
      return 0.0;
    }
    self.grades.values().sum::<f64>() / self.grades.len() as f64
  }

  pub fn count_with_status(&self, status: AttendanceStatus) -> usize {
    self.attendance.iter().filter(|a| a.status == status).count()
  }

  /// The person line followed by the major and the overall average.
  pub fn display_info(&self) -> String {
    format!(
      "{} | Carrera: {} | Promedio: {:.2}",
      self.student.person.display_info(),
      self.student.major,
      self.average()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::student::PersonData;

  fn ana() -> Student {
    Student {
      person:     PersonData {
        id:         "2024001".into(),
        first_name: "Ana".into(),
        last_name:  "Lopez".into(),
      },
      major:      "Contabilidad".into(),
      birth_date: "2001-05-04".into(),
      email:      "ana@example.com".into(),
      active:     true,
    }
  }

  fn calculo() -> Course {
    Course {
      code:       "MAT101".into(),
      name:       "Calculo I".into(),
      instructor: "J. Perez".into(),
      credits:    4,
    }
  }

  #[test]
  fn resolves_known_keys() {
    let dir = Directory::new(&[ana()], &[calculo()]);
    let view = dir.enrollment(Enrollment::new("2024001", "MAT101", "2024-03-01"));
    assert_eq!(view.student_name, "Ana Lopez");
    assert_eq!(view.course_name, "Calculo I");
  }

  #[test]
  fn dangling_keys_fall_back_to_the_literal() {
    let dir = Directory::new(&[], &[calculo()]);
    let grade = Grade::new("2024999", "FIS200", [12.0, 14.0, 16.0]).unwrap();
    let view = dir.grade(grade);
    assert_eq!(view.student_name, "2024999");
    assert_eq!(view.course_name, "FIS200");
    assert_eq!(view.average, 14.0);
  }

  #[test]
  fn profile_display_appends_major_and_average() {
    let grades = vec![
      Grade::new("2024001", "MAT101", [12.0, 12.0, 12.0]).unwrap(),
      Grade::new("2024001", "FIS200", [16.0, 16.0, 16.0]).unwrap(),
      Grade::new("2024002", "MAT101", [20.0, 20.0, 20.0]).unwrap(),
    ];
    let attendance = vec![Attendance {
      student_id:  "2024001".into(),
      course_code: "MAT101".into(),
      date:        "2024-03-02".into(),
      status:      AttendanceStatus::Tardanza,
    }];

    let profile = StudentProfile::assemble(ana(), grades, attendance);
    assert_eq!(profile.grades.len(), 2);
    assert_eq!(profile.count_with_status(AttendanceStatus::Tardanza), 1);
    assert_eq!(
      profile.display_info(),
      "ID: 2024001 | Nombre: Ana Lopez | Carrera: Contabilidad | Promedio: 14.00"
    );
  }
}
