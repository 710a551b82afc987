//! [`TextStore`]: the flat-file implementation of [`AcademicStore`].

use std::{
  fs,
  io::ErrorKind,
  path::PathBuf,
  sync::atomic::{AtomicU64, Ordering},
};

use aula_codec::LineCodec;
use aula_core::{
  attendance::Attendance,
  course::Course,
  enrollment::Enrollment,
  grade::Grade,
  store::AcademicStore,
  student::{NewStudent, Student, max_numeric_id, next_student_id},
};

use crate::{Error, Line, Result, StoreConfig, Table};

/// Majors offered when no majors file exists.
pub const DEFAULT_MAJORS: [&str; 3] = ["Ingeniería de Sistemas", "Administración", "Contabilidad"];

// ─── Store ───────────────────────────────────────────────────────────────────

/// An academic records store backed by one text file per entity.
#[derive(Debug)]
pub struct TextStore {
  students:    Table<Student>,
  courses:     Table<Course>,
  enrollments: Table<Enrollment>,
  grades:      Table<Grade>,
  attendance:  Table<Attendance>,
  majors_path: PathBuf,
  /// Highest numeric student id seen since open: the file's maximum at
  /// open, every id issued, and every id deleted. Never goes down.
  issued_id:   AtomicU64,
}

impl TextStore {
  /// Bind the tables to the configured paths and create any missing file
  /// with its header.
  pub fn open(config: &StoreConfig) -> Result<Self> {
    let store = Self {
      students:    Table::new(config.students_path()),
      courses:     Table::new(config.courses_path()),
      enrollments: Table::new(config.enrollments_path()),
      grades:      Table::new(config.grades_path()),
      attendance:  Table::new(config.attendance_path()),
      majors_path: config.majors_path(),
      issued_id:   AtomicU64::new(0),
    };
    store.students.initialize()?;
    store.courses.initialize()?;
    store.enrollments.initialize()?;
    store.grades.initialize()?;
    store.attendance.initialize()?;

    let seed = max_numeric_id(store.students.try_scan()?.iter().map(Student::id));
    store.issued_id.store(seed.unwrap_or(0), Ordering::SeqCst);
    tracing::debug!(data_dir = %config.data_dir.display(), "opened text store");
    Ok(store)
  }

  /// `max(numeric ids) + 1` over the student file, never at or below an id
  /// this instance has seen; `2024001` when there is nothing to go on.
  pub fn generate_next_id(&self) -> Result<String> {
    let students = self.students.try_scan()?;
    let in_file = max_numeric_id(students.iter().map(Student::id));
    let issued = Some(self.issued_id.load(Ordering::SeqCst)).filter(|&n| n > 0);
    Ok(next_student_id(in_file.max(issued)).to_string())
  }
}

/// Remove the first record matching `pred` and rewrite the table. A miss
/// leaves the file untouched; rows that did not decode are written back as
/// they were.
fn remove_where<T: LineCodec>(
  table: &Table<T>,
  entity: &'static str,
  key: impl FnOnce() -> String,
  pred: impl Fn(&T) -> bool,
) -> Result<T> {
  let mut lines = table.try_scan_lines()?;
  let found = find_record(&lines, pred)
    .map(|index| lines.remove(index))
    .and_then(Line::into_record);
  let Some(removed) = found else {
    return Err(Error::NotFound { entity, key: key() });
  };
  table.rewrite_lines(&lines)?;
  Ok(removed)
}

/// The index of the first decoded record matching `pred`.
fn find_record<T>(lines: &[Line<T>], pred: impl Fn(&T) -> bool) -> Option<usize> {
  lines.iter().position(|l| l.record().is_some_and(&pred))
}

/// Replace the first record matching `pred` with `record`, or append it if
/// none matches, then rewrite the table.
fn upsert_where<T: LineCodec + Clone>(
  table: &Table<T>,
  record: T,
  pred: impl Fn(&T) -> bool,
) -> Result<(T, bool)> {
  let mut lines = table.try_scan_lines()?;
  let replaced = match find_record(&lines, pred) {
    Some(index) => {
      lines[index] = Line::Record(record.clone());
      true
    }
    None => {
      lines.push(Line::Record(record.clone()));
      false
    }
  };
  table.rewrite_lines(&lines)?;
  Ok((record, replaced))
}

/// Replace the first record matching `pred`; fail if there is none.
fn replace_where<T: LineCodec + Clone>(
  table: &Table<T>,
  entity: &'static str,
  key: impl FnOnce() -> String,
  record: T,
  pred: impl Fn(&T) -> bool,
) -> Result<T> {
  let mut lines = table.try_scan_lines()?;
  let Some(index) = find_record(&lines, pred) else {
    return Err(Error::NotFound { entity, key: key() });
  };
  lines[index] = Line::Record(record.clone());
  table.rewrite_lines(&lines)?;
  Ok(record)
}

// ─── AcademicStore impl ──────────────────────────────────────────────────────

impl AcademicStore for TextStore {
  type Error = Error;

  // ── Students ──────────────────────────────────────────────────────────────

  fn next_student_id(&self) -> Result<String> { self.generate_next_id() }

  fn add_student(&self, input: NewStudent) -> Result<Student> {
    let id = self.generate_next_id()?;
    let student = input.into_student(id);
    self.students.append(&student)?;

    if let Ok(n) = student.id().parse::<u64>() {
      self.issued_id.fetch_max(n, Ordering::SeqCst);
    }
    tracing::info!(id = student.id(), "registered student");
    Ok(student)
  }

  fn list_students(&self) -> Vec<Student> { self.students.scan_all() }

  fn update_student(&self, student: Student) -> Result<Student> {
    let id = student.id().to_owned();
    let updated = replace_where(
      &self.students,
      "student",
      || id.clone(),
      student,
      |s| s.id() == id,
    )?;
    tracing::info!(id = updated.id(), "updated student");
    Ok(updated)
  }

  fn remove_student(&self, id: &str) -> Result<Student> {
    let removed = remove_where(&self.students, "student", || id.to_owned(), |s| s.id() == id)?;
    if let Some(n) = max_numeric_id([removed.id()]) {
      self.issued_id.fetch_max(n, Ordering::SeqCst);
    }
    tracing::info!(id, "deleted student");
    Ok(removed)
  }

  // ── Courses ───────────────────────────────────────────────────────────────

  fn add_course(&self, course: Course) -> Result<Course> {
    if self.courses.try_scan()?.iter().any(|c| c.code == course.code) {
      return Err(Error::DuplicateCourse(course.code));
    }
    self.courses.append(&course)?;
    tracing::info!(code = %course.code, "registered course");
    Ok(course)
  }

  fn list_courses(&self) -> Vec<Course> { self.courses.scan_all() }

  fn update_course(&self, course: Course) -> Result<Course> {
    let code = course.code.clone();
    let updated = replace_where(
      &self.courses,
      "course",
      || code.clone(),
      course,
      |c| c.code == code,
    )?;
    tracing::info!(code = %updated.code, "updated course");
    Ok(updated)
  }

  fn remove_course(&self, code: &str) -> Result<Course> {
    let removed = remove_where(&self.courses, "course", || code.to_owned(), |c| c.code == code)?;
    tracing::info!(code, "deleted course");
    Ok(removed)
  }

  // ── Enrollments ───────────────────────────────────────────────────────────

  fn add_enrollment(&self, enrollment: Enrollment) -> Result<Enrollment> {
    let taken = self
      .enrollments
      .try_scan()?
      .iter()
      .any(|e| e.is_for(&enrollment.student_id, &enrollment.course_code));
    if taken {
      return Err(Error::DuplicateEnrollment {
        student_id:  enrollment.student_id,
        course_code: enrollment.course_code,
      });
    }

    self.enrollments.append(&enrollment)?;
    tracing::info!(
      student_id = %enrollment.student_id,
      course_code = %enrollment.course_code,
      "registered enrollment"
    );
    Ok(enrollment)
  }

  fn list_enrollments(&self) -> Vec<Enrollment> { self.enrollments.scan_all() }

  fn remove_enrollment(&self, student_id: &str, course_code: &str) -> Result<Enrollment> {
    let removed = remove_where(
      &self.enrollments,
      "enrollment",
      || format!("{student_id}/{course_code}"),
      |e| e.is_for(student_id, course_code),
    )?;
    tracing::info!(student_id, course_code, "deleted enrollment");
    Ok(removed)
  }

  // ── Grades ────────────────────────────────────────────────────────────────

  fn upsert_grade(&self, grade: Grade) -> Result<Grade> {
    let student_id = grade.student_id().to_owned();
    let course_code = grade.course_code().to_owned();
    let (grade, replaced) =
      upsert_where(&self.grades, grade, |g| g.is_for(&student_id, &course_code))?;
    tracing::info!(%student_id, %course_code, replaced, "saved grade");
    Ok(grade)
  }

  fn list_grades(&self) -> Vec<Grade> { self.grades.scan_all() }

  fn remove_grade(&self, student_id: &str, course_code: &str) -> Result<Grade> {
    let removed = remove_where(
      &self.grades,
      "grade",
      || format!("{student_id}/{course_code}"),
      |g| g.is_for(student_id, course_code),
    )?;
    tracing::info!(student_id, course_code, "deleted grade");
    Ok(removed)
  }

  // ── Attendance ────────────────────────────────────────────────────────────

  fn upsert_attendance(&self, attendance: Attendance) -> Result<Attendance> {
    let key = (
      attendance.student_id.clone(),
      attendance.course_code.clone(),
      attendance.date.clone(),
    );
    let (attendance, replaced) = upsert_where(&self.attendance, attendance, |a| {
      a.is_for(&key.0, &key.1, &key.2)
    })?;
    tracing::info!(
      student_id = %key.0,
      course_code = %key.1,
      date = %key.2,
      status = %attendance.status,
      replaced,
      "saved attendance"
    );
    Ok(attendance)
  }

  fn list_attendance(&self) -> Vec<Attendance> { self.attendance.scan_all() }

  fn remove_attendance(
    &self,
    student_id: &str,
    course_code: &str,
    date: &str,
  ) -> Result<Attendance> {
    let removed = remove_where(
      &self.attendance,
      "attendance",
      || format!("{student_id}/{course_code}/{date}"),
      |a| a.is_for(student_id, course_code, date),
    )?;
    tracing::info!(student_id, course_code, date, "deleted attendance");
    Ok(removed)
  }

  // ── Reference data ────────────────────────────────────────────────────────

  fn list_majors(&self) -> Vec<String> {
    let defaults = || DEFAULT_MAJORS.iter().map(|m| (*m).to_owned()).collect();
    match fs::read_to_string(&self.majors_path) {
      Ok(contents) => {
        let majors: Vec<String> = contents
          .lines()
          .map(str::trim)
          .filter(|l| !l.is_empty())
          .map(str::to_owned)
          .collect();
        if majors.is_empty() { defaults() } else { majors }
      }
      Err(e) if e.kind() == ErrorKind::NotFound => defaults(),
      Err(e) => {
        tracing::warn!(path = %self.majors_path.display(), error = %e, "majors unreadable");
        defaults()
      }
    }
  }
}
