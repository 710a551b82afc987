//! Command dispatch.

use std::process::ExitCode;

use anyhow::Result;
use aula_api::{EnrollmentRequest, Registry};
use aula_core::{course::Course, store::AcademicStore, student::NewStudent};

use crate::{
  cli::{
    AttendanceCommand,
    Command,
    CourseCommand,
    CourseFields,
    EnrollCommand,
    GradeCommand,
    StudentCommand,
    StudentFields,
  },
  output::Output,
};

impl From<StudentFields> for NewStudent {
  fn from(f: StudentFields) -> Self {
    NewStudent {
      first_name: f.first_name,
      last_name:  f.last_name,
      major:      f.major,
      birth_date: f.birth_date,
      email:      f.email,
      active:     !f.inactive,
    }
  }
}

impl From<CourseFields> for Course {
  fn from(f: CourseFields) -> Self {
    Course {
      code:       f.code,
      name:       f.name,
      instructor: f.instructor,
      credits:    f.credits,
    }
  }
}

/// Run one command. Registry failures come back as errors carrying the
/// failure's reason.
pub fn execute<S: AcademicStore>(
  registry: &Registry<S>,
  command: Command,
  out: Output,
) -> Result<ExitCode> {
  match command {
    Command::Student(cmd) => student(registry, cmd, out)?,
    Command::Course(cmd) => course(registry, cmd, out)?,
    Command::Enroll(cmd) => return enroll(registry, cmd, out),
    Command::Grade(cmd) => grade(registry, cmd, out)?,
    Command::Attendance(cmd) => attendance(registry, cmd, out)?,
    Command::Dashboard => out.one(&registry.dashboard())?,
    Command::Majors => out.list(&registry.list_majors())?,
  }
  Ok(ExitCode::SUCCESS)
}

fn student<S: AcademicStore>(r: &Registry<S>, cmd: StudentCommand, out: Output) -> Result<()> {
  match cmd {
    StudentCommand::Add(fields) => out.one(&r.register_student(fields.into())?),
    StudentCommand::Update { id, fields } => out.one(&r.update_student(&id, fields.into())?),
    StudentCommand::Delete { id } => out.one(&r.delete_student(&id)?),
    StudentCommand::Show { id } => out.one(&r.student_profile(&id)?),
    StudentCommand::List { active } => out.list(&r.list_students(active)),
    StudentCommand::Search { term } => out.list(&r.search_students(&term)),
    StudentCommand::InCourse { course_code } => out.list(&r.students_in_course(&course_code)),
    StudentCommand::NextId => out.one(&r.next_student_id()?),
  }
}

fn course<S: AcademicStore>(r: &Registry<S>, cmd: CourseCommand, out: Output) -> Result<()> {
  match cmd {
    CourseCommand::Add(fields) => out.one(&r.register_course(fields.into())?),
    CourseCommand::Update(fields) => out.one(&r.update_course(fields.into())?),
    CourseCommand::Delete { code } => out.one(&r.delete_course(&code)?),
    CourseCommand::Show { code } => out.one(&r.get_course(&code)?),
    CourseCommand::List => out.list(&r.list_courses()),
    CourseCommand::Search { term } => out.list(&r.search_courses(&term)),
  }
}

fn enroll<S: AcademicStore>(r: &Registry<S>, cmd: EnrollCommand, out: Output) -> Result<ExitCode> {
  match cmd {
    EnrollCommand::Add { student_id, course_code, date, period, status } => {
      let request = EnrollmentRequest { student_id, course_code, date, period, status };
      out.one(&r.register_enrollment(request)?)?;
    }
    EnrollCommand::Check { student_id, course_code } => {
      let enrolled = r.enrollment_exists(&student_id, &course_code);
      if out.json {
        println!("{enrolled}");
      }
      return Ok(if enrolled { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }
    EnrollCommand::List => out.list(&r.list_enrollments())?,
    EnrollCommand::Search { term } => out.list(&r.search_enrollments(&term))?,
    EnrollCommand::Delete { student_id, course_code } => {
      out.one(&r.delete_enrollment(&student_id, &course_code)?)?
    }
  }
  Ok(ExitCode::SUCCESS)
}

fn grade<S: AcademicStore>(r: &Registry<S>, cmd: GradeCommand, out: Output) -> Result<()> {
  match cmd {
    GradeCommand::Set { student_id, course_code, n1, n2, n3 } => {
      out.one(&r.register_grade(&student_id, &course_code, [n1, n2, n3])?)
    }
    GradeCommand::List { course: Some(code), .. } => out.list(&r.grades_for_course(&code)),
    GradeCommand::List { student: Some(id), .. } => out.list(&r.grades_for_student(&id)),
    GradeCommand::List { .. } => out.list(&r.list_grades()),
    GradeCommand::Search { term } => out.list(&r.search_grades(&term)),
    GradeCommand::Delete { student_id, course_code } => {
      out.one(&r.delete_grade(&student_id, &course_code)?)
    }
  }
}

fn attendance<S: AcademicStore>(
  r: &Registry<S>,
  cmd: AttendanceCommand,
  out: Output,
) -> Result<()> {
  match cmd {
    AttendanceCommand::Mark { student_id, course_code, date, status } => {
      out.one(&r.register_attendance(&student_id, &course_code, &date, &status)?)
    }
    AttendanceCommand::Status { student_id, course_code, date } => {
      let status = r
        .attendance_status(&student_id, &course_code, &date)
        .map_or_else(|| "(none)".to_owned(), |s| s.to_string());
      out.one(&status)
    }
    AttendanceCommand::List { course: Some(code), date: Some(date) } => {
      out.list(&r.attendance_for_course(&code, &date))
    }
    AttendanceCommand::List { .. } => out.list(&r.list_attendance()),
    AttendanceCommand::Search { term } => out.list(&r.search_attendance(&term)),
    AttendanceCommand::Delete { student_id, course_code, date } => {
      out.one(&r.delete_attendance(&student_id, &course_code, &date)?)
    }
  }
}
