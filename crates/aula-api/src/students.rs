//! Student registration, lookup and the per-student profile.

use std::collections::HashSet;

use aula_core::{
  course::normalize_code,
  store::AcademicStore,
  student::{NewStudent, Student},
  view::StudentProfile,
};

use crate::{Failure, Outcome, Registry, search_or_all, validate};

impl<S: AcademicStore> Registry<S> {
  fn clean_student(&self, input: NewStudent) -> Outcome<NewStudent> {
    Ok(NewStudent {
      first_name: validate::person_name("first name", &input.first_name)?,
      last_name:  validate::person_name("last name", &input.last_name)?,
      major:      validate::plain_text("major", &input.major)?,
      birth_date: validate::birth_date(&input.birth_date, validate::today())?,
      email:      validate::email(&input.email)?,
      active:     input.active,
    })
  }

  /// The id the next registration will receive.
  pub fn next_student_id(&self) -> Outcome<String> {
    self.store.next_student_id().map_err(Failure::from_store)
  }

  pub fn register_student(&self, input: NewStudent) -> Outcome<Student> {
    let input = self.clean_student(input)?;
    self.store.add_student(input).map_err(Failure::from_store)
  }

  /// Replace every field of student `id` except the id itself.
  pub fn update_student(&self, id: &str, input: NewStudent) -> Outcome<Student> {
    let id = validate::key("student id", id)?;
    let input = self.clean_student(input)?;
    self
      .store
      .update_student(input.into_student(id))
      .map_err(Failure::from_store)
  }

  pub fn delete_student(&self, id: &str) -> Outcome<Student> {
    self.store.remove_student(id.trim()).map_err(Failure::from_store)
  }

  pub fn get_student(&self, id: &str) -> Outcome<Student> {
    let id = id.trim();
    self
      .store
      .get_student(id)
      .ok_or_else(|| Failure::not_found(format!("no student with id {id}")))
  }

  pub fn list_students(&self, active_only: bool) -> Vec<Student> {
    let students = self.store.list_students();
    if active_only {
      students.into_iter().filter(|s| s.active).collect()
    } else {
      students
    }
  }

  /// Students whose id, names, major or email contain `term`.
  pub fn search_students(&self, term: &str) -> Vec<Student> {
    search_or_all(self.store.list_students(), term)
  }

  /// Active students enrolled in `course_code`, in student-file order.
  pub fn students_in_course(&self, course_code: &str) -> Vec<Student> {
    let code = normalize_code(course_code);
    let enrolled: HashSet<String> = self
      .store
      .list_enrollments()
      .into_iter()
      .filter(|e| e.course_code == code)
      .map(|e| e.student_id)
      .collect();
    self
      .list_students(true)
      .into_iter()
      .filter(|s| enrolled.contains(s.id()))
      .collect()
  }

  pub fn student_profile(&self, id: &str) -> Outcome<StudentProfile> {
    let student = self.get_student(id)?;
    Ok(StudentProfile::assemble(
      student,
      self.store.list_grades(),
      self.store.list_attendance(),
    ))
  }

  pub fn list_majors(&self) -> Vec<String> { self.store.list_majors() }
}
