//! Course catalogue operations.

use aula_core::{
  course::{Course, normalize_code, title_case},
  store::AcademicStore,
};

use crate::{Failure, Outcome, Registry, search_or_all, validate};

/// Upper-case the code and title-case the name and instructor.
fn clean_course(course: Course) -> Outcome<Course> {
  let code = normalize_code(&validate::key("course code", &course.code)?);
  let name = title_case(&validate::plain_text("course name", &course.name)?);
  if name.is_empty() {
    return Err(Failure::validation("course name is required"));
  }
  let instructor = title_case(&validate::plain_text("instructor", &course.instructor)?);
  Ok(Course { code, name, instructor, credits: course.credits })
}

impl<S: AcademicStore> Registry<S> {
  /// Fails with a duplicate failure when the code is taken.
  pub fn register_course(&self, course: Course) -> Outcome<Course> {
    let course = clean_course(course)?;
    self.store.add_course(course).map_err(Failure::from_store)
  }

  /// Replace the course with the same (normalised) code.
  pub fn update_course(&self, course: Course) -> Outcome<Course> {
    let course = clean_course(course)?;
    self.store.update_course(course).map_err(Failure::from_store)
  }

  pub fn delete_course(&self, code: &str) -> Outcome<Course> {
    self
      .store
      .remove_course(&normalize_code(code))
      .map_err(Failure::from_store)
  }

  pub fn get_course(&self, code: &str) -> Outcome<Course> {
    let code = normalize_code(code);
    self
      .store
      .get_course(&code)
      .ok_or_else(|| Failure::not_found(format!("no course with code {code}")))
  }

  pub fn list_courses(&self) -> Vec<Course> { self.store.list_courses() }

  /// Courses whose code, name or instructor contain `term`.
  pub fn search_courses(&self, term: &str) -> Vec<Course> {
    search_or_all(self.store.list_courses(), term)
  }
}
