//! The operation contract for Aula user interfaces.
//!
//! [`Registry`] wraps any [`AcademicStore`] and exposes register, update,
//! delete, list and search for every entity. Inputs are validated and
//! normalised before they reach the store, list results come back enriched
//! with display names, and every failure is reported as a [`Failure`] with a
//! readable reason. Backend errors never escape.
//!
//! ```rust,ignore
//! let store = TextStore::open(&StoreConfig::default())?;
//! let registry = Registry::new(store);
//! let students = registry.search_students("ana");
//! ```

pub mod attendance;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod error;
pub mod grades;
pub mod students;
mod validate;

use aula_core::{
  search::{Searchable, search},
  store::AcademicStore,
  view::Directory,
};

pub use dashboard::Dashboard;
pub use enrollments::EnrollmentRequest;
pub use error::{Failure, Outcome};

/// Registry operations over one store.
#[derive(Debug)]
pub struct Registry<S> {
  store: S,
}

impl<S: AcademicStore> Registry<S> {
  pub fn new(store: S) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  /// Name lookups built from the current students and courses.
  fn directory(&self) -> Directory {
    Directory::new(&self.store.list_students(), &self.store.list_courses())
  }
}

/// [`search`], except that a blank term keeps everything.
fn search_or_all<T: Searchable>(items: Vec<T>, term: &str) -> Vec<T> {
  if term.trim().is_empty() { items } else { search(items, term) }
}

#[cfg(test)]
mod tests;
