//! Where the store keeps its files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Paths to every backing file, passed to [`crate::TextStore::open`].
///
/// Relative file names resolve against `data_dir`; absolute ones are used as
/// they are.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
  pub data_dir:         PathBuf,
  pub students_file:    PathBuf,
  pub courses_file:     PathBuf,
  pub enrollments_file: PathBuf,
  pub grades_file:      PathBuf,
  pub attendance_file:  PathBuf,
  /// Read-only list of majors, one per line.
  pub majors_file:      PathBuf,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      data_dir:         PathBuf::from("."),
      students_file:    PathBuf::from("estudiantes.txt"),
      courses_file:     PathBuf::from("cursos.txt"),
      enrollments_file: PathBuf::from("matriculas.txt"),
      grades_file:      PathBuf::from("notas.txt"),
      attendance_file:  PathBuf::from("asistencias.txt"),
      majors_file:      PathBuf::from("carreras.txt"),
    }
  }
}

impl StoreConfig {
  /// The default file names under `data_dir`.
  pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
    Self { data_dir: data_dir.into(), ..Self::default() }
  }

  fn resolve(&self, file: &Path) -> PathBuf { self.data_dir.join(file) }

  pub fn students_path(&self) -> PathBuf { self.resolve(&self.students_file) }

  pub fn courses_path(&self) -> PathBuf { self.resolve(&self.courses_file) }

  pub fn enrollments_path(&self) -> PathBuf { self.resolve(&self.enrollments_file) }

  pub fn grades_path(&self) -> PathBuf { self.resolve(&self.grades_file) }

  pub fn attendance_path(&self) -> PathBuf { self.resolve(&self.attendance_file) }

  pub fn majors_path(&self) -> PathBuf { self.resolve(&self.majors_file) }
}
