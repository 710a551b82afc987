//! Students and the person data they are built from.
//!
//! A student is not a subclass of anything. It owns a [`PersonData`] and
//! delegates identity concerns (id, full name, the leading part of the
//! display line) to it.

use serde::{Deserialize, Serialize};

/// The identifier handed out when the student file holds no numeric id.
pub const FIRST_STUDENT_ID: u64 = 2_024_001;

// ─── Person ──────────────────────────────────────────────────────────────────

/// Identity shared by every person-like record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
  pub id:         String,
  pub first_name: String,
  pub last_name:  String,
}

impl PersonData {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  /// `ID: <id> | Nombre: <full name>`
  pub fn display_info(&self) -> String {
    format!("ID: {} | Nombre: {}", self.id, self.full_name())
  }
}

// ─── Student ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
  #[serde(flatten)]
  pub person:     PersonData,
  pub major:      String,
  /// ISO `YYYY-MM-DD`, or empty when unknown (legacy rows).
  pub birth_date: String,
  pub email:      String,
  /// A normal field, not a deletion marker.
  pub active:     bool,
}

impl Student {
  pub fn id(&self) -> &str { &self.person.id }

  pub fn full_name(&self) -> String { self.person.full_name() }
}

// ─── NewStudent ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::AcademicStore::add_student`]. The id is always
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
  pub first_name: String,
  pub last_name:  String,
  pub major:      String,
  pub birth_date: String,
  pub email:      String,
  pub active:     bool,
}

impl NewStudent {
  pub fn into_student(self, id: String) -> Student {
    Student {
      person:     PersonData {
        id,
        first_name: self.first_name,
        last_name: self.last_name,
      },
      major:      self.major,
      birth_date: self.birth_date,
      email:      self.email,
      active:     self.active,
    }
  }
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// The largest id in `ids` made only of ASCII digits. Anything else is
/// ignored rather than treated as an error.
pub fn max_numeric_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> Option<u64> {
  ids
    .into_iter()
    .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
    .filter_map(|id| id.parse::<u64>().ok())
    .max()
}

/// `max + 1`, or [`FIRST_STUDENT_ID`] when there is no numeric id at all.
pub fn next_student_id(max_id: Option<u64>) -> u64 {
  max_id.map_or(FIRST_STUDENT_ID, |m| m + 1)
}
