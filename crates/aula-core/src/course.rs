//! Courses and the normalisation applied to course input.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
  /// Canonical upper-case code, e.g. `MAT101`.
  pub code:       String,
  pub name:       String,
  pub instructor: String,
  pub credits:    u32,
}

/// Trim and upper-case a course code.
pub fn normalize_code(code: &str) -> String { code.trim().to_uppercase() }

/// Collapse runs of whitespace and capitalise each word: the first character
/// upper-case, the rest lower-case.
pub fn title_case(s: &str) -> String {
  s.split_whitespace()
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first
          .to_uppercase()
          .chain(chars.flat_map(char::to_lowercase))
          .collect::<String>(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}
