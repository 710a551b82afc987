//! Core types and trait definitions for the Aula academic records store.
//!
//! This crate is deliberately free of filesystem and presentation
//! dependencies. The codec, the text store and the registry all depend on
//! it; it depends on nothing of theirs.

pub mod attendance;
pub mod course;
pub mod enrollment;
pub mod error;
pub mod grade;
pub mod search;
pub mod store;
pub mod student;
pub mod view;

pub use error::{Error, Result};

/// Separates the fields of a stored line.
pub const DELIMITER: char = '|';

/// Characters no stored field may contain.
pub const RESERVED_CHARS: [char; 3] = [DELIMITER, '\n', '\r'];

