//! Flat-file backend for the Aula academic records store.
//!
//! Every entity lives in its own pipe-delimited text file with a header on
//! the first line. Reads scan the whole file; inserts append one line;
//! updates and deletions rewrite the file.
//!
//! Single process, single user: no locking is done, and an external writer
//! touching the same files concurrently will corrupt them.

mod config;
mod store;
mod table;

pub mod error;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use store::{DEFAULT_MAJORS, TextStore};
pub use table::{Line, Table};
