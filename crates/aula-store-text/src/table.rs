//! [`Table`]: one entity type bound to one backing file.

use std::{
  fs::{self, File, OpenOptions},
  io::{self, ErrorKind, Read, Seek, SeekFrom, Write},
  marker::PhantomData,
  path::{Path, PathBuf},
};

use aula_codec::{LineCodec, decode_line, encode_record, header_line};
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// One data line of a table file.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<T> {
  Record(T),
  /// A line that did not decode, kept verbatim.
  Raw(String),
}

impl<T> Line<T> {
  pub fn record(&self) -> Option<&T> {
    match self {
      Self::Record(r) => Some(r),
      Self::Raw(_) => None,
    }
  }

  pub fn into_record(self) -> Option<T> {
    match self {
      Self::Record(r) => Some(r),
      Self::Raw(_) => None,
    }
  }
}

/// A file of `T` records: header on line one, one encoded record per line
/// after it.
///
/// The table is the only writer of its file. It holds no cached state; every
/// call goes back to disk.
#[derive(Debug)]
pub struct Table<T> {
  path:    PathBuf,
  _record: PhantomData<fn() -> T>,
}

impl<T: LineCodec> Table<T> {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into(), _record: PhantomData }
  }

  pub fn path(&self) -> &Path { &self.path }

  /// Create the file with its header if it does not exist yet. Existing
  /// files are left alone, so this is safe to call on every startup.
  pub fn initialize(&self) -> Result<()> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }

    match OpenOptions::new().write(true).create_new(true).open(&self.path) {
      Ok(mut file) => {
        writeln!(file, "{}", header_line::<T>()).map_err(Error::io(&self.path))?;
        tracing::debug!(path = %self.path.display(), "created table file");
        Ok(())
      }
      Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
      Err(e) => Err(Error::io(&self.path)(e)),
    }
  }

  /// Read every data line in file order, keeping lines that fail to decode
  /// as [`Line::Raw`] so a later rewrite can put them back unchanged. Blank
  /// lines and lines with an empty key are dropped. A missing file reads as
  /// empty; any other I/O failure is returned.
  pub fn try_scan_lines(&self) -> Result<Vec<Line<T>>> {
    let contents = match fs::read_to_string(&self.path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
      Err(e) => return Err(Error::io(&self.path)(e)),
    };

    let mut lines = Vec::new();
    for (index, line) in contents.lines().enumerate().skip(1) {
      match decode_line::<T>(line) {
        Ok(Some(record)) => lines.push(Line::Record(record)),
        Ok(None) => {}
        Err(e) => {
          tracing::warn!(
            path = %self.path.display(),
            line = index + 1,
            error = %e,
            "ignoring undecodable row"
          );
          lines.push(Line::Raw(line.to_owned()));
        }
      }
    }

    tracing::debug!(path = %self.path.display(), rows = lines.len(), "scanned table");
    Ok(lines)
  }

  /// The decodable records in file order. Undecodable rows are left out.
  pub fn try_scan(&self) -> Result<Vec<T>> {
    Ok(
      self
        .try_scan_lines()?
        .into_iter()
        .filter_map(Line::into_record)
        .collect(),
    )
  }

  /// Like [`Table::try_scan`], but an unreadable file yields an empty
  /// sequence instead of an error.
  pub fn scan_all(&self) -> Vec<T> {
    self.try_scan().unwrap_or_else(|e| {
      tracing::warn!(error = %e, "table unreadable, returning no rows");
      Vec::new()
    })
  }

  /// Add one record at the end of the file. Existing content is not
  /// touched.
  pub fn append(&self, record: &T) -> Result<()> {
    let line = encode_record(record)?;
    self.initialize()?;

    let mut file = OpenOptions::new()
      .read(true)
      .append(true)
      .open(&self.path)
      .map_err(Error::io(&self.path))?;

    // An empty file still needs its header; a hand-edited one may lack the
    // final newline.
    let mut buf = String::new();
    let len = file.metadata().map_err(Error::io(&self.path))?.len();
    if len == 0 {
      buf.push_str(&header_line::<T>());
      buf.push('\n');
    } else if !ends_with_newline(&mut file).map_err(Error::io(&self.path))? {
      buf.push('\n');
    }
    buf.push_str(&line);
    buf.push('\n');

    file.write_all(buf.as_bytes()).map_err(Error::io(&self.path))?;
    tracing::debug!(path = %self.path.display(), "appended row");
    Ok(())
  }

  /// Replace the whole file with the header followed by `records` in order.
  pub fn rewrite_all(&self, records: &[T]) -> Result<()> {
    let mut contents = header_line::<T>();
    contents.push('\n');
    for record in records {
      contents.push_str(&encode_record(record)?);
      contents.push('\n');
    }
    self.replace_contents(&contents, records.len())
  }

  /// Like [`Table::rewrite_all`], but raw lines are written back exactly as
  /// they were read.
  pub fn rewrite_lines(&self, lines: &[Line<T>]) -> Result<()> {
    let mut contents = header_line::<T>();
    contents.push('\n');
    for line in lines {
      match line {
        Line::Record(record) => contents.push_str(&encode_record(record)?),
        Line::Raw(raw) => contents.push_str(raw),
      }
      contents.push('\n');
    }
    self.replace_contents(&contents, lines.len())
  }

  /// The new content goes to a temporary file in the same directory which
  /// is then renamed over the target: the file holds either the old rows or
  /// the new ones, never a mix. Callers encode everything first, so nothing
  /// is written if any record fails to encode.
  fn replace_contents(&self, contents: &str, rows: usize) -> Result<()> {
    let dir = match self.path.parent() {
      Some(p) if !p.as_os_str().is_empty() => p,
      _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(Error::io(dir))?;
    tmp
      .write_all(contents.as_bytes())
      .and_then(|()| tmp.as_file().sync_all())
      .map_err(Error::io(tmp.path()))?;
    tmp
      .persist(&self.path)
      .map_err(|e| Error::io(&self.path)(e.error))?;

    tracing::debug!(path = %self.path.display(), rows, "rewrote table");
    Ok(())
  }
}

/// True when the last byte of a non-empty file is `\n`.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
  file.seek(SeekFrom::End(-1))?;
  let mut last = [0u8; 1];
  file.read_exact(&mut last)?;
  Ok(last[0] == b'\n')
}
