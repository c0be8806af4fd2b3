//! Text buffer — one slot of the buffer store.
//!
//! A `Buffer` is an ordered list of text lines plus the file path it was
//! last loaded from or written to. It does no capacity bookkeeping of its
//! own: the [`BufferStore`](crate::store::BufferStore) checks every limit
//! before it mutates a buffer, so the methods here assume valid arguments.
//!
//! # Line model
//!
//! - Lines are stored **without** terminators. Positions are 0-indexed
//!   internally; the store converts from the 1-indexed numbers users type.
//! - A line never contains `\n`. [`fit_line`] cuts supplied text at its first
//!   `\n` and truncates it to the line length cap. A stray `\r` inside a line
//!   is ordinary text; only the readers strip a `\r` that ends a line.
//! - The byte size of a buffer counts one terminator per line, matching the
//!   file it would be written as.
//!
//! # File format
//!
//! Plain text, one buffer line per file line, every line followed by `\n`.
//! On load, `\n` and `\r\n` terminators are both accepted and bytes are
//! decoded as UTF-8 lossily, so any text file can be opened.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Limits;

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// An ordered sequence of text lines, optionally bound to a file.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
    path: Option<PathBuf>,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer with no file path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            path: None,
        }
    }

    // -- Line access --------------------------------------------------------

    /// Number of lines.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the buffer holds no lines.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by 0-indexed line number.
    #[inline]
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// All lines in document order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Byte size of the buffer as a file: each line's length plus one
    /// terminator.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.lines.iter().map(|line| line.len() + 1).sum()
    }

    // -- Metadata -----------------------------------------------------------

    /// The file path this buffer is bound to, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Bind the buffer to a file path.
    #[inline]
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    // -- Editing ------------------------------------------------------------

    /// Insert `new_lines` so the first of them lands at index `at`. Lines at
    /// or after `at` shift down, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `at > line_count()`.
    pub(crate) fn insert_lines(&mut self, at: usize, new_lines: Vec<String>) {
        self.lines.splice(at..at, new_lines);
    }

    /// Remove and return the line at `idx`, shifting later lines up.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= line_count()`.
    pub(crate) fn remove_line(&mut self, idx: usize) -> String {
        self.lines.remove(idx)
    }

    /// Overwrite the line at `idx`.
    pub(crate) fn set_line(&mut self, idx: usize, text: String) {
        self.lines[idx] = text;
    }

    /// Replace the whole content, keeping the path.
    pub(crate) fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// Drop all lines, keeping the path.
    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }

    /// Drop all lines and unbind the file path.
    pub(crate) fn reset(&mut self) {
        self.lines.clear();
        self.path = None;
    }

    // -- File I/O -----------------------------------------------------------

    /// Write every line followed by `\n` to `path`, creating or truncating
    /// the file. Does not touch the stored path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("bytes", &self.size_bytes())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Make `text` storable as a single line: cut it at the first `\n`, then
/// truncate it to at most `max_len` bytes without splitting
/// a UTF-8 character.
#[must_use]
pub fn fit_line(mut text: String, max_len: usize) -> String {
    if let Some(end) = text.find('\n') {
        text.truncate(end);
    }
    if text.len() > max_len {
        let mut end = max_len;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

/// Read up to `limits.max_lines` lines from `path`, stripping terminators
/// and fitting each line to the length cap. Lines past the cap are ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a read fails.
pub fn read_lines(path: &Path, limits: &Limits) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut raw = Vec::new();

    while lines.len() < limits.max_lines {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        let text = String::from_utf8_lossy(&raw).into_owned();
        lines.push(fit_line(text, limits.max_stored_len()));
    }

    Ok(lines)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
