//! Line input — the interpreter's view of its input stream.
//!
//! [`LineReader`] hands out one line at a time with the terminator
//! stripped, and `None` at end of input. Insert and append collect their
//! text through [`LineReader::until_dot`], a lazy iterator over the lines
//! that follow the command:
//!
//! ```text
//! ]a
//! first line
//! second line
//! .            ← ends the sub-mode, not stored
//! ]
//! ```
//!
//! The iterator pulls lines only as it is advanced, so a consumer that stops
//! early (insert capping at the remaining capacity) leaves the rest of the
//! input for the command loop. It is finite and not restartable: once it
//! has seen `.` or end of input it yields nothing more.

use std::io::{self, BufRead};

/// The line that ends insert/append sub-mode.
pub const END_OF_TEXT: &str = ".";

// ---------------------------------------------------------------------------
// LineReader
// ---------------------------------------------------------------------------

/// Reads terminator-stripped lines from a [`BufRead`].
///
/// Input bytes are decoded as UTF-8 lossily: a byte sequence that is not
/// valid UTF-8 becomes `U+FFFD` instead of failing the read.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    /// Read the next line without its `\n` or `\r\n`. Returns `Ok(None)` at
    /// end of input.
    ///
    /// # Errors
    ///
    /// Propagates read errors from the underlying stream.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    /// Lines of sub-mode text, up to a lone `.` or end of input.
    pub const fn until_dot(&mut self) -> SubModeLines<'_, R> {
        SubModeLines {
            reader: self,
            done: false,
        }
    }
}

// ---------------------------------------------------------------------------
// SubModeLines
// ---------------------------------------------------------------------------

/// Iterator returned by [`LineReader::until_dot`].
#[derive(Debug)]
pub struct SubModeLines<'a, R> {
    reader: &'a mut LineReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for SubModeLines<'_, R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_line() {
            Ok(Some(line)) if line != END_OF_TEXT => Some(Ok(line)),
            Ok(_) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for SubModeLines<'_, R> {}
