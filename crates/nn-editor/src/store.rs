//! Buffer store — the fixed set of buffer slots.
//!
//! The store owns exactly `max_buffers` [`Buffer`]s for its whole lifetime.
//! Slots are never created or destroyed; "removing" a buffer resets it to
//! empty and unbound. One slot is the *current buffer*, and every line
//! operation targets it.
//!
//! # Numbering
//!
//! Users type 1-indexed line numbers and 0-indexed buffer numbers. Both
//! arrive here as `i64` so that negative input is reported as out of range
//! rather than wrapped.
//!
//! # Capacity
//!
//! Every mutating operation checks the limits before touching storage, so a
//! rejected operation leaves the buffer exactly as it was:
//!
//! - `insert` rejects a full buffer and reads at most the remaining number
//!   of lines from its input.
//! - `append` and `load_from_file` drop lines past `max_lines`.
//! - Every stored line is fitted to `max_line_len - 1` bytes.

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, warn};

use crate::buffer::{self, Buffer, fit_line};
use crate::config::{ConfigError, Limits};
use crate::error::{EditError, Result};
use crate::search::{self, Match};

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Line count and byte size of one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSummary {
    /// Index of the buffer.
    pub buffer: usize,
    pub lines: usize,
    /// Sum of each line's length plus one terminator.
    pub bytes: usize,
}

impl fmt::Display for SizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer {} {} lines {} bytes",
            self.buffer, self.lines, self.bytes
        )
    }
}

/// One row of [`BufferStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferInfo {
    pub index: usize,
    pub lines: usize,
    pub bytes: usize,
    pub path: Option<PathBuf>,
    pub current: bool,
}

impl fmt::Display for BufferInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .as_deref()
            .map(Path::display)
            .map(|p| p.to_string())
            .unwrap_or_default();
        write!(
            f,
            "[{}] {} lines, {} bytes, '{}'",
            self.index, self.lines, self.bytes, path
        )?;
        if self.current {
            f.write_str("    <--")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// BufferStore
// ---------------------------------------------------------------------------

/// A fixed collection of buffers with one current buffer.
#[derive(Debug, Clone)]
pub struct BufferStore {
    buffers: Vec<Buffer>,
    current: usize,
    limits: Limits,
}

impl BufferStore {
    /// Create a store with `limits.max_buffers` empty slots. Buffer 0 is
    /// current.
    ///
    /// # Panics
    ///
    /// Panics if `limits` fails [`Limits::validate`]. Use
    /// [`try_new`](Self::try_new) for limits that come from outside.
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        match Self::try_new(limits) {
            Ok(store) => store,
            Err(e) => panic!("invalid buffer store limits: {e}"),
        }
    }

    /// Create a store after checking `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if there would be no buffer slot, no
    /// line slot, or no room for a single byte per line.
    pub fn try_new(limits: Limits) -> std::result::Result<Self, ConfigError> {
        limits.validate()?;
        Ok(Self {
            buffers: vec![Buffer::new(); limits.max_buffers],
            current: 0,
            limits,
        })
    }

    // -- Access -------------------------------------------------------------

    /// The limits this store was built with.
    #[inline]
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Index of the current buffer.
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The current buffer.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &Buffer {
        &self.buffers[self.current]
    }

    /// The buffer in slot `idx`, if it exists.
    #[inline]
    #[must_use]
    pub fn buffer(&self, idx: usize) -> Option<&Buffer> {
        self.buffers.get(idx)
    }

    fn current_mut(&mut self) -> &mut Buffer {
        &mut self.buffers[self.current]
    }

    /// Size summary of the current buffer.
    #[must_use]
    pub fn summary(&self) -> SizeSummary {
        let buf = self.current();
        SizeSummary {
            buffer: self.current,
            lines: buf.line_count(),
            bytes: buf.size_bytes(),
        }
    }

    /// Lines of the current buffer paired with their 1-based numbers.
    pub fn print(&self) -> impl Iterator<Item = (usize, &str)> {
        self.current()
            .lines()
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }

    /// Every slot in index order, empty or not.
    #[must_use]
    pub fn list(&self) -> Vec<BufferInfo> {
        self.buffers
            .iter()
            .enumerate()
            .map(|(index, buf)| BufferInfo {
                index,
                lines: buf.line_count(),
                bytes: buf.size_bytes(),
                path: buf.path().map(Path::to_path_buf),
                current: index == self.current,
            })
            .collect()
    }

    // -- Line editing -------------------------------------------------------

    /// Check that lines can be inserted after line `after` of the current
    /// buffer, and return how many lines fit.
    ///
    /// # Errors
    ///
    /// [`EditError::LineOutOfRange`] unless `0 <= after <= line_count`, then
    /// [`EditError::BufferFull`] if no line slot is free.
    pub fn insert_capacity(&self, after: i64) -> Result<usize> {
        let count = self.current().line_count();
        if usize::try_from(after).map_or(true, |a| a > count) {
            return Err(EditError::LineOutOfRange { line: after, count });
        }
        if count >= self.limits.max_lines {
            return Err(EditError::BufferFull);
        }
        Ok(self.limits.max_lines - count)
    }

    /// Insert `new_lines` after line `after` (0 inserts before the first
    /// line). Only as many lines as fit are taken from `new_lines`; the rest
    /// are left unconsumed.
    ///
    /// # Errors
    ///
    /// Same as [`insert_capacity`](Self::insert_capacity). Nothing is
    /// consumed from `new_lines` on error.
    pub fn insert<I>(&mut self, after: i64, new_lines: I) -> Result<SizeSummary>
    where
        I: IntoIterator<Item = String>,
    {
        let room = self.insert_capacity(after)?;
        let max_len = self.limits.max_stored_len();
        let fitted: Vec<String> = new_lines
            .into_iter()
            .take(room)
            .map(|line| fit_line(line, max_len))
            .collect();

        // `insert_capacity` proved `0 <= after <= count`.
        let at = usize::try_from(after).unwrap_or_default();
        let added = fitted.len();
        self.current_mut().insert_lines(at, fitted);

        let summary = self.summary();
        debug!(buffer = self.current, at, added, lines = summary.lines, "insert");
        Ok(summary)
    }

    /// Append `new_lines` at the end of the current buffer. Lines that would
    /// exceed `max_lines` are dropped.
    pub fn append<I>(&mut self, new_lines: I) -> SizeSummary
    where
        I: IntoIterator<Item = String>,
    {
        let room = self.limits.max_lines - self.current().line_count();
        let max_len = self.limits.max_stored_len();
        let mut fitted = Vec::new();
        let mut dropped = 0usize;
        for line in new_lines {
            if fitted.len() < room {
                fitted.push(fit_line(line, max_len));
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!(buffer = self.current, dropped, "buffer full, appended lines dropped");
        }

        let at = self.current().line_count();
        let added = fitted.len();
        self.current_mut().insert_lines(at, fitted);

        let summary = self.summary();
        debug!(buffer = self.current, added, lines = summary.lines, "append");
        summary
    }

    /// Delete line `line` (1-based) of the current buffer.
    ///
    /// # Errors
    ///
    /// [`EditError::LineOutOfRange`] unless `1 <= line <= line_count`.
    pub fn delete(&mut self, line: i64) -> Result<SizeSummary> {
        let count = self.current().line_count();
        let idx = usize::try_from(line)
            .ok()
            .filter(|&n| (1..=count).contains(&n))
            .ok_or(EditError::LineOutOfRange { line, count })?
            - 1;

        self.current_mut().remove_line(idx);

        let summary = self.summary();
        debug!(buffer = self.current, line, lines = summary.lines, "delete");
        Ok(summary)
    }

    /// Empty the current buffer. The file path is kept.
    pub fn clear(&mut self) -> SizeSummary {
        self.current_mut().clear();
        debug!(buffer = self.current, "clear");
        self.summary()
    }

    // -- Files --------------------------------------------------------------

    /// Write the current buffer to `path` and bind the buffer to it.
    ///
    /// # Errors
    ///
    /// [`EditError::Io`] if the file cannot be created or written. The
    /// buffer's path is left unchanged.
    pub fn write_to_file(&mut self, path: &Path) -> Result<SizeSummary> {
        if let Err(source) = self.current().write_to(path) {
            warn!(path = %path.display(), error = %source, "write failed");
            return Err(EditError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
        self.current_mut().set_path(path.to_path_buf());

        let summary = self.summary();
        debug!(buffer = self.current, path = %path.display(), bytes = summary.bytes, "write");
        Ok(summary)
    }

    /// Replace the current buffer's content with the lines of `path` and
    /// bind the buffer to it.
    ///
    /// # Errors
    ///
    /// [`EditError::FileNotFound`] if the file cannot be opened or read. In
    /// that case the current buffer is reset to empty and unbound.
    pub fn load_from_file(&mut self, path: &Path) -> Result<SizeSummary> {
        match buffer::read_lines(path, &self.limits) {
            Ok(lines) => {
                let buf = self.current_mut();
                buf.replace_lines(lines);
                buf.set_path(path.to_path_buf());

                let summary = self.summary();
                debug!(buffer = self.current, path = %path.display(), lines = summary.lines, "load");
                Ok(summary)
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "load failed, buffer reset");
                self.current_mut().reset();
                Err(EditError::FileNotFound {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    // -- Buffer lifecycle ---------------------------------------------------

    fn buffer_index(&self, n: i64) -> Result<usize> {
        let max = self.buffers.len();
        usize::try_from(n)
            .ok()
            .filter(|&idx| idx < max)
            .ok_or(EditError::BufferOutOfRange { index: n, max })
    }

    /// Make buffer `n` current.
    ///
    /// # Errors
    ///
    /// [`EditError::BufferOutOfRange`] if `n` is not a slot index. The
    /// current buffer does not change.
    pub fn switch_to(&mut self, n: i64) -> Result<SizeSummary> {
        self.current = self.buffer_index(n)?;
        debug!(buffer = self.current, "switch");
        Ok(self.summary())
    }

    /// Reset buffer `n` to empty and unbound. If it was current, buffer 0
    /// becomes current. Returns `true` when the current buffer changed.
    ///
    /// The slot itself is never removed. A store configured with a single
    /// slot refuses, whether or not that slot holds anything.
    ///
    /// # Errors
    ///
    /// [`EditError::NoSuchBuffer`] for a bad index, then
    /// [`EditError::LastBuffer`] for a single-slot store.
    pub fn remove(&mut self, n: i64) -> Result<bool> {
        let idx = self
            .buffer_index(n)
            .map_err(|_| EditError::NoSuchBuffer { index: n })?;
        if self.limits.max_buffers == 1 {
            return Err(EditError::LastBuffer);
        }

        self.buffers[idx].reset();
        let switched = idx == self.current;
        if switched {
            self.current = 0;
        }
        debug!(buffer = idx, switched, "remove");
        Ok(switched)
    }

    // -- Search -------------------------------------------------------------

    /// Lines of the current buffer matching `pattern`.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn find(&self, pattern: &str) -> Result<Vec<Match>> {
        let re = Regex::new(pattern)?;
        Ok(search::find_matches(self.current(), &re))
    }

    /// Replace every match of `pattern` in the current buffer. Returns the
    /// number of replacements made.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn replace(&mut self, pattern: &str, replacement: &str) -> Result<usize> {
        let re = Regex::new(pattern)?;
        let max_len = self.limits.max_stored_len();
        let replaced = search::replace_all(self.current_mut(), &re, replacement, max_len);
        debug!(buffer = self.current, pattern, replaced, "replace");
        Ok(replaced)
    }
}

impl Default for BufferStore {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn owned(text: &[&str]) -> Vec<String> {
        text.iter().map(ToString::to_string).collect()
    }

    fn store_with(max_buffers: usize, max_lines: usize) -> BufferStore {
        BufferStore::new(Limits {
            max_buffers,
            max_lines,
            ..Limits::default()
        })
    }

    fn current_lines(store: &BufferStore) -> Vec<&str> {
        store.print().map(|(_, line)| line).collect()
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_store_has_all_slots_empty() {
        let store = BufferStore::default();
        let list = store.list();
        assert_eq!(list.len(), 8);
        assert!(list.iter().all(|info| info.lines == 0 && info.path.is_none()));
        assert!(list[0].current);
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn try_new_rejects_unusable_limits() {
        for limits in [
            Limits {
                max_buffers: 0,
                ..Limits::default()
            },
            Limits {
                max_lines: 0,
                ..Limits::default()
            },
            Limits {
                max_line_len: 0,
                ..Limits::default()
            },
        ] {
            assert!(matches!(
                BufferStore::try_new(limits),
                Err(ConfigError::Invalid(_))
            ));
        }
    }

    #[test]
    #[should_panic(expected = "invalid buffer store limits")]
    fn new_panics_without_buffer_slots() {
        let _ = BufferStore::new(Limits {
            max_buffers: 0,
            ..Limits::default()
        });
    }

    // -- Insert -------------------------------------------------------------

    #[test]
    fn insert_into_empty() {
        let mut store = BufferStore::default();
        let summary = store.insert(0, owned(&["hello", "world"])).unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.bytes, 12);
        assert_eq!(current_lines(&store), ["hello", "world"]);
    }

    #[test]
    fn insert_each_valid_position() {
        for after in 0..=3 {
            let mut store = BufferStore::default();
            store.insert(0, owned(&["a", "b", "c"])).unwrap();
            store.insert(after, owned(&["x"])).unwrap();
            assert_eq!(store.summary().lines, 4);
            let idx = usize::try_from(after).unwrap();
            assert_eq!(store.current().line(idx), Some("x"));
        }
    }

    #[test]
    fn insert_out_of_range() {
        let mut store = BufferStore::default();
        store.insert(0, owned(&["a"])).unwrap();
        assert!(matches!(
            store.insert(2, owned(&["x"])),
            Err(EditError::LineOutOfRange { line: 2, count: 1 })
        ));
        assert!(matches!(
            store.insert(-1, owned(&["x"])),
            Err(EditError::LineOutOfRange { line: -1, .. })
        ));
        assert_eq!(current_lines(&store), ["a"]);
    }

    #[test]
    fn insert_into_full_buffer_fails_without_consuming() {
        let mut store = store_with(2, 2);
        store.insert(0, owned(&["a", "b"])).unwrap();

        let mut feed = owned(&["x"]).into_iter();
        assert!(matches!(
            store.insert(0, feed.by_ref()),
            Err(EditError::BufferFull)
        ));
        assert_eq!(feed.next().as_deref(), Some("x"));
    }

    #[test]
    fn insert_caps_feed_at_remaining_capacity() {
        let mut store = store_with(2, 5);
        store.insert(0, owned(&["1", "2"])).unwrap();

        let mut feed = owned(&["a", "b", "c", "d", "e"]).into_iter();
        let summary = store.insert(2, feed.by_ref()).unwrap();
        assert_eq!(summary.lines, 5);
        assert_eq!(current_lines(&store), ["1", "2", "a", "b", "c"]);
        // The two lines past capacity were never taken.
        assert_eq!(feed.collect::<Vec<_>>(), owned(&["d", "e"]));
    }

    #[test]
    fn insert_truncates_long_lines() {
        let mut store = BufferStore::new(Limits {
            max_line_len: 4,
            ..Limits::default()
        });
        store.insert(0, owned(&["abcdef"])).unwrap();
        assert_eq!(current_lines(&store), ["abc"]);
    }

    #[test]
    fn insert_nothing_is_noop() {
        let mut store = BufferStore::default();
        let summary = store.insert(0, Vec::new()).unwrap();
        assert_eq!(summary.lines, 0);
    }

    // -- Append -------------------------------------------------------------

    #[test]
    fn append_at_end() {
        let mut store = BufferStore::default();
        store.insert(0, owned(&["a"])).unwrap();
        let summary = store.append(owned(&["b", "c"]));
        assert_eq!(summary.lines, 3);
        assert_eq!(current_lines(&store), ["a", "b", "c"]);
    }

    #[test]
    fn append_drops_past_capacity() {
        let mut store = store_with(1, 3);
        store.append(owned(&["a", "b"]));
        let summary = store.append(owned(&["c", "d", "e"]));
        assert_eq!(summary.lines, 3);
        assert_eq!(current_lines(&store), ["a", "b", "c"]);
    }

    // -- Delete -------------------------------------------------------------

    #[test]
    fn delete_shifts_following_lines_up() {
        let mut store = BufferStore::default();
        store.insert(0, owned(&["a", "b", "c"])).unwrap();
        let summary = store.delete(2).unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(store.current().line(1), Some("c"));
    }

    #[test]
    fn delete_last_line_leaves_nothing_after() {
        let mut store = BufferStore::default();
        store.insert(0, owned(&["a", "b"])).unwrap();
        store.delete(2).unwrap();
        assert_eq!(store.current().line(1), None);
    }

    #[test]
    fn delete_out_of_range() {
        let mut store = BufferStore::default();
        store.insert(0, owned(&["a"])).unwrap();
        for line in [0, 2, -3] {
            assert!(matches!(
                store.delete(line),
                Err(EditError::LineOutOfRange { .. })
            ));
        }
        assert_eq!(current_lines(&store), ["a"]);
    }

    #[test]
    fn insert_then_delete_is_identity() {
        let mut store = BufferStore::default();
        store.insert(0, owned(&["a", "b", "c"])).unwrap();
        store.insert(1, owned(&["x"])).unwrap();
        store.delete(2).unwrap();
        assert_eq!(current_lines(&store), ["a", "b", "c"]);
    }

    // -- Clear --------------------------------------------------------------

    #[test]
    fn clear_empties_but_keeps_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keep.txt");
        let mut store = BufferStore::default();
        store.append(owned(&["a"]));
        store.write_to_file(&path).unwrap();

        let summary = store.clear();
        assert_eq!(summary.lines, 0);
        assert_eq!(summary.bytes, 0);
        assert_eq!(store.current().path(), Some(path.as_path()));
        assert_eq!(store.print().count(), 0);
    }

    // -- Files --------------------------------------------------------------

    #[test]
    fn scenario_edit_write_load_into_other_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut store = store_with(2, 100);

        let s = store.insert(0, owned(&["hello", "world"])).unwrap();
        assert_eq!(s.lines, 2);
        let s = store.append(owned(&["!"]));
        assert_eq!(s.lines, 3);
        assert_eq!(current_lines(&store), ["hello", "world", "!"]);
        let s = store.delete(2).unwrap();
        assert_eq!(s.lines, 2);
        assert_eq!(current_lines(&store), ["hello", "!"]);

        store.write_to_file(&path).unwrap();
        assert_eq!(store.current().path(), Some(path.as_path()));

        store.switch_to(1).unwrap();
        store.load_from_file(&path).unwrap();
        assert_eq!(current_lines(&store), ["hello", "!"]);
        assert_eq!(store.list()[1].path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn write_failure_keeps_path_unbound() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let mut store = BufferStore::default();
        store.append(owned(&["a"]));

        assert!(matches!(
            store.write_to_file(&path),
            Err(EditError::Io { .. })
        ));
        assert!(store.current().path().is_none());
        assert_eq!(current_lines(&store), ["a"]);
    }

    #[test]
    fn failed_load_clobbers_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let mut store = BufferStore::default();
        store.append(owned(&["precious"]));
        store.write_to_file(&good).unwrap();

        let err = store.load_from_file(&dir.path().join("missing.txt"));
        assert!(matches!(err, Err(EditError::FileNotFound { .. })));
        assert_eq!(store.summary().lines, 0);
        assert!(store.current().path().is_none());
    }

    #[test]
    fn load_drops_lines_past_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.txt");
        std::fs::write(&path, "1\n2\n3\n4\n").unwrap();
        let mut store = store_with(1, 2);
        let summary = store.load_from_file(&path).unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(current_lines(&store), ["1", "2"]);
    }

    // -- Switch / remove / list ---------------------------------------------

    #[test]
    fn switch_to_invalid_keeps_current() {
        let mut store = store_with(2, 10);
        store.switch_to(1).unwrap();
        for n in [2, -1, 99] {
            assert!(matches!(
                store.switch_to(n),
                Err(EditError::BufferOutOfRange { max: 2, .. })
            ));
        }
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn remove_current_switches_to_zero() {
        let mut store = store_with(3, 10);
        store.switch_to(2).unwrap();
        store.append(owned(&["a"]));
        assert!(store.remove(2).unwrap());
        assert_eq!(store.current_index(), 0);
        assert!(store.buffer(2).unwrap().is_empty());
        // Slots never go away.
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn remove_other_keeps_current() {
        let mut store = store_with(3, 10);
        store.switch_to(1).unwrap();
        assert!(!store.remove(2).unwrap());
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn remove_single_slot_store_fails() {
        let mut store = store_with(1, 10);
        store.append(owned(&["keep"]));
        assert!(matches!(store.remove(0), Err(EditError::LastBuffer)));
        assert_eq!(current_lines(&store), ["keep"]);
    }

    #[test]
    fn remove_invalid_index() {
        let mut store = store_with(2, 10);
        assert!(matches!(
            store.remove(5),
            Err(EditError::NoSuchBuffer { index: 5 })
        ));
        assert_eq!(
            store.remove(-1).unwrap_err().to_string(),
            "Buffer number out of range"
        );
    }

    #[test]
    fn remove_unbinds_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slot2.txt");
        let mut store = store_with(3, 10);
        store.switch_to(2).unwrap();
        store.append(owned(&["a", "b"]));
        store.write_to_file(&path).unwrap();
        store.switch_to(1).unwrap();
        assert_eq!(store.buffer(2).unwrap().path(), Some(path.as_path()));

        assert!(!store.remove(2).unwrap());
        let slot = store.buffer(2).unwrap();
        assert!(slot.is_empty());
        assert!(slot.path().is_none());
        assert_eq!(store.list()[2].path, None);
        // The file itself is untouched.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn list_formats_rows() {
        let mut store = store_with(2, 10);
        store.append(owned(&["ab"]));
        let rows: Vec<String> = store.list().iter().map(ToString::to_string).collect();
        assert_eq!(
            rows,
            [
                "[0] 1 lines, 3 bytes, ''    <--".to_string(),
                "[1] 0 lines, 0 bytes, ''".to_string(),
            ]
        );
    }

    #[test]
    fn summary_format() {
        let summary = SizeSummary {
            buffer: 3,
            lines: 2,
            bytes: 9,
        };
        assert_eq!(summary.to_string(), "buffer 3 2 lines 9 bytes");
    }

    // -- Search -------------------------------------------------------------

    #[test]
    fn find_and_replace_on_current_buffer() {
        let mut store = BufferStore::default();
        store.append(owned(&["cat", "dog", "catalog"]));
        let found = store.find("^cat").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(store.replace("cat", "bird").unwrap(), 2);
        assert_eq!(current_lines(&store), ["bird", "dog", "birdalog"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let mut store = BufferStore::default();
        assert!(matches!(store.find("("), Err(EditError::InvalidPattern(_))));
        assert!(matches!(
            store.replace("[", "x"),
            Err(EditError::InvalidPattern(_))
        ));
    }
}
