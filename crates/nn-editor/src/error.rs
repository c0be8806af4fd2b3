//! Editor errors.
//!
//! Every failure an editing command can hit is recoverable: the interpreter
//! reports it as a single `E:`-prefixed line and reads the next command.
//! The `Display` text of each variant is that line without the prefix.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A recoverable failure of a [`BufferStore`](crate::store::BufferStore)
/// operation.
#[derive(Debug, Error)]
pub enum EditError {
    /// A line number outside the current buffer.
    #[error("Line number out of range")]
    LineOutOfRange { line: i64, count: usize },

    /// A buffer index outside `[0, max)`.
    #[error("Buffer number must be >= 0 and < {max}")]
    BufferOutOfRange { index: i64, max: usize },

    /// A buffer index outside `[0, max)`, given to `remove`.
    #[error("Buffer number out of range")]
    NoSuchBuffer { index: i64 },

    /// The current buffer already holds `max_lines` lines.
    #[error("Buffer is full, cannot insert more lines.")]
    BufferFull,

    /// The file could not be opened or written.
    #[error("Failed to save: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be opened or read.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removing a buffer from a store configured with a single slot.
    #[error("At least one buffer must remain")]
    LastBuffer,

    /// A find/replace pattern that is not a valid regular expression.
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, EditError>;
