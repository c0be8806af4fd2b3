//! Configuration — capacity limits and their TOML representation.
//!
//! The editor works with fixed capacities: a fixed number of buffer slots,
//! a fixed number of line slots per buffer, and a maximum line length. The
//! defaults match the classic values; a TOML file can override any of them:
//!
//! ```toml
//! [limits]
//! max_buffers = 4
//! max_lines = 500
//! max_line_len = 256
//! ```
//!
//! Missing keys fall back to their defaults. Limits are validated once, when
//! the config is built, so the rest of the editor can rely on them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default number of buffer slots.
pub const MAX_BUFFERS: usize = 8;

/// Default number of line slots per buffer.
pub const MAX_LINES: usize = 10_000;

/// Default line length cap, counting the line terminator. Stored lines hold
/// at most `MAX_LINE_LEN - 1` bytes.
pub const MAX_LINE_LEN: usize = 1024;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Capacity limits of a [`BufferStore`](crate::store::BufferStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Number of buffer slots. Never changes after construction.
    pub max_buffers: usize,

    /// Maximum number of lines a buffer can hold.
    pub max_lines: usize,

    /// Line length cap including the terminator.
    pub max_line_len: usize,
}

impl Limits {
    /// The longest line (in bytes) a buffer will store.
    #[inline]
    #[must_use]
    pub const fn max_stored_len(&self) -> usize {
        self.max_line_len.saturating_sub(1)
    }

    /// Check that the limits leave room for at least one buffer holding at
    /// least one non-empty line.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_buffers == 0 {
            return Err(ConfigError::Invalid("max_buffers must be at least 1"));
        }
        if self.max_lines == 0 {
            return Err(ConfigError::Invalid("max_lines must be at least 1"));
        }
        if self.max_line_len < 2 {
            return Err(ConfigError::Invalid("max_line_len must be at least 2"));
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_buffers: MAX_BUFFERS,
            max_lines: MAX_LINES,
            max_line_len: MAX_LINE_LEN,
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Errors produced while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub limits: Limits,
}

impl Config {
    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for limits the editor cannot work with.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// the same errors as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validate the contained [`Limits`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
