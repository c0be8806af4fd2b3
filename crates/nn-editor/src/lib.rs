//! # nn-editor — Editor core for nightnote
//!
//! This crate contains everything the `nightnote` binary needs besides
//! wiring up stdin/stdout:
//!
//! - **[`config`]** — capacity `Limits` and the TOML `Config` that carries them
//! - **[`error`]** — `EditError`, the recoverable failures of every operation
//! - **[`buffer`]** — `Buffer`, an ordered list of text lines with a file path
//! - **[`store`]** — `BufferStore`, the fixed set of buffer slots and the
//!   current-buffer pointer
//! - **[`search`]** — regex find/replace over a buffer's lines
//! - **[`source`]** — `LineReader`, line input with the `.`-terminated sub-mode
//! - **[`command`]** — parsing one input line into a [`command::Command`]
//! - **[`info`]** — name, version, help and about text
//! - **[`interpreter`]** — the read/dispatch/report loop
//!
//! # Configuration
//!
//! The binary reads the TOML file named by the `NIGHTNOTE_CONFIG`
//! environment variable, if set, to override the default capacity limits
//! (see [`config`]). Without it the classic limits apply: 8 buffers of
//! 10000 lines of at most 1023 bytes.

pub mod buffer;
pub mod command;
pub mod config;
pub mod error;
pub mod info;
pub mod interpreter;
pub mod search;
pub mod source;
pub mod store;
