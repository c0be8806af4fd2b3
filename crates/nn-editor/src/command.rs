//! Command parsing — one input line to one [`Command`].
//!
//! Commands are a single letter, optionally followed by a space and an
//! argument. Matching is by exact text or by `"<letter> "` prefix, so
//! `p` prints but `p ` and `print` are unknown.
//!
//! # Supported commands
//!
//! | Command              | Action                                   |
//! |----------------------|------------------------------------------|
//! | `p`                  | Print the current buffer                 |
//! | `i n`                | Insert after line `n` (sub-mode)         |
//! | `a`                  | Append at the end (sub-mode)             |
//! | `d n`                | Delete line `n`                          |
//! | `w file`             | Write the buffer to `file`               |
//! | `o file`             | Load `file` into the buffer              |
//! | `f pattern`          | List lines matching a regex              |
//! | `x pattern repl`     | Replace regex matches on every line      |
//! | `u l` / `l`          | List buffers                             |
//! | `u c` / `c`          | Clear the current buffer                 |
//! | `u s n` / `s n`      | Switch to buffer `n`                     |
//! | `u r n` / `r n`      | Remove (reset) buffer `n`                |
//! | `q`                  | Quit                                     |
//! | `h`                  | Help                                     |
//! | `b`                  | Debug info                               |
//! | `v`                  | About                                    |
//!
//! # Numbers
//!
//! Numeric arguments are read the permissive way: leading whitespace, an
//! optional sign, then as many digits as follow. Anything unparseable reads
//! as `0`, and trailing junk is ignored (`d 3x` deletes line 3). Range
//! checking is left to the store.

use std::path::PathBuf;

/// Usage line printed for `u` with an unknown subcommand.
pub const UNIT_USAGE: &str =
    "u l  List buffers | u c  Clear buffer | u s [n]  Switch buffer | u r [n]  Remove buffer n";

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `p` — print all lines.
    Print,

    /// `i n` — insert after line `n`.
    Insert(i64),

    /// `a` — append at the end.
    Append,

    /// `d n` — delete line `n`.
    Delete(i64),

    /// `w file` — write the buffer.
    Write(PathBuf),

    /// `o file` — load a file.
    Open(PathBuf),

    /// `f pattern` — list matching lines.
    Find(String),

    /// `x pattern replacement` — replace matches.
    Replace {
        pattern: String,
        replacement: String,
    },

    /// `l` / `u l` — list buffers.
    List,

    /// `c` / `u c` — clear the current buffer.
    Clear,

    /// `s n` / `u s n` — switch buffers.
    Switch(i64),

    /// `r n` / `u r n` — remove a buffer.
    Remove(i64),

    /// `q` — quit.
    Quit,

    /// `h` — help.
    Help,

    /// `b` — debug info.
    Debug,

    /// `v` — about.
    About,

    /// A known command missing its argument. Carries the usage hint.
    Usage(&'static str),

    /// Anything else — contains the full input for error reporting.
    Unknown(String),
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse one input line (terminator already stripped) into a [`Command`].
#[must_use]
pub fn parse(input: &str) -> Command {
    match input {
        "p" => return Command::Print,
        "a" => return Command::Append,
        "c" => return Command::Clear,
        "l" => return Command::List,
        "q" => return Command::Quit,
        "h" => return Command::Help,
        "b" => return Command::Debug,
        "v" => return Command::About,
        _ => {}
    }

    let Some((cmd, arg)) = split_command(input) else {
        return Command::Unknown(input.to_string());
    };

    match cmd {
        'i' => Command::Insert(parse_int(arg)),
        'd' => Command::Delete(parse_int(arg)),
        's' => Command::Switch(parse_int(arg)),
        'r' => Command::Remove(parse_int(arg)),
        'w' => path_arg(arg).map_or(
            Command::Usage("w file  Write buffer to file"),
            Command::Write,
        ),
        'o' => path_arg(arg).map_or(
            Command::Usage("o file  Open file and load to buffer"),
            Command::Open,
        ),
        'f' if !arg.is_empty() => Command::Find(arg.to_string()),
        'f' => Command::Usage("f pattern  Find lines matching pattern"),
        'x' => parse_replace(arg),
        'u' => parse_unit(arg),
        _ => Command::Unknown(input.to_string()),
    }
}

/// Split `"<letter> <arg>"` into the letter and the argument text.
fn split_command(input: &str) -> Option<(char, &str)> {
    let mut chars = input.chars();
    let cmd = chars.next()?;
    let arg = chars.as_str().strip_prefix(' ')?;
    Some((cmd, arg))
}

/// The `u` family: buffer management.
fn parse_unit(arg: &str) -> Command {
    match arg {
        "l" => Command::List,
        "c" => Command::Clear,
        _ => match split_command(arg) {
            Some(('s', n)) => Command::Switch(parse_int(n)),
            Some(('r', n)) => Command::Remove(parse_int(n)),
            _ => Command::Usage(UNIT_USAGE),
        },
    }
}

/// `x pattern replacement` — the pattern runs to the first whitespace, the
/// replacement is everything after it (possibly empty).
fn parse_replace(arg: &str) -> Command {
    let usage = Command::Usage("x pattern replacement  Replace pattern with replacement");
    let Some((pattern, replacement)) = arg.split_once(char::is_whitespace) else {
        return usage;
    };
    if pattern.is_empty() {
        return usage;
    }
    Command::Replace {
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}

/// A file argument with surrounding whitespace removed, or `None` if blank.
fn path_arg(arg: &str) -> Option<PathBuf> {
    let trimmed = arg.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Permissive integer parse: optional sign and leading digits, `0` when
/// there are none. Saturates instead of overflowing.
#[must_use]
pub fn parse_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative { -value } else { value }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
