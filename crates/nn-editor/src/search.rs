//! Search — regex find and replace over a buffer's lines.
//!
//! Patterns use the [`regex`] crate's syntax and are matched against each
//! line on its own, so `^` and `$` anchor at line boundaries. Replacement
//! strings expand `$1`, `${name}` and friends the way
//! [`Regex::replace_all`] does.

use regex::Regex;

use crate::buffer::{Buffer, fit_line};

/// A line that matched a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

/// Every line of `buffer` containing at least one match of `re`.
#[must_use]
pub fn find_matches(buffer: &Buffer, re: &Regex) -> Vec<Match> {
    buffer
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| re.is_match(line))
        .map(|(i, line)| Match {
            line: i + 1,
            text: line.clone(),
        })
        .collect()
}

/// Replace every match of `re` on every line of `buffer`, fitting changed
/// lines back under `max_len` bytes. Returns the number of matches replaced.
pub fn replace_all(buffer: &mut Buffer, re: &Regex, replacement: &str, max_len: usize) -> usize {
    let mut replaced = 0;
    for idx in 0..buffer.line_count() {
        let Some(line) = buffer.line(idx) else {
            break;
        };
        let hits = re.find_iter(line).count();
        if hits == 0 {
            continue;
        }
        let new_line = re.replace_all(line, replacement).into_owned();
        buffer.set_line(idx, fit_line(new_line, max_len));
        replaced += hits;
    }
    replaced
}
