//! Command interpreter — the read/dispatch/report loop.
//!
//! Each cycle prints the `]` prompt, reads one line, parses it into a
//! [`Command`], runs it against the [`BufferStore`], and writes the result.
//! Every store error is reported as one `E:` line and the loop carries on;
//! only `q` or end of input stop it.
//!
//! `i` and `a` read their text from the same input through
//! [`LineReader::until_dot`]. `i` validates its line number and the free
//! capacity *before* reading any text, and reads no more lines than fit, so
//! whatever it leaves unread is parsed as commands.
//!
//! The interpreter is generic over its input and output so a whole session
//! can run against in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::command::{self, Command};
use crate::error::EditError;
use crate::info;
use crate::source::LineReader;
use crate::store::BufferStore;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read the next command.
    Continue,
    /// End the session.
    Quit,
}

/// Drives a [`BufferStore`] from line-oriented input.
#[derive(Debug)]
pub struct Interpreter<R, W> {
    store: BufferStore,
    input: LineReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    pub const fn new(store: BufferStore, input: R, out: W) -> Self {
        Self {
            store,
            input: LineReader::new(input),
            out,
        }
    }

    /// The store being edited.
    #[inline]
    #[must_use]
    pub const fn store(&self) -> &BufferStore {
        &self.store
    }

    /// Tear down the interpreter, returning the store and the output sink.
    pub fn into_parts(self) -> (BufferStore, W) {
        (self.store, self.out)
    }

    /// Run the session until `q` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the input or output stream end the session with
    /// an error; editing errors are reported and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "{} {}", info::NAME, info::VERSION)?;
        loop {
            write!(self.out, "]")?;
            self.out.flush()?;

            let Some(line) = self.input.read_line()? else {
                debug!("end of input");
                break;
            };
            let cmd = command::parse(&line);
            debug!(?cmd, "command");
            if self.execute(cmd)? == Action::Quit {
                break;
            }
        }
        self.out.flush()
    }

    /// Run one command and write its report.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures on the input (sub-mode text) or output.
    pub fn execute(&mut self, cmd: Command) -> io::Result<Action> {
        match cmd {
            Command::Print => {
                self.summary()?;
                for (n, line) in self.store.print() {
                    writeln!(self.out, "{n}: {line}")?;
                }
            }
            Command::Insert(after) => self.insert(after)?,
            Command::Append => {
                self.summary()?;
                let lines = self.input.until_dot().collect::<io::Result<Vec<_>>>()?;
                let summary = self.store.append(lines);
                writeln!(self.out, "{summary}")?;
            }
            Command::Delete(line) => match self.store.delete(line) {
                Ok(summary) => {
                    writeln!(self.out, "Deleted line {line}")?;
                    writeln!(self.out, "{summary}")?;
                }
                Err(e) => self.report(&e)?,
            },
            Command::Write(path) => {
                match self.store.write_to_file(&path) {
                    Ok(_) => writeln!(self.out, "OK {}", path.display())?,
                    Err(e) => self.report(&e)?,
                }
                self.summary()?;
            }
            Command::Open(path) => {
                match self.store.load_from_file(&path) {
                    Ok(_) => writeln!(self.out, "{} OK", path.display())?,
                    Err(e) => self.report(&e)?,
                }
                self.summary()?;
            }
            Command::Find(pattern) => match self.store.find(&pattern) {
                Ok(found) if found.is_empty() => writeln!(self.out, "No matches found")?,
                Ok(found) => {
                    writeln!(self.out, "Found {} matches:", found.len())?;
                    for m in found {
                        writeln!(self.out, "{}: {}", m.line, m.text)?;
                    }
                }
                Err(e) => self.report(&e)?,
            },
            Command::Replace {
                pattern,
                replacement,
            } => match self.store.replace(&pattern, &replacement) {
                Ok(0) => writeln!(self.out, "No matches found")?,
                Ok(n) => {
                    writeln!(self.out, "Replaced {n} occurrences")?;
                    self.summary()?;
                }
                Err(e) => self.report(&e)?,
            },
            Command::List => {
                writeln!(self.out, "Buffers info:")?;
                for row in self.store.list() {
                    writeln!(self.out, "{row}")?;
                }
            }
            Command::Clear => {
                let summary = self.store.clear();
                writeln!(self.out, "OK")?;
                writeln!(self.out, "{summary}")?;
            }
            Command::Switch(n) => match self.store.switch_to(n) {
                Ok(summary) => writeln!(self.out, "{summary}")?,
                Err(e) => self.report(&e)?,
            },
            Command::Remove(n) => match self.store.remove(n) {
                Ok(switched) => {
                    if switched {
                        writeln!(self.out, "OK:switch to buffer 0")?;
                    }
                    writeln!(self.out, "Buffer {n} removed.")?;
                }
                Err(e) => self.report(&e)?,
            },
            Command::Quit => {
                writeln!(self.out, "Bye!")?;
                return Ok(Action::Quit);
            }
            Command::Help => {
                writeln!(self.out, "{}", info::signature())?;
                writeln!(self.out, "{}", info::COMMANDS)?;
            }
            Command::Debug => {
                for line in info::debug() {
                    writeln!(self.out, "{line}")?;
                }
                self.summary()?;
            }
            Command::About => {
                for line in info::about() {
                    writeln!(self.out, "{line}")?;
                }
            }
            Command::Usage(hint) => writeln!(self.out, "{hint}")?,
            Command::Unknown(_) => {
                writeln!(self.out, "E:Unknown command, enter h for help.")?;
                self.summary()?;
            }
        }
        Ok(Action::Continue)
    }

    /// `i n`: check, collect at most the free line count, then insert.
    fn insert(&mut self, after: i64) -> io::Result<()> {
        self.summary()?;
        let room = match self.store.insert_capacity(after) {
            Ok(room) => room,
            Err(e) => return self.report(&e),
        };

        let lines = self
            .input
            .until_dot()
            .take(room)
            .collect::<io::Result<Vec<_>>>()?;
        if lines.is_empty() {
            return Ok(());
        }

        match self.store.insert(after, lines) {
            Ok(summary) => writeln!(self.out, "{summary}"),
            Err(e) => self.report(&e),
        }
    }

    fn summary(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.store.summary())
    }

    fn report(&mut self, err: &EditError) -> io::Result<()> {
        debug!(error = %err, "command failed");
        writeln!(self.out, "E:{err}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
