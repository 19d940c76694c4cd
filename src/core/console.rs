//! Line-oriented acquisition of birth years from an interactive stream.
//!
//! Each call to [`ConsoleInput::next_request`] loops until it has either a
//! parsed year or a reason to stop. Bad lines and read failures are reported
//! on the output stream and the loop prompts again.

use crate::core::Request;
use crate::utils::error::{PrimeAgeError, Result};
use crate::utils::validation::parse_year;
use std::io::{BufRead, Write};

pub const QUIT_KEYWORD: &str = "q";

/// Consecutive read failures after which the stream counts as closed.
pub const MAX_READ_FAILURES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prompting,
    Parsing,
}

pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Errors only when the output stream itself fails.
    pub fn next_request(&mut self) -> Result<Request> {
        let mut state = State::Prompting;
        let mut failures = 0;

        loop {
            match state {
                State::Prompting => {
                    self.line.clear();
                    match self.reader.read_line(&mut self.line) {
                        Ok(0) => {
                            tracing::debug!("input stream closed");
                            return Ok(Request::Quit);
                        }
                        Ok(_) => {
                            failures = 0;
                            state = State::Parsing;
                        }
                        Err(e) => {
                            failures += 1;
                            tracing::warn!(error = %e, failures, "failed to read input line");
                            if failures >= MAX_READ_FAILURES {
                                tracing::warn!("giving up on input stream");
                                return Ok(Request::Quit);
                            }
                            write!(
                                self.writer,
                                "Error reading input. Please enter only one number.\n\n"
                            )?;
                            self.writer.flush()?;
                        }
                    }
                }
                State::Parsing => {
                    let input = trim_newline(&self.line);
                    if input == QUIT_KEYWORD {
                        return Ok(Request::Quit);
                    }

                    match parse_year(input) {
                        Ok(year) => return Ok(Request::Year(year)),
                        Err(e @ PrimeAgeError::Parse { .. }) => {
                            tracing::debug!(input, "rejected input");
                            write!(self.writer, "{}\n\n", e)?;
                            self.writer.flush()?;
                            state = State::Prompting;
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Drops one line terminator, `\n` or `\r\n`.
fn trim_newline(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
