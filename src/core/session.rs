//! The two entry modes: a prompt loop over a line stream, and a single
//! year taken from command-line arguments.

use crate::core::console::ConsoleInput;
use crate::core::engine::PrimeAgeEngine;
use crate::core::{Answer, Clock, Request};
use crate::utils::error::Result;
use crate::utils::validation::{parse_year, validate_single_argument};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter a birthyear. (q to quit)";

/// Answers birth years until quit or end of input. A negative age aborts
/// the whole session with [`crate::PrimeAgeError::NegativeAge`].
pub fn run_interactive<C, R, W>(engine: &PrimeAgeEngine<C>, reader: R, writer: W) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut console = ConsoleInput::new(reader, writer);

    // Prompt only once.
    writeln!(console.writer(), "{}", PROMPT)?;
    console.writer().flush()?;

    let mut answered = 0usize;
    loop {
        match console.next_request()? {
            Request::Quit => {
                tracing::info!(answered, "session ended");
                return Ok(());
            }
            Request::Year(birth_year) => {
                let answer = engine.answer(birth_year)?;
                write!(console.writer(), "{}\n\n", answer.year)?;
                console.writer().flush()?;
                answered += 1;
            }
        }
    }
}

pub fn year_from_args(args: &[String]) -> Result<i64> {
    let raw = validate_single_argument(args)?;
    parse_year(raw)
}

/// Nothing is written unless every step succeeds.
pub fn run_once<C, W>(engine: &PrimeAgeEngine<C>, args: &[String], mut writer: W) -> Result<Answer>
where
    C: Clock,
    W: Write,
{
    let birth_year = year_from_args(args)?;
    let answer = engine.answer(birth_year)?;
    writeln!(writer, "{}", answer.year)?;
    writer.flush()?;
    Ok(answer)
}
