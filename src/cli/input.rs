//! Line-oriented console prompts.
//!
//! Every prompt prints `"<text>: "` without a newline and reads one line. A
//! blank line (or end of input) means "no value", which is different from a
//! value that fails to parse.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::cli::error::{CliError, CliResult};
use crate::db::Hours;

/// Parse a whole number, echoing the input back on failure.
pub fn parse_number<T: FromStr>(input: &str) -> CliResult<T> {
    input.parse().map_err(|_| CliError::InvalidInput {
        input: input.to_string(),
        expected: "number",
    })
}

/// Parse an hour value with at most two fractional digits.
pub fn parse_decimal(input: &str) -> CliResult<Hours> {
    input.parse().map_err(|_| CliError::InvalidInput {
        input: input.to_string(),
        expected: "decimal number",
    })
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the prompt and read one trimmed line; `None` when blank.
    pub fn string_input(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input runs out.
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    pub fn number_input<T: FromStr>(&mut self, prompt: &str) -> CliResult<Option<T>> {
        self.string_input(prompt)?
            .map(|s| parse_number(&s))
            .transpose()
    }

    pub fn decimal_input(&mut self, prompt: &str) -> CliResult<Option<Hours>> {
        self.string_input(prompt)?
            .map(|s| parse_decimal(&s))
            .transpose()
    }
}
