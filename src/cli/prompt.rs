//! Line-oriented console prompting
//!
//! Generic over the reader and writer so the menu can be driven from
//! in-memory buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};

/// Asks questions on `output` and reads answers from `input`
pub struct Prompt<R, W> {
    input: R,
    output: W,
    at_eof: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            at_eof: false,
        }
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> LedgerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print text as-is, without adding a newline
    pub fn write(&mut self, text: &str) -> LedgerResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Show `label` and read one line, without its line ending
    ///
    /// Fails with a terminal error once input is exhausted; `at_eof` tells
    /// that case apart from a real I/O failure.
    pub fn ask(&mut self, label: &str) -> LedgerResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.at_eof = true;
            // Keep the transcript tidy when input ends mid-prompt
            writeln!(self.output)?;
            return Err(LedgerError::Terminal("end of input".into()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read a line, treating a blank answer as `None`
    pub fn ask_optional(&mut self, label: &str) -> LedgerResult<Option<String>> {
        let answer = self.ask(label)?;
        Ok(Some(answer).filter(|a| !a.trim().is_empty()))
    }

    pub fn at_eof(&self) -> bool {
        self.at_eof
    }
}
