//! Terminal handle shared by all interactive prompts.
//!
//! [`Console`] is generic over its input and output so prompt flows can be
//! driven from an in-memory buffer in tests and from stdin/stdout in the
//! binary.

use std::io::{self, BufRead, BufReader, ErrorKind, Stdin, Stdout, Write};

use colored::Colorize;
use thiserror::Error;

/// Consecutive end-of-input reads tolerated before the input is considered closed.
pub const MAX_CONSECUTIVE_EOF: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Warning,
    Success,
}

/// Wraps a message in the color directive for the given severity.
pub fn paint(severity: Severity, message: &str) -> String {
    let colored = match severity {
        Severity::Danger => message.bright_red(),
        Severity::Warning => message.bright_yellow(),
        Severity::Success => message.bright_green(),
    };
    colored.to_string()
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input stream closed")]
    InputClosed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console over the process' stdin and stdout.
    ///
    /// Stdin is not locked for the lifetime of the console, so the panic hook
    /// can still wait for ENTER.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `message` without a newline and reads one trimmed line.
    ///
    /// Interrupted reads and end-of-input are retried with the same prompt.
    /// After [`MAX_CONSECUTIVE_EOF`] end-of-input reads in a row the stream is
    /// treated as closed.
    pub fn read_line(&mut self, message: &str) -> Result<String, ConsoleError> {
        let mut eof_count = 0;
        loop {
            write!(self.writer, "{}", message)?;
            self.writer.flush()?;

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    eof_count += 1;
                    if eof_count >= MAX_CONSECUTIVE_EOF {
                        return Err(ConsoleError::InputClosed);
                    }
                    writeln!(self.writer)?;
                }
                Ok(_) => return Ok(line.trim().to_string()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ConsoleError::Io(e)),
            }
        }
    }

    pub fn println(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    pub fn danger(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.println(&paint(Severity::Danger, message))
    }

    pub fn warning(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.println(&paint(Severity::Warning, message))
    }

    pub fn success(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.println(&paint(Severity::Success, message))
    }

    /// Moves the cursor one line up and rewrites the prompt with `answer`,
    /// so an accepted default looks as if the user had typed it.
    pub fn overwrite_previous(&mut self, message: &str, answer: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "\x1b[A{}{}", message, answer)?;
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}
