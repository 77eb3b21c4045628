//! Line-oriented terminal prompts.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use thiserror::Error;

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed")]
    Closed,
}

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Reads answers from `reader` and writes text to `writer`.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    delay: Duration,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter that prints at once and never clears the screen.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            delay: Duration::ZERO,
            clear_screen: false,
        }
    }

    /// Sets the typewriter delay used by [`say`](Self::say).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Enables or disables clearing the screen.
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Prints a line with the typewriter effect.
    pub fn say(&mut self, text: impl Display) -> Result<(), PromptError> {
        let text = text.to_string();
        if self.delay.is_zero() {
            writeln!(self.writer, "{}", text)?;
        } else {
            for c in text.chars() {
                write!(self.writer, "{}", c)?;
                self.writer.flush()?;
                thread::sleep(self.delay);
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Prints a block of text at once.
    pub fn show(&mut self, text: impl Display) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Clears the terminal if enabled.
    pub fn clear(&mut self) -> Result<(), PromptError> {
        if self.clear_screen {
            write!(self.writer, "{}", CLEAR_SCREEN)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Prints `question` and reads one trimmed line.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.writer, "{} ", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer, printing each rejection.
    pub fn ask_with<T, E, F>(&mut self, question: &str, mut parse: F) -> Result<T, PromptError>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Shows numbered `options` and returns the chosen index, starting at 1.
    pub fn menu(&mut self, title: &str, options: &[&str]) -> Result<usize, PromptError> {
        self.say(title)?;
        for (i, option) in options.iter().enumerate() {
            self.say(format_args!("  {}. {}", i + 1, option))?;
        }
        let count = options.len();
        self.ask_with(">", |answer| match answer.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => Ok(n),
            _ => Err(format!("Please enter a number between 1 and {}.", count)),
        })
    }

    /// Returns the writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the prompter and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
