//! Interactive prompts over an injected input/output pair.
//!
//! Handlers never touch stdin or stdout directly; they receive a [`Console`]
//! so tests can drive them with a `Cursor` and capture output in a `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::CliError;
use crate::io_utils::read_stdin_line;

pub struct Console<'a> {
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Self {
        Self { input, out, err }
    }

    /// Shows `prompt` and reads one trimmed line. `None` means input ended.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(read_stdin_line(self.input))
    }

    fn require_line(&mut self, prompt: &str) -> Result<String, CliError> {
        self.read_line(prompt)?
            .ok_or_else(|| CliError::Interrupted("input closed".to_string()))
    }

    /// Strict yes/no question. Anything but y/yes/n/no asks again; end of
    /// input counts as no.
    pub fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        loop {
            let Some(answer) = self.read_line(&format!("{} [y/n]: ", question))? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.out, "Please answer y or n")?,
            }
        }
    }

    /// Free text with a default used for an empty answer.
    pub fn ask_text(&mut self, question: &str, default: &str) -> Result<String, CliError> {
        let answer = self.require_line(&format!("{} [{}]: ", question, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Number with a default used for an empty answer. Unparsable answers
    /// ask again.
    pub fn ask_number<T>(&mut self, question: &str, default: T) -> Result<T, CliError>
    where
        T: FromStr + Display + Copy,
    {
        loop {
            let answer = self.require_line(&format!("{} [{}]: ", question, default))?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "{} is not a valid number", answer)?,
            }
        }
    }

    /// Numbered menu. Returns the chosen index, or `None` when the cancel
    /// entry (0) is picked.
    pub fn select(
        &mut self,
        options: &[&str],
        question: &str,
        cancel: Option<&str>,
    ) -> Result<Option<usize>, CliError> {
        writeln!(self.out, "{}", question)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "  [{}] {}", i + 1, option)?;
        }
        if let Some(label) = cancel {
            writeln!(self.out, "  [0] {}", label)?;
        }
        let lowest = if cancel.is_some() { 0 } else { 1 };
        loop {
            let answer = self.require_line(&format!("Choose [{}-{}]: ", lowest, options.len()))?;
            match answer.parse::<usize>() {
                Ok(0) if cancel.is_some() => return Ok(None),
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.out, "Please choose a number from the list")?,
            }
        }
    }
}
