//! Interactive prompts.
//!
//! The prompter reads from any `BufRead` and writes to any `Write`, so the
//! same code drives the terminal and the tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{CliError, Result};

/// Interpret a yes/no answer, case-insensitively.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_uppercase().as_str() {
        "Y" | "YES" => Some(true),
        "N" | "NO" => Some(false),
        _ => None,
    }
}

/// Parse the number of sets to generate. Zero is rejected.
pub fn parse_set_count(answer: &str) -> Result<usize> {
    let trimmed = answer.trim();
    match trimmed.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(CliError::InvalidSetCount(trimmed.to_string())),
    }
}

/// Line-oriented question/answer helper.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            interactive: true,
        }
    }

    /// Enable or disable prompting. Disabled prompts fail instead of asking.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Print `question` and read one line of input without its terminator.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        if !self.interactive {
            return Err(CliError::PromptDisabled(question.to_string()));
        }

        write!(self.output, "{}: ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed(question.to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until a yes/no answer is given.
    pub fn yes_no(&mut self, question: &str) -> Result<bool> {
        let question = format!("{} (Y/N)", question);
        loop {
            let answer = self.ask(&question)?;
            if let Some(yes) = parse_yes_no(&answer) {
                return Ok(yes);
            }
            tracing::debug!(answer = %answer, "unrecognized yes/no answer");
        }
    }

    /// Ask once for the number of sets.
    pub fn set_count(&mut self, question: &str) -> Result<usize> {
        let answer = self.ask(question)?;
        parse_set_count(&answer)
    }

    /// Ask once for a file path.
    pub fn path(&mut self, question: &str) -> Result<PathBuf> {
        let answer = self.ask(question)?;
        Ok(PathBuf::from(answer.trim()))
    }
}
