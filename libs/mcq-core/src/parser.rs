//! Line-based parser for MCQ source files.
//!
//! # Format
//! ```text
//! Q1. What is 2+2?
//! a. 3
//! b. 4
//! c. 5
//! Q2. Which planet is largest?
//! a. Mars
//! b. Jupiter
//! ```
//!
//! Lines that are neither a question start nor an option are ignored.

use crate::error::{McqError, Result};
use crate::types::{McqOption, Question};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// `Q<digits>.` plus any whitespace at the start of a question line.
static QUESTION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Q\d+\.\s*").unwrap());

/// First run of digits anywhere on a question line.
static QUESTION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Single lowercase letter, period, one space, then the option text.
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-z])\. (.*)$").unwrap());

/// Classification of one normalized source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Question { number: Option<u32>, text: &'a str },
    Option { label: char, text: &'a str },
    Ignored,
}

impl<'a> LineKind<'a> {
    /// Classify a line that has already had its tabs replaced.
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with('Q') {
            let number = QUESTION_NUMBER
                .find(line)
                .and_then(|m| m.as_str().parse().ok());
            let text = match QUESTION_PREFIX.find(line) {
                Some(prefix) => &line[prefix.end()..],
                None => line,
            };
            return Self::Question { number, text };
        }

        match OPTION_LINE.captures(line) {
            Some(caps) => {
                let label = caps[1].chars().next().unwrap_or_default();
                let text = caps.get(2).map_or("", |m| m.as_str());
                Self::Option { label, text }
            }
            None => Self::Ignored,
        }
    }
}

/// Replace tab characters with single spaces.
fn normalize(line: &str) -> std::borrow::Cow<'_, str> {
    if line.contains('\t') {
        line.replace('\t', " ").into()
    } else {
        line.into()
    }
}

/// Parse source content into questions.
pub fn parse(content: &str) -> Vec<Question> {
    let mut parser = Parser::new();

    for (idx, line) in content.lines().enumerate() {
        parser.process_line(&normalize(line), idx + 1);
    }

    let questions = parser.finalize();
    tracing::debug!(questions = questions.len(), "parsed MCQ source");
    questions
}

/// Read and parse a source file.
///
/// A missing file yields [`McqError::FileNotFound`]; nothing is parsed.
pub fn parse_file(path: &Path) -> Result<Vec<Question>> {
    let content = fs::read_to_string(path).map_err(|e| McqError::from_io(path, e))?;
    Ok(parse(&content))
}

struct Parser {
    current: Option<Question>,
    questions: Vec<Question>,
}

impl Parser {
    fn new() -> Self {
        Self {
            current: None,
            questions: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) {
        match LineKind::classify(line) {
            LineKind::Question { number, text } => {
                self.flush();
                let position = self.questions.len() + 1;
                self.current = Some(Question::new(position, number, text));
            }
            LineKind::Option { label, text } => match self.current {
                Some(ref mut question) => question.options.push(McqOption::new(label, text)),
                None => tracing::debug!(line = line_num, "option before any question ignored"),
            },
            LineKind::Ignored => tracing::trace!(line = line_num, "ignored line"),
        }
    }

    fn flush(&mut self) {
        if let Some(question) = self.current.take() {
            self.questions.push(question);
        }
    }

    fn finalize(mut self) -> Vec<Question> {
        self.flush();
        self.questions
    }
}
