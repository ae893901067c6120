//! Boilerplate text with inline markup.
//!
//! # Format
//! ```text
//! <right>[B]Name:[/B] ____________</right>
//! Answer every question.
//! <left>Marks are shown in brackets.</left>
//! ```
//!
//! Every source line becomes one [`MarkupLine`]. Alignment and bold markers
//! may span several lines and alignment markers nest. Unmatched closing
//! markers are dropped and unclosed markers run to the end of the text.

use crate::error::{McqError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?left>|</?right>|\[/?B\]").unwrap());

/// Horizontal alignment of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Run of text with uniform weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One line of boilerplate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkupLine {
    pub alignment: Alignment,
    pub spans: Vec<Span>,
}

impl MarkupLine {
    /// Text of the line with markup removed.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }
}

/// Parsed boilerplate text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Boilerplate {
    pub lines: Vec<MarkupLine>,
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    Open(Alignment),
    Close(Alignment),
    BoldOpen,
    BoldClose,
}

impl Marker {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "<left>" => Some(Self::Open(Alignment::Left)),
            "</left>" => Some(Self::Close(Alignment::Left)),
            "<right>" => Some(Self::Open(Alignment::Right)),
            "</right>" => Some(Self::Close(Alignment::Right)),
            "[B]" => Some(Self::BoldOpen),
            "[/B]" => Some(Self::BoldClose),
            _ => None,
        }
    }
}

#[derive(Default)]
struct MarkupState {
    /// Open alignment markers, innermost last.
    alignments: Vec<Alignment>,
    bold: bool,
}

impl MarkupState {
    fn apply(&mut self, marker: Marker) {
        match marker {
            Marker::Open(alignment) => self.alignments.push(alignment),
            Marker::Close(alignment) => {
                if self.alignments.last() == Some(&alignment) {
                    self.alignments.pop();
                }
            }
            Marker::BoldOpen => self.bold = true,
            Marker::BoldClose => self.bold = false,
        }
    }

    fn alignment(&self) -> Alignment {
        self.alignments.last().copied().unwrap_or_default()
    }
}

impl Boilerplate {
    /// Parse boilerplate markup.
    pub fn parse(text: &str) -> Self {
        let mut state = MarkupState::default();
        let lines = text
            .lines()
            .map(|line| Self::parse_line(line, &mut state))
            .collect();
        Self { lines }
    }

    fn parse_line(line: &str, state: &mut MarkupState) -> MarkupLine {
        let mut spans = Vec::new();
        let mut alignment = None;
        let mut cursor = 0;

        let mut push = |text: &str, state: &MarkupState, spans: &mut Vec<Span>| {
            if text.is_empty() {
                return;
            }
            // The first visible text fixes the line's alignment.
            alignment.get_or_insert(state.alignment());
            spans.push(Span {
                text: text.to_string(),
                bold: state.bold,
            });
        };

        for m in MARKER.find_iter(line) {
            push(&line[cursor..m.start()], state, &mut spans);
            if let Some(marker) = Marker::from_tag(m.as_str()) {
                state.apply(marker);
            }
            cursor = m.end();
        }
        push(&line[cursor..], state, &mut spans);

        MarkupLine {
            alignment: alignment.unwrap_or_else(|| state.alignment()),
            spans,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(MarkupLine::is_empty)
    }
}

/// Read and parse a boilerplate file.
pub fn load_boilerplate(path: &Path) -> Result<Boilerplate> {
    let text = fs::read_to_string(path).map_err(|e| McqError::from_io(path, e))?;
    let boilerplate = Boilerplate::parse(&text);
    tracing::debug!(path = %path.display(), lines = boilerplate.lines.len(), "loaded boilerplate");
    Ok(boilerplate)
}
