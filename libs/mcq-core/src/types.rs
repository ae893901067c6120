//! Core types for multiple-choice question sheets.

use serde::{Deserialize, Serialize};

/// One answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqOption {
    /// Single lowercase letter, as written in the source file.
    pub label: char,
    pub text: String,
}

impl McqOption {
    pub fn new(label: char, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Question parsed from the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in parse order.
    pub position: usize,
    /// Number written on the question line (display only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub text: String,
    pub options: Vec<McqOption>,
}

impl Question {
    /// Create a question with no options yet.
    pub fn new(position: usize, number: Option<u32>, text: impl Into<String>) -> Self {
        Self {
            position,
            number,
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// Labels in their current order.
    pub fn labels(&self) -> Vec<char> {
        self.options.iter().map(|o| o.label).collect()
    }

    /// Option texts in their current order.
    pub fn option_texts(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.text.as_str()).collect()
    }
}

/// One independently randomized set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// 1-based set number.
    pub number: usize,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn title(&self) -> String {
        format!("Set {}", self.number)
    }
}
