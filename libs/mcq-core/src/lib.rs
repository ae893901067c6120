//! Core library for shuffling multiple-choice question sheets.
//!
//! Provides:
//! - Line-based parser for MCQ source files
//! - Randomizer producing independent shuffled sets
//! - Boilerplate markup parsing (alignment and bold markers)
//! - Story model shared by all renderers

pub mod error;
pub mod markup;
pub mod parser;
pub mod randomizer;
pub mod story;
pub mod types;

pub use error::{McqError, Result};
pub use markup::{load_boilerplate, Alignment, Boilerplate, MarkupLine, Span};
pub use parser::{parse, parse_file, LineKind};
pub use randomizer::{
    generate_sets, randomize, shuffle_options, Permuter, QuestionOrder, RandomPermuter,
};
pub use story::{build_story, Block, Story, StoryOptions};
pub use types::{McqOption, Question, QuestionSet};
