//! Renderer-neutral document model.
//!
//! A [`Story`] is the ordered list of blocks every renderer walks. Each set
//! contributes its header (image, summary, boilerplate, title), its
//! questions renumbered from 1, and a closing page break.

use crate::markup::Boilerplate;
use crate::types::QuestionSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One document element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Image { path: PathBuf },
    Summary { text: String },
    Boilerplate { content: Boilerplate },
    SetTitle { number: usize },
    Question { number: usize, text: String },
    Option { label: char, text: String },
    PageBreak,
}

/// Per-document header content repeated before every set.
#[derive(Debug, Clone, Default)]
pub struct StoryOptions {
    /// Image placed first in each set, if present on disk.
    pub image: Option<PathBuf>,
    pub summary: String,
    pub boilerplate: Boilerplate,
}

/// Ordered blocks making up the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Story {
    pub blocks: Vec<Block>,
}

impl Story {
    pub fn page_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }
}

/// Lay out all sets into a single story.
pub fn build_story(sets: &[QuestionSet], options: &StoryOptions) -> Story {
    let mut blocks = Vec::new();

    for set in sets {
        if let Some(path) = &options.image {
            blocks.push(Block::Image { path: path.clone() });
        }
        blocks.push(Block::Summary {
            text: options.summary.clone(),
        });
        blocks.push(Block::Boilerplate {
            content: options.boilerplate.clone(),
        });
        blocks.push(Block::SetTitle { number: set.number });

        for (idx, question) in set.questions.iter().enumerate() {
            blocks.push(Block::Question {
                number: idx + 1,
                text: question.text.clone(),
            });
            blocks.extend(question.options.iter().map(|o| Block::Option {
                label: o.label,
                text: o.text.clone(),
            }));
        }

        blocks.push(Block::PageBreak);
    }

    Story { blocks }
}
